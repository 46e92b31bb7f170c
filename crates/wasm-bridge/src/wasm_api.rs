//! WASM entry points for the browser runtime.
//!
//! Only compiled for the wasm32 target. JavaScript owns every returned
//! handle and frees it explicitly with `.free()`, mirroring the facade's
//! exclusive-ownership contract. Buffers are freshly allocated copies, not
//! views into WASM memory, so they survive memory growth.

use wasm_bindgen::prelude::*;

use crate::MeshData;

/// Owned handle to a kernel solid.
#[wasm_bindgen]
pub struct Solid {
    inner: solid_kernel::Solid,
}

/// Owned handle to a triangulated mesh.
#[wasm_bindgen]
pub struct Mesh {
    inner: solid_kernel::TriangleMesh,
}

#[wasm_bindgen]
impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.inner.triangle_count()
    }
}

/// Install panic hooks for readable errors. Call once before anything else.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Sphere of the given radius, centered at the origin.
#[wasm_bindgen]
pub fn sphere(radius: f64) -> Solid {
    Solid {
        inner: solid_kernel::sphere(radius),
    }
}

/// Axis-aligned box with one corner at the origin; extents are full side
/// lengths.
#[wasm_bindgen]
pub fn cube(x: f64, y: f64, z: f64) -> Solid {
    Solid {
        inner: solid_kernel::cube(x, y, z),
    }
}

/// Cylinder along +Z, base circle centered at the origin.
#[wasm_bindgen]
pub fn cylinder(radius: f64, height: f64) -> Solid {
    Solid {
        inner: solid_kernel::cylinder(radius, height),
    }
}

/// Triangulate a solid. May be expensive for complex solids.
#[wasm_bindgen]
pub fn mesh_from_solid(solid: &Solid) -> Mesh {
    Mesh {
        inner: solid_kernel::mesh_from_solid(&solid.inner),
    }
}

/// Interleaved vertex buffer: `[px, py, pz, nx, ny, nz]` per vertex.
#[wasm_bindgen]
pub fn mesh_vertices(mesh: &Mesh) -> js_sys::Float32Array {
    js_sys::Float32Array::from(solid_kernel::mesh_vertices(&mesh.inner).as_slice())
}

/// Triangle index buffer: `[i0, i1, i2]` per triangle.
#[wasm_bindgen]
pub fn mesh_indices(mesh: &Mesh) -> js_sys::Uint32Array {
    js_sys::Uint32Array::from(solid_kernel::mesh_indices(&mesh.inner).as_slice())
}

/// Binary STL bytes for download on the JS side. The browser has no
/// filesystem, so naming and saving the file happens over there.
#[wasm_bindgen]
pub fn export_stl(mesh: &Mesh) -> js_sys::Uint8Array {
    let bytes = mesh_export::stl_bytes(&mesh.inner, &mesh_export::ExportOptions::default())
        .expect("facade meshes always have in-range indices");
    js_sys::Uint8Array::from(bytes.as_slice())
}

/// Mesh as JSON `{positions, normals, indices}` for non-typed-array
/// consumers.
#[wasm_bindgen]
pub fn mesh_json(mesh: &Mesh) -> String {
    crate::mesh_to_json(&MeshData::from(&mesh.inner))
}
