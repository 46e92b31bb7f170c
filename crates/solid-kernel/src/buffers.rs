//! Flat, boundary-safe projections of a [`TriangleMesh`].
//!
//! Both functions hand back freshly allocated buffers with a fixed stride
//! and no headers: 6 floats per vertex, 3 indices per triangle.

use crate::types::TriangleMesh;

/// Interleaved per-vertex buffer: `(px, py, pz, nx, ny, nz)` per vertex.
///
/// Panics if the mesh's position and normal counts disagree. That indicates
/// a corrupt mesh and is not recoverable here.
pub fn mesh_vertices(mesh: &TriangleMesh) -> Vec<f32> {
    assert_eq!(
        mesh.positions.len(),
        mesh.normals.len(),
        "corrupt mesh: position/normal counts disagree"
    );

    let mut out = Vec::with_capacity(mesh.positions.len() * 6);
    for (p, n) in mesh.positions.iter().zip(mesh.normals.iter()) {
        out.extend_from_slice(p);
        out.extend_from_slice(n);
    }
    out
}

/// Flat triangle index buffer: `(i0, i1, i2)` per triangle, in the winding
/// order the kernel stored. No reordering or normalization.
pub fn mesh_indices(mesh: &TriangleMesh) -> Vec<u32> {
    let mut out = Vec::with_capacity(mesh.triangles.len() * 3);
    for tri in &mesh.triangles {
        out.extend_from_slice(tri);
    }
    out
}
