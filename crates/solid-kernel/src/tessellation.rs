//! Solid → [`TriangleMesh`] conversion, delegated to truck-meshalgo.
//!
//! The kernel's polygon output indexes positions and normals separately per
//! corner; conversion welds those pairs into unified vertices so the mesh's
//! position and normal arrays stay parallel.

use std::collections::HashMap;

use tracing::debug;
use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

use crate::solid::Solid;
use crate::types::TriangleMesh;

/// Default chordal tolerance for triangulation.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Triangulate a solid at [`DEFAULT_TOLERANCE`].
///
/// Read-only on the solid. Cost scales with the solid's geometric
/// complexity; the result is deterministic for a given solid and tolerance.
pub fn mesh_from_solid(solid: &Solid) -> TriangleMesh {
    mesh_from_solid_with_tolerance(solid, DEFAULT_TOLERANCE)
}

/// Triangulate a solid at an explicit chordal tolerance.
pub fn mesh_from_solid_with_tolerance(solid: &Solid, tolerance: f64) -> TriangleMesh {
    let meshed = solid.kernel().triangulation(tolerance);
    let polygon = meshed.to_polygon();

    let positions = polygon.positions();
    let normals = polygon.normals();
    let tri_faces = polygon.tri_faces();

    let mut mesh = TriangleMesh::default();
    // (position index, normal index) pairs already welded into the output.
    let mut remap: HashMap<(usize, Option<usize>), u32> = HashMap::new();

    for tri in tri_faces {
        // Flat normal from the triangle's winding, for corners the kernel
        // left without a stored normal.
        let a = positions[tri[0].pos];
        let b = positions[tri[1].pos];
        let c = positions[tri[2].pos];
        let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let face_normal = if len > 1e-12 {
            [(nx / len) as f32, (ny / len) as f32, (nz / len) as f32]
        } else {
            [0.0, 0.0, 1.0]
        };

        let mut idx = [0u32; 3];
        for (slot, v) in tri.iter().enumerate() {
            let key = (v.pos, v.nor);
            idx[slot] = match remap.get(&key) {
                Some(&i) => i,
                None => {
                    let p = positions[v.pos];
                    mesh.positions
                        .push([p[0] as f32, p[1] as f32, p[2] as f32]);
                    mesh.normals.push(match v.nor {
                        Some(ni) => {
                            let n = normals[ni];
                            [n[0] as f32, n[1] as f32, n[2] as f32]
                        }
                        None => face_normal,
                    });
                    let i = (mesh.positions.len() - 1) as u32;
                    remap.insert(key, i);
                    i
                }
            };
        }
        mesh.triangles.push(idx);
    }

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        tolerance,
        "tessellated solid"
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;

    #[test]
    fn test_cube_mesh_counts() {
        let solid = primitives::cube(1.0, 1.0, 1.0);
        let mesh = mesh_from_solid(&solid);

        assert!(mesh.vertex_count() > 0, "Mesh should have vertices");
        // 6 planar faces, 2 triangles each, at minimum.
        assert!(mesh.triangle_count() >= 12, "Box needs at least 12 triangles");
        assert_eq!(
            mesh.positions.len(),
            mesh.normals.len(),
            "positions and normals must stay parallel"
        );
    }

    #[test]
    fn test_cube_indices_in_range() {
        let solid = primitives::cube(2.0, 1.0, 0.5);
        let mesh = mesh_from_solid(&solid);

        let n = mesh.vertex_count() as u32;
        for tri in &mesh.triangles {
            for &i in tri {
                assert!(i < n, "index {i} out of range (vertex count = {n})");
            }
        }
    }

    #[test]
    fn test_sphere_mesh_nonempty() {
        let solid = primitives::sphere(1.0);
        let mesh = mesh_from_solid(&solid);

        assert!(mesh.vertex_count() > 0);
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn test_cube_bounding_box_pins_origin_convention() {
        let solid = primitives::cube(2.0, 2.0, 2.0);
        let mesh = mesh_from_solid(&solid);

        let (min, max) = mesh.bounding_box().expect("cube mesh is non-empty");
        let eps = 1e-5;
        for i in 0..3 {
            assert!(min[i].abs() < eps, "cube corner sits at the origin");
            assert!(
                (max[i] - 2.0).abs() < eps,
                "cube extent should be exactly 2 per axis"
            );
        }
    }

    #[test]
    fn test_cube_volume() {
        let solid = primitives::cube(1.0, 2.0, 3.0);
        let mesh = mesh_from_solid(&solid);

        approx::assert_relative_eq!(mesh.volume(), 6.0, max_relative = 1e-3);
    }

    #[test]
    fn test_sphere_volume_approaches_analytic() {
        let solid = primitives::sphere(1.0);
        let mesh = mesh_from_solid_with_tolerance(&solid, 0.005);

        let expected = 4.0 / 3.0 * std::f64::consts::PI;
        approx::assert_relative_eq!(mesh.volume(), expected, max_relative = 0.1);
    }

    #[test]
    fn test_tessellation_is_deterministic() {
        let solid = primitives::cube(1.0, 1.0, 1.0);
        let a = mesh_from_solid(&solid);
        let b = mesh_from_solid(&solid);

        assert_eq!(a.positions, b.positions);
        assert_eq!(a.normals, b.normals);
        assert_eq!(a.triangles, b.triangles);
    }
}
