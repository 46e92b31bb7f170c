use serde::{Deserialize, Serialize};

/// Triangulated surface of a solid, normalized for rendering.
///
/// `positions` and `normals` are parallel arrays — one normal per position.
/// Triangle indices reference the position array and keep the winding the
/// kernel produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions, one `[x, y, z]` per vertex.
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals, same length as `positions`.
    pub normals: Vec<[f32; 3]>,
    /// Triangle vertex-index triples.
    pub triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.triangles.is_empty()
    }

    /// Append another mesh, offsetting its indices past our vertices.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|t| [t[0] + offset, t[1] + offset, t[2] + offset]),
        );
    }

    /// Enclosed volume via the signed-tetrahedron sum.
    /// Only meaningful for closed meshes.
    pub fn volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| {
                let a = self.positions[t[0] as usize];
                let b = self.positions[t[1] as usize];
                let c = self.positions[t[2] as usize];
                let (ax, ay, az) = (a[0] as f64, a[1] as f64, a[2] as f64);
                let (bx, by, bz) = (b[0] as f64, b[1] as f64, b[2] as f64);
                let (cx, cy, cz) = (c[0] as f64, c[1] as f64, c[2] as f64);
                // a · (b × c) / 6
                (ax * (by * cz - bz * cy) + ay * (bz * cx - bx * cz) + az * (bx * cy - by * cx))
                    / 6.0
            })
            .sum::<f64>()
            .abs()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for a mesh with
    /// no vertices.
    pub fn bounding_box(&self) -> Option<([f32; 3], [f32; 3])> {
        if self.positions.is_empty() {
            return None;
        }
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit tetrahedron with outward winding: volume 1/6.
    fn tetrahedron() -> TriangleMesh {
        TriangleMesh {
            positions: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            normals: vec![[0.0, 0.0, 1.0]; 4],
            triangles: vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        }
    }

    #[test]
    fn test_counts_and_empty() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        assert!(!mesh.is_empty());
        assert!(TriangleMesh::default().is_empty());
    }

    #[test]
    fn test_volume_tetrahedron() {
        let volume = tetrahedron().volume();
        assert!(
            (volume - 1.0 / 6.0).abs() < 1e-6,
            "tetrahedron volume should be 1/6, got {volume}"
        );
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = tetrahedron();
        let b = tetrahedron();
        a.merge(&b);

        assert_eq!(a.vertex_count(), 8);
        assert_eq!(a.triangle_count(), 8);
        // Second mesh's first triangle was [0, 2, 1], now offset by 4.
        assert_eq!(a.triangles[4], [4, 6, 5]);
        assert_eq!(a.positions.len(), a.normals.len());
    }

    #[test]
    fn test_bounding_box() {
        let mesh = tetrahedron();
        let (min, max) = mesh.bounding_box().expect("non-empty mesh has a bbox");
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_eq!(max, [1.0, 1.0, 1.0]);

        assert!(TriangleMesh::default().bounding_box().is_none());
    }
}
