//! STL writers — binary and ASCII.
//!
//! Binary STL layout:
//! - 80 bytes: header
//! - 4 bytes: u32 LE triangle count
//! - Per triangle (50 bytes each):
//!   - 12 bytes: normal vector (3 × f32 LE)
//!   - 36 bytes: 3 vertices (3 × 3 × f32 LE)
//!   - 2 bytes: attribute byte count (0u16)

use std::io::Write;
use std::path::Path;

use solid_kernel::TriangleMesh;

use crate::errors::ExportError;
use crate::options::ExportOptions;

/// Write `mesh` to `path` as binary STL with default options.
///
/// An empty mesh writes a valid zero-triangle file. IO failures are
/// reported, never swallowed.
pub fn export_mesh(path: impl AsRef<Path>, mesh: &TriangleMesh) -> Result<(), ExportError> {
    export_mesh_with(path, mesh, &ExportOptions::default())
}

/// Write `mesh` to `path` as binary STL with explicit options.
pub fn export_mesh_with(
    path: impl AsRef<Path>,
    mesh: &TriangleMesh,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let bytes = stl_bytes(mesh, options)?;
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Serialize `mesh` as binary STL bytes.
pub fn stl_bytes(mesh: &TriangleMesh, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    validate_indices(mesh)?;

    let tri_count = mesh.triangle_count();
    let mut buf = Vec::with_capacity(84 + tri_count * 50);

    // 80-byte header
    let header = format!("binary STL: {}", options.name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    // Triangle count (u32 LE)
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in &mesh.triangles {
        let normal = facet_normal(mesh, tri, options.faceted);
        for c in &normal {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for &idx in tri {
            for c in &mesh.positions[idx as usize] {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Serialize `mesh` as an ASCII STL string.
pub fn stl_ascii(mesh: &TriangleMesh, options: &ExportOptions) -> Result<String, ExportError> {
    validate_indices(mesh)?;

    let mut out = String::with_capacity(mesh.triangle_count() * 300);
    out.push_str(&format!("solid {}\n", options.name));

    for tri in &mesh.triangles {
        let [nx, ny, nz] = facet_normal(mesh, tri, options.faceted);
        out.push_str(&format!("  facet normal {} {} {}\n", nx, ny, nz));
        out.push_str("    outer loop\n");
        for &idx in tri {
            let [x, y, z] = mesh.positions[idx as usize];
            out.push_str(&format!("      vertex {} {} {}\n", x, y, z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", options.name));
    Ok(out)
}

fn validate_indices(mesh: &TriangleMesh) -> Result<(), ExportError> {
    let vertex_count = mesh.vertex_count();
    for tri in &mesh.triangles {
        for &idx in tri {
            if idx as usize >= vertex_count {
                return Err(ExportError::IndexOutOfRange {
                    index: idx,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}

/// Facet normal for one triangle: flat from the winding when `faceted`,
/// otherwise the normalized average of the stored vertex normals.
fn facet_normal(mesh: &TriangleMesh, tri: &[u32; 3], faceted: bool) -> [f32; 3] {
    if !faceted {
        let mut sum = [0.0f32; 3];
        for &idx in tri {
            let n = mesh.normals[idx as usize];
            for i in 0..3 {
                sum[i] += n[i];
            }
        }
        let len = (sum[0] * sum[0] + sum[1] * sum[1] + sum[2] * sum[2]).sqrt();
        if len > 1e-12 {
            return [sum[0] / len, sum[1] / len, sum[2] / len];
        }
        // Degenerate stored normals: fall through to the flat normal.
    }

    let v0 = mesh.positions[tri[0] as usize];
    let v1 = mesh.positions[tri[1] as usize];
    let v2 = mesh.positions[tri[2] as usize];

    let (ax, ay, az) = (v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]);
    let (bx, by, bz) = (v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]);
    let nx = ay * bz - az * by;
    let ny = az * bx - ax * bz;
    let nz = ax * by - ay * bx;
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-12 {
        [nx / len, ny / len, nz / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}
