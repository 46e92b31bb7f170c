//! File-level export tests against real tessellated solids.

use mesh_export::{export_mesh, stl_ascii, ExportOptions};
use solid_kernel::{cube, mesh_from_solid, sphere};

fn temp_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("mesh-export-{}-{}", std::process::id(), name));
    path
}

#[test]
fn test_export_cube_to_file() {
    let mesh = mesh_from_solid(&cube(1.0, 1.0, 1.0));
    let path = temp_path("cube.stl");

    export_mesh(&path, &mesh).expect("export should succeed");

    let bytes = std::fs::read(&path).expect("exported file should exist");
    assert_eq!(bytes.len(), 84 + mesh.triangle_count() * 50);

    let tri_count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
    assert_eq!(tri_count as usize, mesh.triangle_count());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_export_to_bad_path_reports_io_error() {
    let mesh = mesh_from_solid(&cube(1.0, 1.0, 1.0));
    let result = export_mesh("/nonexistent-dir/cube.stl", &mesh);
    assert!(matches!(result, Err(mesh_export::ExportError::Io(_))));
}

#[test]
fn test_sphere_ascii_roundtrip_structure() {
    let mesh = mesh_from_solid(&sphere(1.0));
    let options = ExportOptions {
        name: "sphere".to_string(),
        ..ExportOptions::default()
    };

    let stl = stl_ascii(&mesh, &options).expect("ascii export should succeed");
    assert!(stl.starts_with("solid sphere\n"));
    assert!(stl.ends_with("endsolid sphere\n"));
    assert_eq!(stl.matches("facet normal").count(), mesh.triangle_count());
}
