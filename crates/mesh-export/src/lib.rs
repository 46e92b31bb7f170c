pub mod errors;
pub mod options;
pub mod stl;

pub use errors::ExportError;
pub use options::{ExportOptions, Material};
pub use stl::{export_mesh, export_mesh_with, stl_ascii, stl_bytes};
