pub mod buffers;
pub mod primitives;
pub mod solid;
pub mod tessellation;
pub mod types;

pub use buffers::{mesh_indices, mesh_vertices};
pub use primitives::{cube, cylinder, sphere};
pub use solid::Solid;
pub use tessellation::{mesh_from_solid, mesh_from_solid_with_tolerance, DEFAULT_TOLERANCE};
pub use types::TriangleMesh;
