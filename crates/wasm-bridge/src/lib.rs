//! Boundary surface exposing the solid-kernel facade to JavaScript.
//!
//! The `#[wasm_bindgen]` entry points live in `wasm_api` and are only
//! compiled for the wasm32 target; everything here is plain Rust and
//! testable natively.

use serde::{Deserialize, Serialize};

use solid_kernel::{mesh_indices, TriangleMesh};

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

/// Serializable mesh data for sending to JavaScript.
///
/// Split flat arrays, three.js-style. The typed-array path in `wasm_api`
/// uses the interleaved buffer instead; this is the JSON fallback.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl From<&TriangleMesh> for MeshData {
    fn from(mesh: &TriangleMesh) -> Self {
        Self {
            positions: mesh.positions.iter().flatten().copied().collect(),
            normals: mesh.normals.iter().flatten().copied().collect(),
            indices: mesh_indices(mesh),
        }
    }
}

/// Serialize mesh data to JSON for the bridge.
pub fn mesh_to_json(mesh: &MeshData) -> String {
    serde_json::to_string(mesh).unwrap_or_default()
}
