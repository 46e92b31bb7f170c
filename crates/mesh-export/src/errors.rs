use thiserror::Error;

/// Errors from mesh export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
