//! Error types for grass point cloud generation

use thiserror::Error;

/// Main error type for the crate.
///
/// A ray that misses the surface is not an error; the surface query reports
/// it as `None` and the sample is dropped.
#[derive(Debug, Error)]
pub enum Error {
    /// The surface collaborator could not answer a query at all.
    #[error("Geometry unavailable: {0}")]
    GeometryUnavailable(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
