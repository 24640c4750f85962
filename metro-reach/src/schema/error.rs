//! Scheme loading error types.

/// Errors that can occur when loading a metro scheme.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Reading the scheme failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse scheme JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
