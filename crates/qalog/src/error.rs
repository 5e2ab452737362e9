use thiserror::Error;

/// Result type for log segmentation and report rendering.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The underlying line source failed while being consumed.
    #[error("failed to read log stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
