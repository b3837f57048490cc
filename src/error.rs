use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up or driving the annotator
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// The drawing surface (or its context) cannot be used
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    /// The background image could not be read or decoded
    #[error("Failed to load image {origin}: {error}")]
    ImageLoad {
        origin: String,
        #[source]
        error: image::ImageError,
    },
    /// Shape geometry is degenerate or not finite
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
    #[error("Failed to read config {}: {error}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type AnnotateResult<T> = Result<T, AnnotateError>;
