use std::path::PathBuf;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A file that was asked for does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The named image format is not one the codec knows.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The image codec failed to decode or encode.
    #[cfg(feature = "image")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
