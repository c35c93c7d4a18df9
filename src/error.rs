use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid threshold value: {0}. Must be a finite percentage >= 0")]
    InvalidThreshold(f64),
}

/// Failures while installing a compressed rendition over its source file.
#[derive(Debug, Error)]
pub enum ReplacementError {
    #[error("Failed to install compressed file at {target}: {source}")]
    Install {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove original {path}: {source}")]
    RemoveOriginal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything that can go wrong for a single file on its way through
/// compress-then-install.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Compression(#[from] CompressionError),

    #[error(transparent)]
    Replacement(#[from] ReplacementError),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
