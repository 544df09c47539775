use std::path::PathBuf;
use thiserror::Error;

use crate::implementations::config::ConfigError;

/// Custom error types for the fraud detection agent
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not open video: {0}")]
    VideoOpen(String),

    #[error("Video has no frames: {0}")]
    NoFrames(String),

    #[error("Frame extraction error: {0}")]
    FrameExtraction(String),

    #[error("Error from provider {provider}: {message}")]
    Provider { provider: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type specific to detection operations
pub type DetectorResult<T> = Result<T, DetectorError>;

impl DetectorError {
    /// Errors caused by the media file itself rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DetectorError::FileNotFound(_) |
                DetectorError::VideoOpen(_) |
                DetectorError::NoFrames(_) |
                DetectorError::InvalidInput(_)
        )
    }
}
