//! Shared error type for the sample library.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, SampleError>;

/// Main error type for sample operations
#[derive(Debug, Error)]
pub enum SampleError {
    /// An argument was outside the accepted domain (e.g. a negative term count)
    #[error("Invalid argument `{name}`: {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// A palette value was not a `#rrggbb` string
    #[error("Invalid hex color: {0:?}")]
    InvalidColor(String),

    /// A palette name appeared more than once
    #[error("Duplicate color name: {0:?}")]
    DuplicateColor(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SampleError {
    /// Create a configuration error with path context
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the caller can fix this error by changing their input
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::InvalidColor(_)
                | Self::DuplicateColor(_)
                | Self::Config { .. }
        )
    }

    /// Process exit code: 2 for bad input, 1 for everything else
    pub fn exit_code(&self) -> u8 {
        if self.is_user_fixable() {
            2
        } else {
            1
        }
    }
}
