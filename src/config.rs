//! Optional TOML configuration for the sample program.
//!
//! Every field has a default that reproduces the stock sample output, so an
//! empty file (or no file at all) behaves exactly like running without one.
//!
//! ```toml
//! fibonacci_terms = 12
//! squares_upto = 5
//! greet_name = "Workbench"
//! ```

use crate::errors::{Result, SampleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Largest accepted `squares_upto`; keeps a typo from allocating gigabytes.
pub const MAX_SQUARES_UPTO: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    /// Number of Fibonacci terms to print
    pub fibonacci_terms: i64,
    /// Upper bound (inclusive) of the squares list, at most [`MAX_SQUARES_UPTO`]
    pub squares_upto: u32,
    /// Name passed to the greeting
    pub greet_name: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            fibonacci_terms: 10,
            squares_upto: 10,
            greet_name: "Amiga".to_string(),
        }
    }
}

impl SampleConfig {
    /// Apply command-line overrides on top of file or default values
    pub fn with_terms(mut self, terms: Option<i64>) -> Self {
        if let Some(terms) = terms {
            self.fibonacci_terms = terms;
        }
        self
    }

    /// Check values the type system cannot express
    pub fn validate(&self) -> Result<()> {
        if self.squares_upto > MAX_SQUARES_UPTO {
            return Err(SampleError::InvalidArgument {
                name: "squares_upto",
                value: i64::from(self.squares_upto),
                reason: "must be at most 10000",
            });
        }
        Ok(())
    }
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<SampleConfig, String> {
    toml::from_str::<SampleConfig>(contents).map_err(|e| e.to_string())
}

/// Load configuration from `path`, or defaults when no path is given.
///
/// An explicitly named file that is missing or malformed is an error.
pub fn load_config(path: Option<&Path>) -> Result<SampleConfig> {
    let Some(path) = path else {
        return Ok(SampleConfig::default());
    };

    let contents = fs::read_to_string(path)
        .map_err(|e| SampleError::config(path, format!("failed to read file: {e}")))?;
    let config = parse_config(&contents).map_err(|message| SampleError::config(path, message))?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}
