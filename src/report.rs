//! Collected results of one sample run.
//!
//! The editor ships two sample scripts; each gets its own block so its
//! output reads exactly as that script prints it.

use crate::config::SampleConfig;
use crate::errors::Result;
use crate::samples::{doubled, fibonacci, greet, squares, Palette};
use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use tracing::{debug, info_span};

pub const PYTHON_TITLE: &str = "WebOS Code Editor - Python Example";
pub const JAVASCRIPT_BANNER: &str = "Hello from WebOS Code Editor!";

/// Input list for the doubling sample.
pub const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Output of the Python sample: sequence, squares and palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PythonSample {
    pub title: String,
    #[serde(serialize_with = "serialize_terms")]
    pub fibonacci: Vec<BigUint>,
    pub squares: Vec<u64>,
    pub colors: Palette,
}

/// Output of the JavaScript sample: banner, greeting and doubled list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JavaScriptSample {
    pub banner: String,
    pub greeting: String,
    pub doubled: Vec<i128>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub python: PythonSample,
    pub javascript: JavaScriptSample,
}

// Terms outgrow every JSON number type, so they are written as decimal strings
fn serialize_terms<S: Serializer>(
    terms: &[BigUint],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(terms.iter().map(ToString::to_string))
}

impl DemoReport {
    /// Run every sample with the given parameters.
    ///
    /// Fails if the configuration is rejected; nothing is printed in that
    /// case.
    pub fn build(config: &SampleConfig) -> Result<Self> {
        let _span = info_span!("build_report").entered();
        config.validate()?;

        let python = PythonSample {
            title: PYTHON_TITLE.to_string(),
            fibonacci: fibonacci(config.fibonacci_terms)?,
            squares: squares(config.squares_upto),
            colors: Palette::amiga()?,
        };
        let javascript = JavaScriptSample {
            banner: JAVASCRIPT_BANNER.to_string(),
            greeting: greet(&config.greet_name),
            doubled: doubled(&NUMBERS),
        };

        debug!(
            fibonacci = python.fibonacci.len(),
            squares = python.squares.len(),
            colors = python.colors.len(),
            "report built"
        );
        Ok(Self { python, javascript })
    }
}
