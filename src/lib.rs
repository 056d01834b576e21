// Export modules for library usage
pub mod cli;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod report;
pub mod samples;

// Re-export commonly used types
pub use crate::config::{load_config, SampleConfig};
pub use crate::errors::{Result, SampleError};
pub use crate::io::{create_writer, OutputFormat, ReportWriter};
pub use crate::report::{DemoReport, JavaScriptSample, PythonSample};
pub use crate::samples::{
    doubled, fibonacci, greet, squares, ColorEntry, FibonacciTerms, HexColor, Palette,
};
