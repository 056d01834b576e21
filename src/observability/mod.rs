//! Logging setup for the sample binary.
//!
//! ## Usage
//!
//! ```ignore
//! use workbench_sample::observability::init_logging;
//!
//! fn main() {
//!     init_logging(verbosity);
//!     // ... rest of application
//! }
//! ```

pub mod logging;

pub use logging::{init_logging, level_for_verbosity};
