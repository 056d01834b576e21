//! The computations demonstrated by the sample programs.

pub mod palette;
pub mod sequence;
pub mod transform;

pub use palette::{ColorEntry, HexColor, Palette, AMIGA_COLORS};
pub use sequence::{fibonacci, FibonacciTerms};
pub use transform::{doubled, greet, squares};
