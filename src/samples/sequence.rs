//! Fibonacci sequence generation.
//!
//! The sequence is seeded with `0, 1` and every later term is the sum of the
//! two before it. Terms are arbitrary-precision, so any non-negative count is
//! honored.

use crate::errors::{Result, SampleError};
use num_bigint::BigUint;
use tracing::debug;

/// Endless iterator over the Fibonacci sequence.
#[derive(Debug, Clone)]
pub struct FibonacciTerms {
    current: BigUint,
    next: BigUint,
}

impl FibonacciTerms {
    pub fn new() -> Self {
        Self {
            current: BigUint::from(0u32),
            next: BigUint::from(1u32),
        }
    }
}

impl Default for FibonacciTerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciTerms {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let after = &self.current + &self.next;
        let next = std::mem::replace(&mut self.next, after);
        Some(std::mem::replace(&mut self.current, next))
    }
}

/// Generate the first `count` Fibonacci numbers.
///
/// Negative counts are rejected with [`SampleError::InvalidArgument`] before
/// anything is computed.
pub fn fibonacci(count: i64) -> Result<Vec<BigUint>> {
    let len = validate_term_count(count)?;
    let terms: Vec<BigUint> = FibonacciTerms::new().take(len).collect();
    debug!(requested = count, generated = terms.len(), "generated fibonacci sequence");
    Ok(terms)
}

// Pure function to turn a caller-supplied count into a usable length
fn validate_term_count(count: i64) -> Result<usize> {
    if count < 0 {
        return Err(SampleError::InvalidArgument {
            name: "count",
            value: count,
            reason: "must be non-negative",
        });
    }
    usize::try_from(count).map_err(|_| SampleError::InvalidArgument {
        name: "count",
        value: count,
        reason: "exceeds the addressable length on this platform",
    })
}
