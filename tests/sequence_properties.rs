//! Property-based tests for the sample computations
//!
//! These tests verify invariants that should hold for all inputs:
//! - The sequence has exactly the requested length, with no upper cap
//! - Every term past the seeds is the sum of the two before it
//! - Shorter sequences are prefixes of longer ones
//! - Negative counts are always rejected
//! - Doubling never overflows

use proptest::prelude::*;
use workbench_sample::{doubled, fibonacci, squares, FibonacciTerms, SampleError};

proptest! {
    #[test]
    fn prop_length_matches_request(n in 0i64..1000) {
        prop_assert_eq!(fibonacci(n).unwrap().len(), n as usize);
    }

    #[test]
    fn prop_recurrence_holds(n in 2i64..1000) {
        let seq = fibonacci(n).unwrap();
        prop_assert_eq!(seq[0].to_string(), "0");
        prop_assert_eq!(seq[1].to_string(), "1");
        for i in 2..seq.len() {
            prop_assert_eq!(&seq[i], &(&seq[i - 1] + &seq[i - 2]));
        }
    }

    #[test]
    fn prop_shorter_is_prefix_of_longer(a in 0i64..1000, b in 0i64..1000) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let short_seq = fibonacci(short).unwrap();
        let long_seq = fibonacci(long).unwrap();
        prop_assert_eq!(&long_seq[..short_seq.len()], &short_seq[..]);
    }

    #[test]
    fn prop_matches_lazy_iterator(n in 0i64..1000) {
        let eager = fibonacci(n).unwrap();
        let lazy: Vec<_> = FibonacciTerms::new().take(n as usize).collect();
        prop_assert_eq!(eager, lazy);
    }

    #[test]
    fn prop_negative_count_rejected(n in i64::MIN..0) {
        let rejected = matches!(
            fibonacci(n),
            Err(SampleError::InvalidArgument { value, .. }) if value == n
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_squares_are_ordered_squares(upto in 0u32..500) {
        let values = squares(upto);
        prop_assert_eq!(values.len(), upto as usize);
        for (i, v) in values.iter().enumerate() {
            let x = i as u64 + 1;
            prop_assert_eq!(*v, x * x);
        }
    }

    #[test]
    fn prop_doubled_is_exact(values in proptest::collection::vec(any::<i64>(), 0..32)) {
        let result = doubled(&values);
        prop_assert_eq!(result.len(), values.len());
        for (v, d) in values.iter().zip(&result) {
            prop_assert_eq!(*d, i128::from(*v) * 2);
        }
    }
}
