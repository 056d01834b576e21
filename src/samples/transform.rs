//! Small list and string transforms used by the sample program.

/// Squares of `1..=upto`, in order.
pub fn squares(upto: u32) -> Vec<u64> {
    (1..=u64::from(upto)).map(|x| x * x).collect()
}

/// Each value multiplied by two, in order.
///
/// Widened to `i128` so every `i64` input doubles exactly.
pub fn doubled(values: &[i64]) -> Vec<i128> {
    values.iter().map(|&n| i128::from(n) * 2).collect()
}

pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
