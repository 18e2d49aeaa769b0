/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty
/// input, since the divisor is guarded with `max(1, len)`.
pub fn mean(values: &[f64]) -> f64 {
    guarded_mean(values.iter().sum(), values.len())
}

/// Divides `sum` by `count`, treating a zero count as one.
pub fn guarded_mean(sum: f64, count: usize) -> f64 {
    sum / count.max(1) as f64
}
