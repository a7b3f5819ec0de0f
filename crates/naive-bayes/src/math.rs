/// Numerically stable `ln(Σ exp(x_i))`.
///
/// Returns negative infinity for an empty slice or when every term is
/// negative infinity.
pub fn log_sum_exp(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if max.is_infinite() {
        return max;
    }

    let sum: f64 = values.iter().map(|v| (v - max).exp()).sum();
    max + sum.ln()
}
