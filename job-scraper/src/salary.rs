/// Uplift applied when a vacancy only states the lower bound.
const LOWER_BOUND_FACTOR: f64 = 1.2;
/// Discount applied when a vacancy only states the upper bound.
const UPPER_BOUND_FACTOR: f64 = 0.8;

/// Estimate a single salary figure from an optional range.
///
/// Providers use `0` for an unset bound, so zero counts as absent.
pub fn predict_salary(from: Option<u32>, to: Option<u32>) -> Option<f64> {
    let from = from.filter(|v| *v > 0).map(f64::from);
    let to = to.filter(|v| *v > 0).map(f64::from);
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * LOWER_BOUND_FACTOR),
        (None, Some(to)) => Some(to * UPPER_BOUND_FACTOR),
        (None, None) => None,
    }
}
