//! Common utilities shared across indicator modules

/// One position of a derived series.
///
/// `None` marks a position inside the warm-up window ("not computable yet"),
/// which is distinct from a computed `Some(0.0)`.
pub type Point = Option<f64>;

/// Initialize a result vector with unavailable markers
#[inline]
pub fn unavailable_vec(len: usize) -> Vec<Point> {
    vec![None; len]
}

/// Check if we have enough data for the given period
#[inline]
pub fn has_enough_data(len: usize, period: usize) -> bool {
    len >= period && period > 0
}

/// Calculate the sum of a slice
#[inline]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Find the maximum value in a slice
#[inline]
pub fn max(values: &[f64]) -> f64 {
    values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

/// Find the minimum value in a slice
#[inline]
pub fn min(values: &[f64]) -> f64 {
    values.iter().cloned().fold(f64::INFINITY, f64::min)
}

/// Compute a rolling window operation.
///
/// Returns a vector of the same length with `None` for insufficient lookback.
/// Each window is handed to `f` whole, so results match the naive definition
/// exactly (no running-sum drift).
pub fn rolling<F>(values: &[f64], period: usize, f: F) -> Vec<Point>
where
    F: Fn(&[f64]) -> f64,
{
    let n = values.len();
    let mut result = unavailable_vec(n);
    if !has_enough_data(n, period) {
        return result;
    }

    for i in (period - 1)..n {
        let window = &values[(i + 1 - period)..=i];
        result[i] = Some(f(window));
    }
    result
}

/// Compute pairwise differences (like np.diff)
pub fn diff(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return vec![];
    }
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Separate gains and losses from price changes
pub fn gains_losses(changes: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let gains: Vec<f64> = changes.iter().map(|&c| if c > 0.0 { c } else { 0.0 }).collect();
    let losses: Vec<f64> = changes.iter().map(|&c| if c < 0.0 { -c } else { 0.0 }).collect();
    (gains, losses)
}

/// Lift a plain series into points, every position available
pub fn to_points(values: &[f64]) -> Vec<Point> {
    values.iter().map(|&v| Some(v)).collect()
}

/// Flatten points to `f64`, unavailable becoming NaN.
///
/// Only for boundaries that cannot carry `Option` (WASM, typed arrays).
pub fn to_nan_vec(points: &[Point]) -> Vec<f64> {
    points.iter().map(|p| p.unwrap_or(f64::NAN)).collect()
}

/// Combine two aligned series position by position, unavailable if either side is
pub fn zip_with<F>(a: &[Point], b: &[Point], f: F) -> Vec<Point>
where
    F: Fn(f64, f64) -> f64,
{
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_vec() {
        let v = unavailable_vec(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|x| x.is_none()));
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_max_min() {
        let v = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(max(&v), 5.0);
        assert_eq!(min(&v), 1.0);
    }

    #[test]
    fn test_diff() {
        let v = vec![1.0, 3.0, 6.0, 10.0];
        assert_eq!(diff(&v), vec![2.0, 3.0, 4.0]);
        assert!(diff(&[1.0]).is_empty());
    }

    #[test]
    fn test_gains_losses() {
        let changes = vec![1.0, -2.0, 3.0, -1.0, 0.0];
        let (gains, losses) = gains_losses(&changes);
        assert_eq!(gains, vec![1.0, 0.0, 3.0, 0.0, 0.0]);
        assert_eq!(losses, vec![0.0, 2.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rolling() {
        let v = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rolling(&v, 3, |w| sum(w) / 3.0);
        assert_eq!(result, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_rolling_zero_period() {
        let result = rolling(&[1.0, 2.0], 0, sum);
        assert_eq!(result, vec![None, None]);
    }

    #[test]
    fn test_zip_with_propagates_unavailable() {
        let a = vec![None, Some(2.0), Some(3.0)];
        let b = vec![Some(1.0), None, Some(1.0)];
        assert_eq!(zip_with(&a, &b, |x, y| x + y), vec![None, None, Some(4.0)]);
    }

    #[test]
    fn test_to_nan_vec() {
        let v = to_nan_vec(&[None, Some(1.5)]);
        assert!(v[0].is_nan());
        assert_eq!(v[1], 1.5);
    }
}
