//! Linear-interpolation quantile function (type R-7)

/// Compute the `p`-quantile of pre-sorted data by linear interpolation
///
/// This is the R-7 method (the default in R and NumPy): for
/// `0 < p < 1`, the quantile interpolates between the two order
/// statistics bracketing the fractional index `(n - 1) * p`.
///
/// The input MUST already be sorted ascending; use
/// [`plotstat_core::utils::sorted`] for a defensive copy of unsorted
/// data. `p` is clamped conceptually: `p <= 0` returns the first
/// element and `p >= 1` the last.
///
/// An empty slice returns `0.0` as a degenerate sentinel rather than
/// an error, so callers that need to distinguish "no data" from
/// "value 0" must check emptiness themselves first.
///
/// # Examples
///
/// ```rust
/// use plotstat_quantile::quantile;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&sorted, 0.5), 2.5);
/// assert_eq!(quantile(&sorted, 0.0), 1.0);
/// assert_eq!(quantile(&sorted, 1.0), 4.0);
/// ```
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let last = sorted.len() - 1;
    if p <= 0.0 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[last];
    }

    let index = last as f64 * p;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    let weight = index - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_sentinel() {
        assert_eq!(quantile(&[], 0.5), 0.0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(quantile(&[42.0], 0.0), 42.0);
        assert_eq!(quantile(&[42.0], 0.5), 42.0);
        assert_eq!(quantile(&[42.0], 1.0), 42.0);
    }

    #[test]
    fn test_extremes_and_clamping() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&sorted, -0.5), 1.0);
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 3.0);
        assert_eq!(quantile(&sorted, 1.5), 3.0);
    }

    #[test]
    fn test_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // index = 3 * 0.25 = 0.75
        assert_relative_eq!(quantile(&sorted, 0.25), 1.75);
        assert_relative_eq!(quantile(&sorted, 0.5), 2.5);
        assert_relative_eq!(quantile(&sorted, 0.75), 3.25);
    }

    #[test]
    fn test_exact_order_statistic() {
        let sorted = [10.0, 20.0, 30.0, 40.0, 50.0];
        // index = 4 * 0.5 = 2 exactly, no interpolation
        assert_eq!(quantile(&sorted, 0.5), 30.0);
    }
}
