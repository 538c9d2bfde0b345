//! Utility functions for working with data slices

/// Sort data and return a new vector
///
/// The caller's slice is never reordered; every consumer that needs
/// ordered data works on this defensive copy. NaN values are placed at
/// the end.
///
/// # Examples
///
/// ```rust
/// use plotstat_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater, // NaN goes after non-NaN
            (false, true) => std::cmp::Ordering::Less,    // non-NaN goes before NaN
            (false, false) => a.partial_cmp(b).unwrap(),  // Safe for non-NaN values
        }
    });
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use plotstat_core::utils::mean;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(mean(&data), 3.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Calculate the population variance (mean of squared deviations)
///
/// Not Bessel-corrected: divides by `n`, not `n - 1`. Returns 0.0 for
/// empty slices.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64
}

/// Calculate the population standard deviation
///
/// # Examples
///
/// ```rust
/// use plotstat_core::utils::population_std_dev;
///
/// let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(population_std_dev(&data), 2.0);
/// ```
pub fn population_std_dev(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_copies() {
        let data = vec![3.0, 1.0, 2.0];
        let s = sorted(&data);
        assert_eq!(s, vec![1.0, 2.0, 3.0]);
        // Caller's storage untouched
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sorted_nan_at_end() {
        let data = vec![2.0, f64::NAN, 1.0];
        let s = sorted(&data);
        assert_eq!(s[0], 1.0);
        assert_eq!(s[1], 2.0);
        assert!(s[2].is_nan());
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_variance() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(population_variance(&data), 2.0);
        assert_relative_eq!(population_std_dev(&data), 2.0f64.sqrt());
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_variance(&[7.0]), 0.0);
    }
}
