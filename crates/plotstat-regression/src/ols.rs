//! Ordinary least squares line fitting

use plotstat_core::Point;
use serde::{Deserialize, Serialize};

/// A fitted least-squares line plus the statistics needed to place a
/// pointwise prediction band at arbitrary x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OlsFit {
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Slope of the fitted line
    pub slope: f64,
    /// Residual standard error, `sqrt(SSE / max(1, n - 2))`; NaN for
    /// degenerate fits
    pub residual_std_error: f64,
    /// Mean of the x values
    pub mean_x: f64,
    /// Centered sum of squares `sum((x - mean_x)^2)`
    pub sum_squares_x: f64,
}

impl OlsFit {
    /// Fitted value at `x`
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// The zero fit returned for undersized samples
    pub(crate) fn degenerate() -> Self {
        Self {
            intercept: 0.0,
            slope: 0.0,
            residual_std_error: f64::NAN,
            mean_x: 0.0,
            sum_squares_x: 0.0,
        }
    }
}

/// Fit a least-squares line through a bivariate sample
///
/// Single-pass raw-moment formulation for the slope and intercept
/// (same precision trade-off as [`crate::pearson_r`], kept for output
/// parity with the original pipeline). A second, centered pass
/// computes `sum_squares_x`, which feeds the prediction-interval
/// formula and is sensitive to cancellation at the tails.
///
/// Degradation: fewer than two points yields the zero fit with NaN
/// standard error; identical x values force the slope to 0 instead of
/// dividing by zero.
///
/// # Examples
///
/// ```rust
/// use plotstat_core::Point;
/// use plotstat_regression::ols;
///
/// let points = vec![
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 3.0),
///     Point::new(2.0, 5.0),
/// ];
/// let fit = ols(&points);
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// assert_eq!(fit.residual_std_error, 0.0);
/// ```
pub fn ols(points: &[Point]) -> OlsFit {
    let n = points.len();
    if n < 2 {
        return OlsFit::degenerate();
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
        sum_xy += p.x * p.y;
        sum_xx += p.x * p.x;
    }

    let denom = n_f * sum_xx - sum_x * sum_x;
    let slope = if denom == 0.0 {
        // All x identical: a vertical cloud gets a flat line
        0.0
    } else {
        (n_f * sum_xy - sum_x * sum_y) / denom
    };
    let intercept = (sum_y - slope * sum_x) / n_f;
    let mean_x = sum_x / n_f;

    let mut sum_squares_x = 0.0;
    let mut sse = 0.0;
    for p in points {
        let dx = p.x - mean_x;
        sum_squares_x += dx * dx;
        let residual = p.y - (intercept + slope * p.x);
        sse += residual * residual;
    }
    let dof = (n.saturating_sub(2)).max(1) as f64;
    let residual_std_error = (sse / dof).sqrt();

    OlsFit {
        intercept,
        slope,
        residual_std_error,
        mean_x,
        sum_squares_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn points_from(pairs: &[(f64, f64)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_exact_line() {
        let fit = ols(&points_from(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]));
        assert_relative_eq!(fit.slope, 2.0);
        assert_relative_eq!(fit.intercept, 1.0);
        assert_abs_diff_eq!(fit.residual_std_error, 0.0);
        assert_relative_eq!(fit.mean_x, 1.0);
        assert_relative_eq!(fit.sum_squares_x, 2.0);
        assert_relative_eq!(fit.predict(10.0), 21.0);
    }

    #[test]
    fn test_noisy_line() {
        let fit = ols(&points_from(&[(0.0, 0.0), (1.0, 1.2), (2.0, 1.9), (3.0, 3.1)]));
        assert_abs_diff_eq!(fit.slope, 1.0, epsilon = 0.05);
        assert_abs_diff_eq!(fit.intercept, 0.0, epsilon = 0.1);
        assert!(fit.residual_std_error > 0.0);
    }

    #[test]
    fn test_undersized_sample() {
        let fit = ols(&[]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 0.0);
        assert!(fit.residual_std_error.is_nan());
        assert_eq!(fit.sum_squares_x, 0.0);

        let fit = ols(&[Point::new(3.0, 4.0)]);
        assert_eq!(fit.slope, 0.0);
        assert!(fit.residual_std_error.is_nan());
    }

    #[test]
    fn test_constant_x_forces_flat_slope() {
        let fit = ols(&points_from(&[(2.0, 1.0), (2.0, 3.0), (2.0, 5.0)]));
        assert_eq!(fit.slope, 0.0);
        // Flat line through the mean of y
        assert_relative_eq!(fit.intercept, 3.0);
        assert_eq!(fit.sum_squares_x, 0.0);
    }

    #[test]
    fn test_two_points_dof_clamp() {
        // n = 2 would divide SSE by zero without the max(1, n - 2) clamp
        let fit = ols(&points_from(&[(0.0, 0.0), (1.0, 2.0)]));
        assert_relative_eq!(fit.slope, 2.0);
        assert_abs_diff_eq!(fit.residual_std_error, 0.0);
    }
}
