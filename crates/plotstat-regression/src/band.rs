//! Fitted-line sampling with a pointwise confidence band

use crate::ols::ols;
use plotstat_core::Point;
use serde::{Deserialize, Serialize};

/// Default number of steps the x-range is divided into
/// (`steps + 1` samples)
pub const DEFAULT_STEPS: usize = 120;

/// Fixed band multiplier approximating a 95% interval.
///
/// A proper Student-t critical value would depend on the degrees of
/// freedom; the original pipeline uses a flat 2 and downstream visuals
/// are calibrated against it.
const BAND_T: f64 = 2.0;

/// One sample of the fitted line with its confidence band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    /// Evaluation location
    pub x: f64,
    /// Fitted value at `x`
    pub y: f64,
    /// Lower band edge, `y - 2 * SE(x)`
    pub y_low: f64,
    /// Upper band edge, `y + 2 * SE(x)`
    pub y_high: f64,
}

/// A sampled regression line and its confidence band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAndBand {
    /// The plain fitted line, for rendering without the band
    pub line: Vec<Point>,
    /// Band rows; `y` always matches the line at the same `x`
    pub band: Vec<BandPoint>,
}

/// Sample the OLS fit of `points` across `[x_min, x_max]` with the
/// default 120-step resolution
pub fn line_and_band(points: &[Point], x_min: f64, x_max: f64) -> LineAndBand {
    line_and_band_with_steps(points, x_min, x_max, DEFAULT_STEPS)
}

/// Sample the OLS fit of `points` at `steps + 1` evenly spaced
/// x-values across `[x_min, x_max]`
///
/// The band half-width at `x` is
/// `2 * SE * sqrt(1/n + (x - mean_x)^2 / Sxx)`, a pointwise ~95%
/// confidence band for the fitted mean. Degenerate fits (no points,
/// zero x-spread, non-finite standard error) collapse the band onto
/// the line instead of propagating NaN into the plot.
///
/// # Examples
///
/// ```rust
/// use plotstat_core::Point;
/// use plotstat_regression::line_and_band_with_steps;
///
/// let points = vec![
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 3.0),
///     Point::new(2.0, 5.0),
/// ];
/// let fit = line_and_band_with_steps(&points, 0.0, 2.0, 4);
/// assert_eq!(fit.line.len(), 5);
/// assert_eq!(fit.line[0].y, 1.0);
/// assert_eq!(fit.line[4].y, 5.0);
/// ```
pub fn line_and_band_with_steps(
    points: &[Point],
    x_min: f64,
    x_max: f64,
    steps: usize,
) -> LineAndBand {
    let fit = ols(points);
    let n = points.len();
    let steps = steps.max(1);
    let step = (x_max - x_min) / steps as f64;

    let degenerate =
        n < 1 || fit.sum_squares_x <= 0.0 || !fit.residual_std_error.is_finite();

    let mut line = Vec::with_capacity(steps + 1);
    let mut band = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let x = x_min + i as f64 * step;
        let y = fit.predict(x);
        let half_width = if degenerate {
            0.0
        } else {
            let dx = x - fit.mean_x;
            BAND_T
                * fit.residual_std_error
                * (1.0 / n as f64 + dx * dx / fit.sum_squares_x).sqrt()
        };
        line.push(Point::new(x, y));
        band.push(BandPoint {
            x,
            y,
            y_low: y - half_width,
            y_high: y + half_width,
        });
    }

    LineAndBand { line, band }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn points_from(pairs: &[(f64, f64)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_sample_count_and_spacing() {
        let points = points_from(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.5)]);
        let result = line_and_band(&points, 0.0, 10.0);
        assert_eq!(result.line.len(), DEFAULT_STEPS + 1);
        assert_eq!(result.band.len(), DEFAULT_STEPS + 1);
        assert_relative_eq!(result.line[0].x, 0.0);
        assert_relative_eq!(result.line[DEFAULT_STEPS].x, 10.0);
    }

    #[test]
    fn test_band_wraps_line() {
        let points = points_from(&[(0.0, 0.1), (1.0, 1.3), (2.0, 1.8), (3.0, 3.2), (4.0, 3.9)]);
        let result = line_and_band_with_steps(&points, 0.0, 4.0, 20);
        for (line_point, band_point) in result.line.iter().zip(&result.band) {
            assert_eq!(line_point.x, band_point.x);
            assert_eq!(line_point.y, band_point.y);
            assert!(band_point.y_low <= band_point.y);
            assert!(band_point.y_high >= band_point.y);
        }
    }

    #[test]
    fn test_band_widens_at_the_tails() {
        let points = points_from(&[(0.0, 0.1), (1.0, 1.3), (2.0, 1.8), (3.0, 3.2), (4.0, 3.9)]);
        let result = line_and_band_with_steps(&points, 0.0, 4.0, 4);
        let width =
            |b: &BandPoint| b.y_high - b.y_low;
        // mean_x = 2.0: the band is narrowest at the center
        assert!(width(&result.band[0]) > width(&result.band[2]));
        assert!(width(&result.band[4]) > width(&result.band[2]));
    }

    #[test]
    fn test_perfect_fit_has_zero_width_band() {
        let points = points_from(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
        let result = line_and_band_with_steps(&points, 0.0, 2.0, 10);
        for b in &result.band {
            assert_abs_diff_eq!(b.y_high - b.y_low, 0.0);
        }
    }

    #[test]
    fn test_degenerate_fit_collapses_band() {
        // No points: flat zero line, band equal to it
        let result = line_and_band_with_steps(&[], 0.0, 1.0, 4);
        for b in &result.band {
            assert_eq!(b.y, 0.0);
            assert_eq!(b.y_low, 0.0);
            assert_eq!(b.y_high, 0.0);
        }

        // Constant x: zero Sxx, band collapses onto the flat line
        let points = points_from(&[(2.0, 1.0), (2.0, 3.0), (2.0, 5.0)]);
        let result = line_and_band_with_steps(&points, 0.0, 4.0, 4);
        for b in &result.band {
            assert_eq!(b.y_low, b.y);
            assert_eq!(b.y_high, b.y);
            assert!(b.y.is_finite());
        }
    }
}
