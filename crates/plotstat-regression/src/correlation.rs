//! Pearson product-moment correlation

use plotstat_core::{Error, Point, Result};

/// Pearson correlation coefficient of a bivariate sample
///
/// Classic single-pass sum-of-products formulation. This trades some
/// numerical stability for simplicity; at the sample magnitudes charts
/// plot it is accurate, but extreme value ranges can lose precision to
/// cancellation. The arithmetic path is kept as-is deliberately so
/// plotted values match the original pipeline.
///
/// Errors:
/// - [`Error::InsufficientData`] for fewer than two points
/// - [`Error::Computation`] when all x or all y values are identical
///   (zero variance leaves the coefficient undefined)
///
/// # Examples
///
/// ```rust
/// use plotstat_core::Point;
/// use plotstat_regression::pearson_r;
///
/// let points: Vec<Point> = (1..=4).map(|i| Point::new(i as f64, i as f64)).collect();
/// assert_eq!(pearson_r(&points).unwrap(), 1.0);
/// ```
pub fn pearson_r(points: &[Point]) -> Result<f64> {
    let n = points.len();
    if n < 2 {
        return Err(Error::insufficient(2, n));
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
        sum_xy += p.x * p.y;
        sum_xx += p.x * p.x;
        sum_yy += p.y * p.y;
    }

    let cov = sum_xy - sum_x * sum_y / n_f;
    let var_x = sum_xx - sum_x * sum_x / n_f;
    let var_y = sum_yy - sum_y * sum_y / n_f;

    if var_x <= 0.0 || var_y <= 0.0 {
        return Err(Error::degenerate("Pearson correlation"));
    }

    Ok(cov / (var_x * var_y).sqrt())
}
