//! # plotstat
//!
//! A statistical transform engine for chart rendering. Given raw
//! numeric samples, it derives the quantities charts actually draw:
//! quartile summaries for box plots, kernel density curves for
//! violins, equal-width bins for histograms, fitted lines with
//! confidence bands for scatter overlays, and theoretical normal
//! quantiles for Q-Q plots.
//!
//! Every function here is pure and synchronous: inputs are read-only
//! slices, outputs are freshly allocated, and nothing is cached or
//! shared, so calls are safe from any thread without locking. Callers
//! are expected to strip non-finite values before calling; NaN and
//! infinity propagate into outputs unchecked.
//!
//! The crate is a facade over the workspace members, re-exported
//! wholesale:
//!
//! - [`plotstat_quantile`]: quantiles and Tukey-fence summaries
//! - [`plotstat_histogram`]: equal-width binning
//! - [`plotstat_density`]: Gaussian KDE
//! - [`plotstat_regression`]: Pearson correlation, OLS, bands
//! - [`plotstat_core`]: shared types, utilities, and the normal
//!   quantile helpers
//!
//! # Examples
//!
//! ```rust
//! use plotstat::{kernel_density, line_and_band, quartiles, Point};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//!
//! // Box plot: 100 is fenced off as an outlier
//! let summary = quartiles(&sample);
//! assert_eq!(summary.outliers, vec![100.0]);
//!
//! // Violin plot: density curve over the padded data range
//! let curve = kernel_density(&sample);
//! assert_eq!(curve.len(), 50);
//!
//! // Scatter overlay: fitted line plus ~95% band
//! let points: Vec<Point> = sample
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &y)| Point::new(i as f64, y))
//!     .collect();
//! let overlay = line_and_band(&points, 0.0, 9.0);
//! assert_eq!(overlay.line.len(), overlay.band.len());
//! ```

pub use plotstat_core::math::distributions::normal;
pub use plotstat_core::math::distributions::normal::inverse_erf;
pub use plotstat_core::{utils, Error, Point, Result};
pub use plotstat_density::{
    kernel_density, silverman_bandwidth, DensityPoint, KdeBuilder, DEFAULT_GRID_POINTS,
};
pub use plotstat_histogram::{
    histogram, histogram_with_bins, sturges_bins, FixedWidthBuilder, Histogram, HistogramBin,
    HistogramBuilder, SturgesRule,
};
pub use plotstat_quantile::{quantile, quartiles, QuartileSummary};
pub use plotstat_regression::{
    line_and_band, line_and_band_with_steps, ols, pearson_r, BandPoint, LineAndBand, OlsFit,
    DEFAULT_STEPS,
};

/// Pair a sample with its theoretical normal quantiles for a Q-Q plot
///
/// Sorts a defensive copy of the sample (the caller's slice is never
/// reordered) and zips it with the standard-normal quantiles at the
/// plotting positions `p_i = (i + 0.5) / n`. The result plots sample
/// quantiles (y) against theoretical quantiles (x); normally
/// distributed data falls close to a straight line.
///
/// # Examples
///
/// ```rust
/// use plotstat::qq_points;
///
/// let sample = vec![3.0, 1.0, 2.0, 5.0, 4.0];
/// let points = qq_points(&sample);
/// assert_eq!(points.len(), 5);
/// // Median order statistic maps to the theoretical median, 0
/// assert!(points[2].x.abs() < 1e-12);
/// assert_eq!(points[2].y, 3.0);
/// ```
pub fn qq_points(sample: &[f64]) -> Vec<Point> {
    let ordered = utils::sorted(sample);
    normal::theoretical_quantiles(ordered.len())
        .into_iter()
        .zip(ordered)
        .map(|(theoretical, value)| Point::new(theoretical, value))
        .collect()
}
