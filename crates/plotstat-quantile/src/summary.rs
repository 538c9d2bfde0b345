//! Five-number summaries with Tukey-fence outlier classification

use crate::interpolate::quantile;
use plotstat_core::utils::sorted;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the IQR when placing the Tukey fences.
const TUKEY_K: f64 = 1.5;

/// Five-number summary of a sample, with outliers fenced off
///
/// `min` and `max` are the smallest and largest *non-outlier* values,
/// not the raw sample extrema; box-plot whiskers are drawn from them
/// while `outliers` are plotted as individual markers.
///
/// Invariant for non-empty samples:
/// `min <= q1 <= median <= q3 <= max` and `iqr == q3 - q1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuartileSummary {
    /// Smallest value inside the fences
    pub min: f64,
    /// First quartile (p = 0.25)
    pub q1: f64,
    /// Median (p = 0.5)
    pub median: f64,
    /// Third quartile (p = 0.75)
    pub q3: f64,
    /// Largest value inside the fences
    pub max: f64,
    /// Values strictly outside the Tukey fences, in ascending order
    pub outliers: Vec<f64>,
    /// Interquartile range, `q3 - q1`
    pub iqr: f64,
}

impl QuartileSummary {
    /// The degenerate summary for samples with fewer than two values
    fn degenerate() -> Self {
        Self {
            min: 0.0,
            q1: 0.0,
            median: 0.0,
            q3: 0.0,
            max: 0.0,
            outliers: Vec::new(),
            iqr: 0.0,
        }
    }
}

/// Compute the quartile summary of a sample
///
/// Sorts a defensive copy (the caller's slice is never reordered),
/// takes Q1/median/Q3 by linear interpolation, and classifies every
/// value strictly outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` as an
/// outlier. Should every value be fenced out, `min`/`max` fall back to
/// the raw sorted extrema so they are always defined for a non-empty
/// sample.
///
/// Samples with zero or one values degrade to the all-zero summary
/// with no outliers.
///
/// # Examples
///
/// ```rust
/// use plotstat_quantile::quartiles;
///
/// let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
/// let summary = quartiles(&sample);
/// assert_eq!(summary.outliers, vec![100.0]);
/// assert_eq!(summary.max, 9.0); // whisker stops at the fence
/// ```
pub fn quartiles(sample: &[f64]) -> QuartileSummary {
    if sample.len() < 2 {
        return QuartileSummary::degenerate();
    }

    let ordered = sorted(sample);
    let q1 = quantile(&ordered, 0.25);
    let median = quantile(&ordered, 0.5);
    let q3 = quantile(&ordered, 0.75);
    let iqr = q3 - q1;

    let lower_fence = q1 - TUKEY_K * iqr;
    let upper_fence = q3 + TUKEY_K * iqr;

    let (kept, outliers): (Vec<f64>, Vec<f64>) = ordered
        .iter()
        .copied()
        .partition(|&v| v >= lower_fence && v <= upper_fence);

    // If everything was fenced out, fall back to the raw extrema.
    let (min, max) = match (kept.first(), kept.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => (ordered[0], ordered[ordered.len() - 1]),
    };

    QuartileSummary {
        min,
        q1,
        median,
        q3,
        max,
        outliers,
        iqr,
    }
}
