//! Core traits for histogram building

use crate::types::Histogram;

/// Trait for building histograms from sample data
///
/// Builders are infallible: an empty sample produces an empty
/// histogram, and degenerate ranges collapse to a single bin, so chart
/// code always has something to draw.
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[f64]) -> Histogram;

    /// Get the target number of bins, if fixed ahead of time
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
