//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};

/// Sturges' rule for the default bin count: `ceil(log2(n) + 1)`
///
/// Returns at least 1 bin, including for `n = 0`.
pub fn sturges_bins(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let bins = ((n as f64).log2() + 1.0).ceil();
    (bins as usize).max(1)
}

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins
/// covering the raw sample range `[min, max]`. All bins are half-open
/// `[start, end)` except the last, which is closed so the sample
/// maximum is counted.
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Histogram {
        if sample.is_empty() {
            return Histogram::new(vec![], 0, 0.0, 0.0);
        }

        let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = (max - min) / self.num_bins as f64;

        if !(width > 0.0) {
            // All values identical: one bin holds everything
            let bin = HistogramBin::new(min, max, sample.len());
            return Histogram::new(vec![bin], sample.len(), min, max);
        }

        let mut counts = vec![0usize; self.num_bins];
        for &value in sample {
            // The clamp keeps the sample maximum in the final bin
            // instead of one past the end.
            let index = (((value - min) / width).floor() as usize).min(self.num_bins - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let start = min + i as f64 * width;
                let end = if i == self.num_bins - 1 {
                    max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(start, end, count)
            })
            .collect();

        Histogram::new(bins, sample.len(), min, max)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Sturges' rule histogram builder
///
/// Picks `ceil(log2(n) + 1)` equal-width bins from the sample size and
/// delegates to [`FixedWidthBuilder`]. This is the default strategy
/// for interactive histograms.
pub struct SturgesRule;

impl HistogramBuilder for SturgesRule {
    fn build(&self, sample: &[f64]) -> Histogram {
        FixedWidthBuilder::new(sturges_bins(sample.len())).build(sample)
    }
}
