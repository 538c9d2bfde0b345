//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub start: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub end: f64,
    /// Center point of the bin, where a bar is plotted
    pub mid: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Display label, `start-end` rounded to one decimal
    pub label: String,
}

impl HistogramBin {
    /// Create a new histogram bin covering `[start, end)`
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        Self {
            start,
            end,
            mid: (start + end) / 2.0,
            count,
            label: format!("{start:.1}-{end:.1}"),
        }
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Check if a value falls within this bin's half-open interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value < self.end
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.start, self.end, self.count)
    }
}

/// A histogram representation of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Consume the histogram, yielding its bins
    pub fn into_bins(self) -> Vec<HistogramBin> {
        self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the minimum value seen in the data
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value seen in the data
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the maximum count in any bin (the y-axis ceiling)
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get bin edges (including the rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        if self.bins.is_empty() {
            return vec![];
        }

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        for bin in &self.bins {
            edges.push(bin.start);
        }
        edges.push(self.bins[self.bins.len() - 1].end);
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin::new(0.0, 1.0, 5);
        assert_eq!(bin.mid, 0.5);
        assert_eq!(bin.width(), 1.0);
        assert!(bin.contains(0.5));
        assert!(!bin.contains(1.0)); // Right edge is exclusive
        assert_eq!(bin.label, "0.0-1.0");
    }

    #[test]
    fn test_histogram_accessors() {
        let bins = vec![
            HistogramBin::new(0.0, 1.0, 2),
            HistogramBin::new(1.0, 2.0, 5),
            HistogramBin::new(2.0, 3.0, 3),
        ];
        let hist = Histogram::new(bins, 10, 0.0, 3.0);

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.total_count(), 10);
        assert_eq!(hist.max_count(), 5);
        assert_eq!(hist.counts(), vec![2, 5, 3]);
        assert_eq!(hist.edges(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::new(vec![], 0, 0.0, 0.0);
        assert!(hist.is_empty());
        assert_eq!(hist.max_count(), 0);
        assert!(hist.edges().is_empty());
    }
}
