//! Equal-width histogram binning for chart rendering
//!
//! This crate turns a raw sample into the bin geometry a histogram
//! component plots: contiguous equal-width bins over `[min, max]`,
//! half-open except the final bin, each carrying its count, midpoint,
//! and a display label.
//!
//! The default bin count follows Sturges' rule, `ceil(log2(n) + 1)`.
//! No outlier handling happens here; the raw sample range is used, so
//! a histogram and a box plot of the same data can disagree about
//! extremes by design.
//!
//! # Examples
//!
//! ## Default binning (Sturges' rule)
//!
//! ```rust
//! use plotstat_histogram::histogram;
//!
//! let data = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 9.0];
//! let hist = histogram(&data);
//!
//! assert_eq!(hist.counts().iter().sum::<usize>(), data.len());
//! for bin in hist.bins() {
//!     println!("{}: {}", bin.label, bin.count);
//! }
//! ```
//!
//! ## Explicit bin count
//!
//! ```rust
//! use plotstat_histogram::{histogram_with_bins, FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let hist = histogram_with_bins(&data, 3);
//! assert_eq!(hist.len(), 3);
//!
//! // Builders compose the same way
//! let same = FixedWidthBuilder::new(3).build(&data);
//! assert_eq!(hist, same);
//! ```

pub mod builders;
pub mod traits;
pub mod types;

pub use builders::{sturges_bins, FixedWidthBuilder, SturgesRule};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

// Convenience functions

/// Create a histogram with the default Sturges bin count
pub fn histogram(sample: &[f64]) -> Histogram {
    SturgesRule.build(sample)
}

/// Create a histogram with a fixed number of equal-width bins
pub fn histogram_with_bins(sample: &[f64], num_bins: usize) -> Histogram {
    FixedWidthBuilder::new(num_bins).build(sample)
}
