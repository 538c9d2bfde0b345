//! Quantiles and quartile summaries for box plots
//!
//! This crate provides the order-statistics layer of plotstat:
//!
//! - [`quantile`]: linear-interpolation (R-7) quantile of pre-sorted
//!   data
//! - [`quartiles`]: five-number [`QuartileSummary`] with Tukey-fence
//!   outlier classification, the numeric backbone of box and violin
//!   plots
//!
//! Degradation policy: empty input yields the `0.0` sentinel from
//! [`quantile`] and the all-zero summary from [`quartiles`]; nothing
//! here returns an error. Callers that must distinguish "no data" from
//! a zero statistic check sample size before calling.
//!
//! # Examples
//!
//! ```rust
//! use plotstat_quantile::{quantile, quartiles};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//! let summary = quartiles(&sample);
//!
//! // 100 is outside the upper Tukey fence, so the whisker stops at 9
//! assert_eq!(summary.outliers, vec![100.0]);
//! assert_eq!(summary.max, 9.0);
//!
//! // The quantile function itself wants sorted data
//! let sorted = plotstat_core::utils::sorted(&sample);
//! assert_eq!(quantile(&sorted, 0.5), summary.median);
//! ```

pub mod interpolate;
pub mod summary;

pub use interpolate::quantile;
pub use summary::{quartiles, QuartileSummary};
