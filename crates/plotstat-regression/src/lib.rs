//! Correlation and regression for scatter plots
//!
//! Everything a scatter component needs beyond the raw points:
//!
//! - [`pearson_r`]: Pearson correlation coefficient (errors where the
//!   statistic is undefined rather than returning NaN)
//! - [`ols`]: single-pass least-squares fit, returned as an [`OlsFit`]
//!   carrying the moments the band formula needs
//! - [`line_and_band`]: the fitted line sampled across an x-range with
//!   a pointwise ~95% confidence band
//!
//! The moment formulas are deliberately the simple non-centered ones;
//! see the function docs for the precision trade-off.
//!
//! # Examples
//!
//! ```rust
//! use plotstat_core::Point;
//! use plotstat_regression::{line_and_band, ols, pearson_r};
//!
//! let points: Vec<Point> = (0..20)
//!     .map(|i| {
//!         let x = i as f64;
//!         Point::new(x, 3.0 * x + 1.0 + if i % 2 == 0 { 0.5 } else { -0.5 })
//!     })
//!     .collect();
//!
//! let r = pearson_r(&points).unwrap();
//! assert!(r > 0.99);
//!
//! let fit = ols(&points);
//! assert!((fit.slope - 3.0).abs() < 0.1);
//!
//! let overlay = line_and_band(&points, 0.0, 19.0);
//! assert_eq!(overlay.line.len(), 121);
//! ```

pub mod band;
pub mod correlation;
pub mod ols;

pub use band::{line_and_band, line_and_band_with_steps, BandPoint, LineAndBand, DEFAULT_STEPS};
pub use correlation::pearson_r;
pub use ols::{ols, OlsFit};
