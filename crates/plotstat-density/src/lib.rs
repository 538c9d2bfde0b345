//! Kernel density estimation for violin and distribution plots
//!
//! A Gaussian KDE evaluated on an evenly spaced grid spanning the data
//! range plus 10% padding on each side. Bandwidth defaults to
//! Silverman's rule of thumb (`1.06 * sigma * n^(-1/5)`, population
//! sigma); both the bandwidth and the grid resolution can be
//! overridden through [`KdeBuilder`].
//!
//! Degradation policy: an empty sample, or a constant sample under the
//! default bandwidth, yields an empty curve rather than an error or a
//! NaN-filled one.
//!
//! # Examples
//!
//! ```rust
//! use plotstat_density::kernel_density;
//!
//! let sample = vec![1.0, 2.0, 2.5, 3.0, 3.2, 3.5, 4.0, 5.0];
//! let curve = kernel_density(&sample);
//!
//! assert_eq!(curve.len(), 50);
//! let peak = curve
//!     .iter()
//!     .max_by(|a, b| a.density.partial_cmp(&b.density).unwrap())
//!     .unwrap();
//! assert!(peak.x > 2.0 && peak.x < 4.0);
//! ```

pub mod kde;

pub use kde::{
    kernel_density, silverman_bandwidth, DensityPoint, KdeBuilder, DEFAULT_GRID_POINTS,
};
