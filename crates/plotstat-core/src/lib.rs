//! Shared foundation for the plotstat crates
//!
//! This crate provides the pieces every other plotstat crate leans on:
//!
//! - **Error handling**: a unified [`Error`] type and [`Result`] alias
//! - **Value types**: the bivariate [`Point`] observation
//! - **Slice utilities**: defensive sorting and moment helpers
//! - **Normal-distribution helpers**: the inverse error function and
//!   theoretical quantiles used to build Q-Q plots
//!
//! Everything here is a pure function of its inputs: no state, no I/O,
//! no locking. All functions are safe to call concurrently; outputs are
//! freshly allocated and callers' slices are never mutated.
//!
//! # Examples
//!
//! ```rust
//! use plotstat_core::utils::{sorted, mean};
//! use plotstat_core::math::distributions::normal;
//!
//! let data = vec![3.0, 1.0, 2.0];
//! assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0]);
//! assert_eq!(mean(&data), 2.0);
//!
//! // Theoretical abscissae for a 100-point normal Q-Q plot
//! let qs = normal::theoretical_quantiles(100);
//! assert_eq!(qs.len(), 100);
//! ```

pub mod error;
pub mod math;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use types::Point;
