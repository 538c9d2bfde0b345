//! Mathematical utilities shared across the plotstat crates
//!
//! Currently this holds the normal-distribution helpers that back Q-Q
//! plot construction.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        use std::f64::consts::{PI, SQRT_2};

        /// Winitzki shape constant for the inverse error function.
        ///
        /// Downstream Q-Q reference lines are calibrated against this
        /// exact approximation; do not swap in a different algorithm.
        const WINITZKI_A: f64 = 0.147;

        /// Inverse error function, Winitzki rational approximation
        ///
        /// Valid for `x` in `(-1, 1)`. Bounded-error approximation:
        /// accurate to roughly 2e-3 in the central region, which is
        /// sufficient for placing theoretical quantiles on a plot.
        ///
        /// At `x = ±1` the log term diverges and the result is
        /// infinite; outside `[-1, 1]` it is NaN. Inputs propagate
        /// unchecked, matching the rest of the workspace.
        pub fn inverse_erf(x: f64) -> f64 {
            let ln_term = (1.0 - x * x).ln();
            let b = 2.0 / (PI * WINITZKI_A) + ln_term / 2.0;
            x.signum() * ((b * b - ln_term / WINITZKI_A).sqrt() - b).sqrt()
        }

        /// Standard-normal quantile via the inverse error function
        ///
        /// `quantile(p) = sqrt(2) * inverse_erf(2p - 1)` for `p` in
        /// `(0, 1)`.
        #[inline]
        pub fn quantile(p: f64) -> f64 {
            SQRT_2 * inverse_erf(2.0 * p - 1.0)
        }

        /// Theoretical normal quantiles for the order statistics of a
        /// sample of size `n`
        ///
        /// Uses the plotting positions `p_i = (i + 0.5) / n`, the
        /// abscissae of a normal Q-Q plot. Returns an empty vector for
        /// `n = 0`.
        pub fn theoretical_quantiles(n: usize) -> Vec<f64> {
            let n_f = n as f64;
            (0..n)
                .map(|i| quantile((i as f64 + 0.5) / n_f))
                .collect()
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use approx::{assert_abs_diff_eq, assert_relative_eq};
            use statrs::distribution::{ContinuousCDF, Normal};

            #[test]
            fn test_inverse_erf_zero() {
                assert_eq!(inverse_erf(0.0), 0.0);
            }

            #[test]
            fn test_inverse_erf_odd() {
                for &x in &[0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
                    assert_relative_eq!(inverse_erf(-x), -inverse_erf(x), max_relative = 1e-12);
                }
            }

            #[test]
            fn test_inverse_erf_monotone() {
                let xs: Vec<f64> = (-9..=9).map(|i| i as f64 / 10.0).collect();
                for w in xs.windows(2) {
                    assert!(inverse_erf(w[0]) < inverse_erf(w[1]));
                }
            }

            #[test]
            fn test_quantile_against_statrs() {
                // The Winitzki approximation is good to a couple of
                // thousandths in the region a Q-Q plot uses.
                let normal = Normal::new(0.0, 1.0).unwrap();
                for i in 2..=98 {
                    let p = i as f64 / 100.0;
                    assert_abs_diff_eq!(quantile(p), normal.inverse_cdf(p), epsilon = 5e-3);
                }
            }

            #[test]
            fn test_theoretical_quantiles() {
                assert!(theoretical_quantiles(0).is_empty());

                let q = theoretical_quantiles(5);
                assert_eq!(q.len(), 5);
                // Median order statistic sits at p = 0.5
                assert_abs_diff_eq!(q[2], 0.0, epsilon = 1e-12);
                // Symmetric plotting positions give symmetric quantiles
                assert_relative_eq!(q[0], -q[4], max_relative = 1e-12);
                assert_relative_eq!(q[1], -q[3], max_relative = 1e-12);
                assert!(q.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
