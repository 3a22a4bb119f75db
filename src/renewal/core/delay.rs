//! Discretized delay kernels — gamma delays as finite probability mass
//! functions over daily lags.
//!
//! Purpose
//! -------
//! Convert continuous-time delay distributions (generation time, reporting
//! delay, incubation period) into discrete PMFs over a fixed maximum support,
//! so the renewal convolution and the reporting convolution can operate on
//! daily lag weights.
//!
//! Key behaviors
//! -------------
//! - Construct [`DelayKernel`] values from a gamma `(mean, sd)`
//!   parameterization by differencing the gamma CDF at integer lag
//!   boundaries and renormalizing by the truncated total mass.
//! - Reject non-positive or non-finite parameters via typed errors
//!   (`RenewalError`) instead of silently clamping.
//! - Guarantee a non-negative PMF summing to 1 within [`KERNEL_MASS_TOL`]
//!   for every successfully constructed kernel.
//!
//! Invariants & assumptions
//! ------------------------
//! - Mass is assigned to lags `1..=max_support`; a lag of zero days carries
//!   no mass (an infection cannot weight its own day's infectiousness, and a
//!   report cannot precede its case).
//! - The underlying gamma uses moment matching: `shape = (mean/sd)^2`,
//!   `rate = mean/sd^2`.
//! - Truncation renormalization divides by `CDF(max_support)`, so even a
//!   short support relative to the mean yields a proper PMF (or a typed
//!   error when the truncated mass degenerates numerically).
//!
//! Conventions
//! -----------
//! - Storage is 0-based: `pmf[j]` is the mass at lag `j + 1` days.
//! - Kernels are immutable once constructed; changing `(mean, sd)` means
//!   constructing a new kernel.
//! - Pure construction: no I/O, no randomness.
//!
//! Downstream usage
//! ----------------
//! - Build a generation-time kernel once per model run and pass it to
//!   [`compute_rt`]; build a reporting-delay kernel the same way and pass it
//!   to [`expected_reports`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover normalization (sum ≈ 1 within 1e-6 across parameter
//!   regimes, including supports much shorter than the mean),
//!   non-negativity, parameter rejection, and mass concentration around the
//!   mean for a tight sd.
//!
//! [`compute_rt`]: crate::renewal::core::convolution::compute_rt
//! [`expected_reports`]: crate::renewal::observation::reports::expected_reports
use crate::renewal::{
    core::validation::{validate_delay_mean, validate_delay_sd},
    errors::{RenewalError, RenewalResult},
};
use ndarray::{Array1, ArrayView1};
use statrs::distribution::{ContinuousCDF, Gamma};

/// Tolerance within which a constructed kernel's mass must equal 1.
pub const KERNEL_MASS_TOL: f64 = 1e-6;

/// DelayKernel — discretized gamma delay distribution over daily lags.
///
/// Purpose
/// -------
/// Represent a finite, non-negative probability mass function over lags
/// `1..=max_support` obtained by discretizing a continuous gamma delay
/// distribution, for use as a convolution weight vector.
///
/// Key behaviors
/// -------------
/// - Owns the discretized PMF together with the `(mean, sd)` that produced
///   it, so downstream transforms (e.g. the growth-rate mapping) can reuse
///   the continuous parameters.
/// - Guarantees the PMF sums to 1 within [`KERNEL_MASS_TOL`] and has no
///   negative entries.
///
/// Parameters
/// ----------
/// Constructed via [`DelayKernel::discretised_gamma`] with:
/// - `mean`: `f64` — mean of the continuous gamma delay; finite, > 0.
/// - `sd`: `f64` — standard deviation of the delay; finite, > 0.
/// - `max_support`: `usize` — number of daily lags carrying mass; ≥ 1.
///
/// Fields
/// ------
/// - `mean`: `f64`
///   Mean of the underlying continuous gamma distribution.
/// - `sd`: `f64`
///   Standard deviation of the underlying continuous gamma distribution.
/// - `pmf`: `Array1<f64>`
///   Discretized mass, `pmf[j]` = mass at lag `j + 1` days. Length equals
///   `max_support`.
///
/// Invariants
/// ----------
/// - `pmf.iter().all(|&w| w >= 0.0)`.
/// - `pmf.sum()` is within [`KERNEL_MASS_TOL`] of 1.
/// - `mean` and `sd` are finite and strictly positive.
///
/// Performance
/// -----------
/// - Construction is O(max_support) gamma-CDF evaluations; lookups are O(1).
///
/// Notes
/// -----
/// - Fields are read-only by convention; there is no mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayKernel {
    /// Mean of the underlying continuous gamma delay.
    pub mean: f64,
    /// Standard deviation of the underlying continuous gamma delay.
    pub sd: f64,
    /// Discretized mass; `pmf[j]` is the probability of a lag of `j + 1` days.
    pub pmf: Array1<f64>,
}

impl DelayKernel {
    /// Discretize a gamma delay distribution onto daily lags.
    ///
    /// Parameters
    /// ----------
    /// - `mean`: `f64`
    ///   Mean of the continuous gamma delay. Must be finite and strictly
    ///   positive.
    /// - `sd`: `f64`
    ///   Standard deviation of the delay. Must be finite and strictly
    ///   positive.
    /// - `max_support`: `usize`
    ///   Number of daily lags `1..=max_support` that carry mass. Must be
    ///   ≥ 1.
    ///
    /// Returns
    /// -------
    /// `RenewalResult<DelayKernel>`
    ///   - `Ok(kernel)` whose PMF differences the gamma CDF at integer lag
    ///     boundaries (`mass(j) = CDF(j) − CDF(j−1)`) and renormalizes by
    ///     the truncated total `CDF(max_support)`.
    ///   - `Err(..)` when parameters are invalid or the truncated mass
    ///     degenerates numerically.
    ///
    /// Errors
    /// ------
    /// - `RenewalError::InvalidDelayMean` / `RenewalError::InvalidDelaySd`
    ///   for non-finite or non-positive parameters (rejected before any
    ///   distribution is built — upstream must supply valid positives).
    /// - `RenewalError::InvalidMaxSupport` when `max_support == 0`.
    /// - `RenewalError::DegenerateKernelMass` when `CDF(max_support)` is not
    ///   strictly positive and finite (e.g. a mean so far beyond the support
    ///   that the truncated mass underflows to zero).
    ///
    /// Panics
    /// ------
    /// - Never panics: the gamma constructor cannot fail once the mean/sd
    ///   checks have passed, and that path is still mapped to
    ///   `DegenerateKernelMass` rather than unwrapped.
    ///
    /// Notes
    /// -----
    /// - Moment matching gives `shape = (mean/sd)^2`, `rate = mean/sd^2`.
    /// - Renormalization makes the PMF proper for *every* valid
    ///   parameterization, which is what lets the renewal convolution treat
    ///   the kernel sum as exactly 1 in steady state.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use epi_renewal::renewal::core::delay::DelayKernel;
    /// let gt = DelayKernel::discretised_gamma(3.0, 2.0, 5)?;
    /// assert_eq!(gt.pmf.len(), 5);
    /// assert!((gt.pmf.sum() - 1.0).abs() < 1e-6);
    /// # Ok::<(), epi_renewal::renewal::errors::RenewalError>(())
    /// ```
    pub fn discretised_gamma(mean: f64, sd: f64, max_support: usize) -> RenewalResult<Self> {
        let mean = validate_delay_mean(mean)?;
        let sd = validate_delay_sd(sd)?;
        if max_support == 0 {
            return Err(RenewalError::InvalidMaxSupport);
        }

        let shape = (mean / sd).powi(2);
        let rate = mean / (sd * sd);
        let gamma = Gamma::new(shape, rate)
            .map_err(|_| RenewalError::DegenerateKernelMass { mass: f64::NAN })?;

        let total_mass = gamma.cdf(max_support as f64);
        if !total_mass.is_finite() || total_mass <= 0.0 {
            return Err(RenewalError::DegenerateKernelMass { mass: total_mass });
        }

        let mut pmf = Array1::zeros(max_support);
        let mut lower_cdf = 0.0;
        for j in 0..max_support {
            let upper_cdf = gamma.cdf((j + 1) as f64);
            pmf[j] = (upper_cdf - lower_cdf).max(0.0) / total_mass;
            lower_cdf = upper_cdf;
        }

        Ok(DelayKernel { mean, sd, pmf })
    }

    /// Number of daily lags carrying mass.
    pub fn max_support(&self) -> usize {
        self.pmf.len()
    }

    /// Read-only view of the discretized mass function.
    pub fn pmf_view(&self) -> ArrayView1<'_, f64> {
        self.pmf.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Normalization and non-negativity of the discretized PMF across
    //   parameter regimes, including supports much shorter than the mean.
    // - Rejection of invalid parameters before any distribution is built.
    // - Qualitative mass placement for a tight sd (mode near the mean lag).
    //
    // They intentionally DO NOT cover:
    // - Use of kernels in convolutions (covered by the convolution and
    //   reports modules).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the core mass property: for all valid (mean > 0, sd > 0,
    // max_support > 0), the kernel sums to 1 within 1e-6 and has no
    // negative entries.
    //
    // Given
    // -----
    // - A grid of (mean, sd, max_support) covering tight and diffuse delays
    //   and a support far shorter than the mean.
    //
    // Expect
    // ------
    // - Every constructed kernel is a proper PMF.
    fn discretised_gamma_is_a_proper_pmf_across_regimes() {
        // Arrange
        let cases = [
            (3.0, 2.0, 5usize),
            (3.0, 2.0, 30),
            (0.5, 0.25, 10),
            (15.0, 1.0, 20),
            (100.0, 10.0, 7), // support well short of the mean
        ];

        for &(mean, sd, max_support) in &cases {
            // Act
            let kernel = DelayKernel::discretised_gamma(mean, sd, max_support)
                .expect("valid parameters must construct a kernel");

            // Assert
            assert_eq!(kernel.pmf.len(), max_support);
            assert!(kernel.pmf.iter().all(|&w| w >= 0.0));
            assert!(
                (kernel.pmf.sum() - 1.0).abs() < KERNEL_MASS_TOL,
                "mass {} not within tolerance for ({mean}, {sd}, {max_support})",
                kernel.pmf.sum()
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid parameters are rejected with the matching typed error
    // and no kernel is constructed.
    //
    // Given
    // -----
    // - mean ≤ 0, sd ≤ 0, non-finite parameters, and max_support == 0.
    //
    // Expect
    // ------
    // - The corresponding `RenewalError` variant in each case.
    fn discretised_gamma_rejects_invalid_parameters() {
        assert!(matches!(
            DelayKernel::discretised_gamma(0.0, 1.0, 5),
            Err(RenewalError::InvalidDelayMean { .. })
        ));
        assert!(matches!(
            DelayKernel::discretised_gamma(3.0, -1.0, 5),
            Err(RenewalError::InvalidDelaySd { .. })
        ));
        assert!(matches!(
            DelayKernel::discretised_gamma(f64::NAN, 1.0, 5),
            Err(RenewalError::InvalidDelayMean { .. })
        ));
        assert!(matches!(
            DelayKernel::discretised_gamma(3.0, 2.0, 0),
            Err(RenewalError::InvalidMaxSupport)
        ));
    }

    #[test]
    // Purpose
    // -------
    // Check qualitative mass placement: a tight delay around 3 days puts
    // more mass at lag 3 than at the support edges.
    //
    // Given
    // -----
    // - mean = 3.0, sd = 0.5, max_support = 10.
    //
    // Expect
    // ------
    // - `pmf[2]` (lag 3) strictly exceeds `pmf[0]` (lag 1) and `pmf[9]`
    //   (lag 10).
    fn tight_delay_concentrates_mass_near_mean() {
        // Arrange / Act
        let kernel = DelayKernel::discretised_gamma(3.0, 0.5, 10)
            .expect("valid parameters must construct a kernel");

        // Assert
        assert!(kernel.pmf[2] > kernel.pmf[0]);
        assert!(kernel.pmf[2] > kernel.pmf[9]);
    }
}
