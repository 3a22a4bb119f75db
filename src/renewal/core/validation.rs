//! Renewal validation helpers — reusable checks for delay parameters, series,
//! and summary configuration.
//!
//! Purpose
//! -------
//! Centralize small, reusable validation routines used across the renewal
//! stack. These helpers enforce basic sanity checks for delay-distribution
//! parameters, infection series, seeding times, reported-case counts, and
//! credible-interval probability levels, so higher-level constructors can
//! fail fast with structured errors.
//!
//! Key behaviors
//! -------------
//! - Validate delay-distribution parameters (mean/sd positivity and
//!   finiteness) before any `statrs` distribution is constructed.
//! - Validate infection trajectories (non-empty, finite, non-negative) and
//!   the seeding-time/series-length relationship.
//! - Validate probability levels used for credible-interval summaries.
//!
//! Invariants & assumptions
//! ------------------------
//! - Infection values are counts on a latent scale and may be fractional,
//!   but must be finite and ≥ 0.
//! - Delay means and standard deviations must be finite and strictly
//!   positive; the growth transform alone tolerates `sd == 0` and has its
//!   own check.
//! - `seeding_time < len` so that at least one post-seeding day exists.
//!
//! Conventions
//! -----------
//! - Indices are 0-based and follow the usual Rust/ndarray conventions.
//! - Validation functions return [`RenewalResult`] and never panic on
//!   invalid *inputs*; panics are reserved for programming errors elsewhere.
//! - This module contains no I/O and no logging; it only inspects numeric
//!   values and array lengths.
//!
//! Downstream usage
//! ----------------
//! - Call these helpers from constructors ([`DelayKernel`],
//!   [`InfectionTrajectory`], [`ReportedCases`], summary configuration) to
//!   enforce documented invariants at the boundaries of the API.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on representative valid and invalid
//!   inputs, including boundary cases (zeros, infinities, NaNs, and
//!   seeding times exactly at the series length).
//!
//! [`DelayKernel`]: crate::renewal::core::delay::DelayKernel
//! [`InfectionTrajectory`]: crate::renewal::core::trajectory::InfectionTrajectory
//! [`ReportedCases`]: crate::renewal::horizon::ReportedCases
use crate::renewal::errors::{RenewalError, RenewalResult};
use ndarray::ArrayView1;

/// Validate a delay-distribution mean.
///
/// Parameters
/// ----------
/// - `mean`: `f64`
///   Candidate mean of the underlying continuous gamma delay distribution.
///   Must be finite and strictly positive.
///
/// Returns
/// -------
/// `RenewalResult<f64>`
///   - `Ok(mean)` if `mean` is finite and strictly > 0.
///   - `Err(RenewalError::InvalidDelayMean)` with the offending value
///     otherwise.
///
/// Errors
/// ------
/// - `RenewalError::InvalidDelayMean`
///   Returned if `mean` is NaN, ±∞, or ≤ 0.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Rejection happens *before* kernel construction so that invalid
///   parameters propagate as construction-time failures, not silent NaNs.
pub fn validate_delay_mean(mean: f64) -> RenewalResult<f64> {
    if !mean.is_finite() || mean <= 0.0 {
        return Err(RenewalError::InvalidDelayMean { value: mean });
    }
    Ok(mean)
}

/// Validate a delay-distribution standard deviation.
///
/// Parameters
/// ----------
/// - `sd`: `f64`
///   Candidate sd of the underlying continuous gamma delay distribution.
///   Must be finite and strictly positive.
///
/// Returns
/// -------
/// `RenewalResult<f64>`
///   - `Ok(sd)` if `sd` is finite and strictly > 0.
///   - `Err(RenewalError::InvalidDelaySd)` otherwise.
///
/// Errors
/// ------
/// - `RenewalError::InvalidDelaySd`
///   Returned if `sd` is NaN, ±∞, or ≤ 0.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - A degenerate `sd == 0` delay has all its mass at the mean and cannot be
///   discretized by CDF differencing; it is rejected here. The growth-rate
///   transform, which only needs the coefficient of variation, accepts
///   `sd == 0` through its own dedicated check.
pub fn validate_delay_sd(sd: f64) -> RenewalResult<f64> {
    if !sd.is_finite() || sd <= 0.0 {
        return Err(RenewalError::InvalidDelaySd { value: sd });
    }
    Ok(sd)
}

/// Validate an infection series (non-empty, finite, non-negative).
///
/// Parameters
/// ----------
/// - `infections`: `ArrayView1<f64>`
///   Candidate latent infection trajectory, oldest day first.
///
/// Returns
/// -------
/// `RenewalResult<()>`
///   - `Ok(())` if the series is non-empty and every value is finite and
///     ≥ 0.
///   - The first violation found otherwise, with its index and value.
///
/// Errors
/// ------
/// - `RenewalError::EmptySeries` if the series has no entries.
/// - `RenewalError::NonFiniteInfection` for NaN/±∞ entries.
/// - `RenewalError::NegativeInfection` for entries < 0.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Posterior draws of latent infections are real-valued; zero is allowed
///   (the renewal division is protected by the infectiousness floor, not by
///   input positivity).
pub fn validate_infections(infections: ArrayView1<f64>) -> RenewalResult<()> {
    if infections.is_empty() {
        return Err(RenewalError::EmptySeries);
    }
    for (index, &value) in infections.iter().enumerate() {
        if !value.is_finite() {
            return Err(RenewalError::NonFiniteInfection { index, value });
        }
        if value < 0.0 {
            return Err(RenewalError::NegativeInfection { index, value });
        }
    }
    Ok(())
}

/// Validate the seeding-time/series-length relationship.
///
/// Parameters
/// ----------
/// - `seeding_time`: `usize`
///   Number of initial warm-up days excluded from Rt/growth output.
/// - `len`: `usize`
///   Total series length (seeding period + observed period).
///
/// Returns
/// -------
/// `RenewalResult<()>`
///   - `Ok(())` if `seeding_time < len`.
///   - `Err(RenewalError::SeedingTimeOutOfRange)` otherwise.
///
/// Errors
/// ------
/// - `RenewalError::SeedingTimeOutOfRange`
///   Returned when the seeding period swallows the whole series, which would
///   otherwise produce an empty (or misaligned) Rt output.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_seeding_time(seeding_time: usize, len: usize) -> RenewalResult<()> {
    if seeding_time >= len {
        return Err(RenewalError::SeedingTimeOutOfRange { seeding_time, len });
    }
    Ok(())
}

/// Validate credible-interval probability levels.
///
/// Parameters
/// ----------
/// - `levels`: `&[f64]`
///   Probability levels at which cross-draw quantiles will be evaluated.
///
/// Returns
/// -------
/// `RenewalResult<()>`
///   - `Ok(())` if every level lies strictly in (0, 1).
///   - The first violation otherwise, with its index and value.
///
/// Errors
/// ------
/// - `RenewalError::InvalidProbabilityLevel`
///   Returned for levels that are NaN or outside the open unit interval.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Levels are not required to be sorted or unique; quantile evaluation is
///   independent per level.
pub fn validate_probability_levels(levels: &[f64]) -> RenewalResult<()> {
    for (index, &value) in levels.iter().enumerate() {
        if !(value > 0.0 && value < 1.0) {
            return Err(RenewalError::InvalidProbabilityLevel { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover each helper on representative valid and invalid
    // inputs, including boundary cases (zero, NaN, ±inf, seeding time equal
    // to the series length).
    //
    // They intentionally DO NOT cover:
    // - Kernel or trajectory construction (covered by the modules that call
    //   these helpers).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Accept strictly positive finite delay means and reject everything else.
    //
    // Given
    // -----
    // - Valid mean 3.0; invalid means 0.0, -1.0, NaN, +inf.
    //
    // Expect
    // ------
    // - Ok for 3.0; `InvalidDelayMean` for each invalid input.
    fn delay_mean_positivity_and_finiteness() {
        assert_eq!(validate_delay_mean(3.0), Ok(3.0));
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_delay_mean(bad),
                Err(RenewalError::InvalidDelayMean { .. })
            ));
        }
    }

    #[test]
    // Purpose
    // -------
    // Accept strictly positive finite delay sds and reject zero, negative,
    // and non-finite values.
    //
    // Given
    // -----
    // - Valid sd 2.0; invalid sds 0.0, -0.5, NaN.
    //
    // Expect
    // ------
    // - Ok for 2.0; `InvalidDelaySd` otherwise.
    fn delay_sd_positivity_and_finiteness() {
        assert_eq!(validate_delay_sd(2.0), Ok(2.0));
        for bad in [0.0, -0.5, f64::NAN] {
            assert!(matches!(validate_delay_sd(bad), Err(RenewalError::InvalidDelaySd { .. })));
        }
    }

    #[test]
    // Purpose
    // -------
    // Report the first offending entry of an infection series with its index.
    //
    // Given
    // -----
    // - An empty series, a series with NaN at index 1, and a series with a
    //   negative value at index 2.
    //
    // Expect
    // ------
    // - `EmptySeries`, `NonFiniteInfection { index: 1, .. }`, and
    //   `NegativeInfection { index: 2, .. }` respectively.
    fn infection_series_reports_first_violation() {
        // Arrange
        let empty: ndarray::Array1<f64> = ndarray::Array1::zeros(0);
        let non_finite = array![1.0, f64::NAN, 2.0];
        let negative = array![1.0, 0.0, -3.0];

        // Act / Assert
        assert_eq!(validate_infections(empty.view()), Err(RenewalError::EmptySeries));
        assert!(matches!(
            validate_infections(non_finite.view()),
            Err(RenewalError::NonFiniteInfection { index: 1, .. })
        ));
        assert!(matches!(
            validate_infections(negative.view()),
            Err(RenewalError::NegativeInfection { index: 2, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Enforce `seeding_time < len` including the boundary case of equality.
    //
    // Given
    // -----
    // - (seeding_time, len) pairs (4, 5), (5, 5), (6, 5).
    //
    // Expect
    // ------
    // - Ok for (4, 5); `SeedingTimeOutOfRange` for the other two.
    fn seeding_time_strictly_below_length() {
        assert!(validate_seeding_time(4, 5).is_ok());
        assert!(matches!(
            validate_seeding_time(5, 5),
            Err(RenewalError::SeedingTimeOutOfRange { seeding_time: 5, len: 5 })
        ));
        assert!(validate_seeding_time(6, 5).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Require every probability level to lie strictly inside (0, 1).
    //
    // Given
    // -----
    // - A valid set {0.025, 0.5, 0.975} and invalid sets containing 0.0,
    //   1.0, and NaN.
    //
    // Expect
    // ------
    // - Ok for the valid set; `InvalidProbabilityLevel` with the offending
    //   index otherwise.
    fn probability_levels_open_unit_interval() {
        assert!(validate_probability_levels(&[0.025, 0.5, 0.975]).is_ok());
        assert!(matches!(
            validate_probability_levels(&[0.5, 0.0]),
            Err(RenewalError::InvalidProbabilityLevel { index: 1, .. })
        ));
        assert!(validate_probability_levels(&[1.0]).is_err());
        assert!(validate_probability_levels(&[f64::NAN]).is_err());
    }
}
