//! Run-level configuration for the renewal estimator.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the kernel supports used across
//! a model run: the maximum generation-time lag and the maximum
//! reporting-delay lag.
//!
//! Key behaviors
//! -------------
//! - Construct [`RenewalOptions`] values that enforce non-empty kernel
//!   supports via typed errors instead of panicking at call sites.
//! - Expose simple fields that the estimator uses to size its delay
//!   kernels.
//!
//! Invariants & assumptions
//! ------------------------
//! - `max_gt ≥ 1` and `max_delay ≥ 1`; a kernel with no lags cannot carry
//!   mass.
//! - Seeding time is *not* part of run configuration: it travels with each
//!   [`InfectionTrajectory`], where it is validated against the series
//!   length.
//!
//! Conventions
//! -----------
//! - Supports are counted in daily lags, matching the discretization in the
//!   delay module.
//!
//! Downstream usage
//! ----------------
//! - Construct once per run and hand to [`RenewalEstimator::new`]; the
//!   estimator builds one generation-time kernel and one reporting-delay
//!   kernel per draw from these supports.
//!
//! Testing notes
//! -------------
//! - Unit tests cover acceptance of positive supports and rejection of
//!   zero supports.
//!
//! [`InfectionTrajectory`]: crate::renewal::core::trajectory::InfectionTrajectory
//! [`RenewalEstimator::new`]: crate::renewal::models::estimator::RenewalEstimator::new
use crate::renewal::errors::{RenewalError, RenewalResult};

/// RenewalOptions — validated kernel supports for a model run.
///
/// Purpose
/// -------
/// Bundle the maximum generation-time lag and maximum reporting-delay lag
/// used to size the discretized kernels for every draw of a run.
///
/// Key behaviors
/// -------------
/// - Enforces non-empty supports at construction time.
/// - Cheap to copy; passed by value into the estimator.
///
/// Parameters
/// ----------
/// Constructed via [`RenewalOptions::new`] with:
/// - `max_gt`: `usize` — generation-time kernel support in days; ≥ 1.
/// - `max_delay`: `usize` — reporting-delay kernel support in days; ≥ 1.
///
/// Fields
/// ------
/// - `max_gt`: `usize`
///   Number of daily lags in the generation-time kernel.
/// - `max_delay`: `usize`
///   Number of daily lags in the reporting-delay kernel.
///
/// Invariants
/// ----------
/// - Both supports are ≥ 1.
///
/// Performance
/// -----------
/// - Construction is O(1); the type is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenewalOptions {
    /// Generation-time kernel support in daily lags (≥ 1).
    pub max_gt: usize,
    /// Reporting-delay kernel support in daily lags (≥ 1).
    pub max_delay: usize,
}

impl RenewalOptions {
    /// Construct validated run options.
    ///
    /// Parameters
    /// ----------
    /// - `max_gt`: `usize`
    ///   Generation-time kernel support in days. Must be ≥ 1.
    /// - `max_delay`: `usize`
    ///   Reporting-delay kernel support in days. Must be ≥ 1.
    ///
    /// Returns
    /// -------
    /// `RenewalResult<RenewalOptions>`
    ///   The validated options, or `RenewalError::InvalidMaxSupport` when
    ///   either support is zero.
    ///
    /// Errors
    /// ------
    /// - `RenewalError::InvalidMaxSupport` for a zero support.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(max_gt: usize, max_delay: usize) -> RenewalResult<Self> {
        if max_gt == 0 || max_delay == 0 {
            return Err(RenewalError::InvalidMaxSupport);
        }
        Ok(RenewalOptions { max_gt, max_delay })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Accept positive supports and reject zero in either position.
    //
    // Given
    // -----
    // - (15, 30), (0, 30), (15, 0).
    //
    // Expect
    // ------
    // - Ok for the first pair; `InvalidMaxSupport` for the others.
    fn supports_must_be_positive() {
        assert!(RenewalOptions::new(15, 30).is_ok());
        assert!(matches!(RenewalOptions::new(0, 30), Err(RenewalError::InvalidMaxSupport)));
        assert!(matches!(RenewalOptions::new(15, 0), Err(RenewalError::InvalidMaxSupport)));
    }
}
