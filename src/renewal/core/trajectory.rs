//! Infection trajectories — validated latent infection series with a seeding
//! prefix.
//!
//! Purpose
//! -------
//! Carry one posterior (or prior) draw of the latent daily infection series
//! together with its seeding time, validated once at construction so the
//! renewal convolution and downstream transforms can assume well-formed
//! inputs.
//!
//! Key behaviors
//! -------------
//! - Validate the infection series (non-empty, finite, non-negative) and the
//!   seeding-time relationship (`seeding_time < len`) at construction.
//! - Expose the total length and the observed (post-seeding) length used to
//!   size Rt/growth outputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - `infections` is ordered oldest day first, newest at the end, one entry
//!   per modeled day (seeding period + observed period).
//! - Values are real-valued latent counts: fractional values are expected
//!   from the inference process, zeros are allowed.
//! - The trajectory is immutable once constructed; the Rt/growth computation
//!   never mutates it.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; the observed period starts at index
//!   `seeding_time`.
//! - This module contains no I/O and no logging.
//!
//! Downstream usage
//! ----------------
//! - Construct once per posterior draw (the latent inference process is
//!   external to this crate) and pass by reference into
//!   [`compute_rt`] and the observation model.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction with valid data, rejection of malformed
//!   series, and the seeding boundary (`seeding_time == len`).
//!
//! [`compute_rt`]: crate::renewal::core::convolution::compute_rt
use crate::renewal::{
    core::validation::{validate_infections, validate_seeding_time},
    errors::RenewalResult,
};
use ndarray::{Array1, ArrayView1};

/// InfectionTrajectory — one draw of latent daily infections plus seeding
/// metadata.
///
/// Purpose
/// -------
/// Represent a validated latent infection series whose first `seeding_time`
/// days are warm-up for the renewal convolution and are excluded from
/// Rt/growth output.
///
/// Key behaviors
/// -------------
/// - Stores the series and seeding time after one-time validation.
/// - Provides the observed length `len − seeding_time`, the exact length of
///   every derived Rt and growth series.
///
/// Parameters
/// ----------
/// Constructed via [`InfectionTrajectory::new`] with:
/// - `infections`: `Array1<f64>` — daily latent infections, oldest first;
///   finite and non-negative, non-empty.
/// - `seeding_time`: `usize` — warm-up prefix length; strictly smaller than
///   the series length.
///
/// Fields
/// ------
/// - `infections`: `Array1<f64>`
///   The validated series (seeding days followed by observed days).
/// - `seeding_time`: `usize`
///   Number of warm-up days excluded from derived output.
///
/// Invariants
/// ----------
/// - `!infections.is_empty()`; every entry finite and ≥ 0.
/// - `seeding_time < infections.len()`.
///
/// Performance
/// -----------
/// - Validation is a single O(n) pass at construction; accessors are O(1).
///
/// Notes
/// -----
/// - Fields are public for read access; constructing the value through
///   `new` is what establishes the invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct InfectionTrajectory {
    /// Daily latent infections, oldest day first.
    pub infections: Array1<f64>,
    /// Warm-up prefix excluded from Rt/growth output.
    pub seeding_time: usize,
}

impl InfectionTrajectory {
    /// Construct a validated infection trajectory.
    ///
    /// Parameters
    /// ----------
    /// - `infections`: `Array1<f64>`
    ///   Daily latent infections, oldest first. Must be non-empty with every
    ///   entry finite and ≥ 0.
    /// - `seeding_time`: `usize`
    ///   Warm-up prefix length. Must satisfy `seeding_time <
    ///   infections.len()`.
    ///
    /// Returns
    /// -------
    /// `RenewalResult<InfectionTrajectory>`
    ///   The validated trajectory, or the first invariant violation found.
    ///
    /// Errors
    /// ------
    /// - `RenewalError::EmptySeries`, `RenewalError::NonFiniteInfection`,
    ///   `RenewalError::NegativeInfection` for malformed series.
    /// - `RenewalError::SeedingTimeOutOfRange` when the seeding period
    ///   swallows the whole series.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(infections: Array1<f64>, seeding_time: usize) -> RenewalResult<Self> {
        validate_infections(infections.view())?;
        validate_seeding_time(seeding_time, infections.len())?;
        Ok(InfectionTrajectory { infections, seeding_time })
    }

    /// Total number of modeled days (seeding + observed).
    pub fn len(&self) -> usize {
        self.infections.len()
    }

    /// Whether the trajectory has no entries. Always false for a
    /// successfully constructed value; provided for clippy's len/is_empty
    /// convention.
    pub fn is_empty(&self) -> bool {
        self.infections.is_empty()
    }

    /// Number of observed (post-seeding) days; the length of every derived
    /// Rt and growth series.
    pub fn observed_len(&self) -> usize {
        self.infections.len() - self.seeding_time
    }

    /// Read-only view of the full infection series.
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.infections.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renewal::errors::RenewalError;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover construction with valid data, rejection of malformed
    // series, and the seeding boundary. Use of trajectories inside the
    // renewal convolution is covered in the convolution module.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a valid series constructs and reports the observed length
    // as `len − seeding_time`.
    //
    // Given
    // -----
    // - 8 days of infections with seeding_time = 5.
    //
    // Expect
    // ------
    // - Construction succeeds; `len() == 8`, `observed_len() == 3`.
    fn valid_trajectory_reports_lengths() {
        // Arrange
        let infections = array![100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 110.0];

        // Act
        let trajectory = InfectionTrajectory::new(infections, 5)
            .expect("valid trajectory must construct");

        // Assert
        assert_eq!(trajectory.len(), 8);
        assert_eq!(trajectory.observed_len(), 3);
        assert!(!trajectory.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Ensure malformed series and out-of-range seeding times are rejected.
    //
    // Given
    // -----
    // - A series containing a negative value, and a valid series with
    //   seeding_time == len.
    //
    // Expect
    // ------
    // - `NegativeInfection` and `SeedingTimeOutOfRange` respectively.
    fn invalid_trajectories_are_rejected() {
        assert!(matches!(
            InfectionTrajectory::new(array![1.0, -2.0], 0),
            Err(RenewalError::NegativeInfection { index: 1, .. })
        ));
        assert!(matches!(
            InfectionTrajectory::new(array![1.0, 2.0, 3.0], 3),
            Err(RenewalError::SeedingTimeOutOfRange { seeding_time: 3, len: 3 })
        ));
    }
}
