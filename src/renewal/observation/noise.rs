//! Observation-noise models — count-noise selection for report sampling.
//!
//! Purpose
//! -------
//! Encode the Poisson-vs-Negative-Binomial dispatch as a small tagged
//! variant selected once per run from the `(model_type, phi)` pair carried
//! by a posterior draw, instead of a runtime branch re-evaluated per
//! element.
//!
//! Key behaviors
//! -------------
//! - [`ObservationNoise::from_model`] maps `model_type == 0` to [`Poisson`],
//!   and `model_type == k > 0` to [`NegativeBinomial`] with dispersion
//!   `phi[k − 1]`.
//! - Dispersion values above [`PHI_POISSON_CUTOFF`] degrade to [`Poisson`]
//!   at selection time: at that scale overdispersion is negligible and the
//!   gamma–Poisson mixture would risk numerical overflow. This is a design
//!   attenuation, never an error; callers that want to log it can inspect
//!   the selected variant.
//!
//! Invariants & assumptions
//! ------------------------
//! - The phi vector is stored 0-based: stream `k` reads `phi[k − 1]`.
//!   `k > phi.len()` is a typed error.
//! - A selected `NegativeBinomial` carries a finite `phi` in
//!   `(0, PHI_POISSON_CUTOFF]`; larger phi means *less* overdispersion.
//!
//! Conventions
//! -----------
//! - Selection is pure; sampling lives in the reports module, which matches
//!   on the selected variant.
//!
//! Downstream usage
//! ----------------
//! - Select once per run (or per draw when phi is draw-specific) and pass
//!   by reference into [`sample_reports`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover each selection path, the cutoff boundary, phi
//!   validation, and the out-of-range model type.
//!
//! [`Poisson`]: ObservationNoise::Poisson
//! [`NegativeBinomial`]: ObservationNoise::NegativeBinomial
//! [`sample_reports`]: crate::renewal::observation::reports::sample_reports
use crate::renewal::errors::{ObsError, ObsResult};

/// Dispersion threshold above which Negative-Binomial sampling degrades to
/// Poisson.
pub const PHI_POISSON_CUTOFF: f64 = 1e4;

/// Count-noise model for report sampling.
///
/// Variants encode pure Poisson noise and Negative-Binomial noise with mean
/// parameterization (`mean μ`, dispersion `phi`). Selected once per run via
/// [`ObservationNoise::from_model`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObservationNoise {
    /// Pure Poisson counts (variance equals the mean).
    Poisson,
    /// Negative-Binomial counts with mean μ and dispersion φ
    /// (variance `μ + μ²/φ`).
    NegativeBinomial {
        /// Dispersion parameter; finite, > 0, and ≤ [`PHI_POISSON_CUTOFF`].
        phi: f64,
    },
}

impl ObservationNoise {
    /// Select the count-noise model for a run.
    ///
    /// Parameters
    /// ----------
    /// - `model_type`: `usize`
    ///   Selector: `0` for pure Poisson (phi ignored), `k > 0` for
    ///   Negative-Binomial with dispersion `phi[k − 1]`.
    /// - `phi`: `&[f64]`
    ///   Per-stream dispersion parameters. May be empty when
    ///   `model_type == 0`.
    ///
    /// Returns
    /// -------
    /// `ObsResult<ObservationNoise>`
    ///   - `Poisson` when `model_type == 0` or the selected phi exceeds
    ///     [`PHI_POISSON_CUTOFF`].
    ///   - `NegativeBinomial { phi }` otherwise.
    ///
    /// Errors
    /// ------
    /// - `ObsError::UnknownModelType` when `model_type > phi.len()`.
    /// - `ObsError::InvalidPhi` when the selected phi is non-finite or ≤ 0.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Notes
    /// -----
    /// - The cutoff substitution emits no signal of its own; the orchestration
    ///   layer can detect it by comparing the requested model type with the
    ///   returned variant and log it as informational.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use epi_renewal::renewal::observation::noise::ObservationNoise;
    /// assert_eq!(ObservationNoise::from_model(0, &[])?, ObservationNoise::Poisson);
    /// assert_eq!(
    ///     ObservationNoise::from_model(1, &[6.5])?,
    ///     ObservationNoise::NegativeBinomial { phi: 6.5 }
    /// );
    /// assert_eq!(ObservationNoise::from_model(1, &[1e6])?, ObservationNoise::Poisson);
    /// # Ok::<(), epi_renewal::renewal::errors::ObsError>(())
    /// ```
    pub fn from_model(model_type: usize, phi: &[f64]) -> ObsResult<Self> {
        if model_type == 0 {
            return Ok(ObservationNoise::Poisson);
        }
        if model_type > phi.len() {
            return Err(ObsError::UnknownModelType { model_type, n_phi: phi.len() });
        }
        let index = model_type - 1;
        let value = phi[index];
        if !value.is_finite() || value <= 0.0 {
            return Err(ObsError::InvalidPhi { index, value });
        }
        if value > PHI_POISSON_CUTOFF {
            return Ok(ObservationNoise::Poisson);
        }
        Ok(ObservationNoise::NegativeBinomial { phi: value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover each selection path of `from_model`, the cutoff
    // boundary, phi validation, and the out-of-range model type. Sampling
    // behavior under each variant is covered in the reports module.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // model_type == 0 selects Poisson regardless of phi content.
    //
    // Given
    // -----
    // - Empty phi and a phi vector with an invalid entry.
    //
    // Expect
    // ------
    // - Poisson in both cases (phi is ignored for model_type 0).
    fn model_type_zero_is_poisson_and_ignores_phi() {
        assert_eq!(ObservationNoise::from_model(0, &[]), Ok(ObservationNoise::Poisson));
        assert_eq!(ObservationNoise::from_model(0, &[-1.0]), Ok(ObservationNoise::Poisson));
    }

    #[test]
    // Purpose
    // -------
    // model_type == k selects the (k − 1)-th phi and yields
    // NegativeBinomial for in-range dispersion.
    //
    // Given
    // -----
    // - phi = [6.5, 12.0] with model types 1 and 2.
    //
    // Expect
    // ------
    // - NegativeBinomial with phi 6.5 and 12.0 respectively.
    fn positive_model_type_selects_matching_phi_stream() {
        let phi = [6.5, 12.0];
        assert_eq!(
            ObservationNoise::from_model(1, &phi),
            Ok(ObservationNoise::NegativeBinomial { phi: 6.5 })
        );
        assert_eq!(
            ObservationNoise::from_model(2, &phi),
            Ok(ObservationNoise::NegativeBinomial { phi: 12.0 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Dispersion above the cutoff degrades to Poisson; at the cutoff the
    // Negative Binomial is kept.
    //
    // Given
    // -----
    // - phi exactly at 1e4 and phi just above it.
    //
    // Expect
    // ------
    // - NegativeBinomial at the cutoff; Poisson above it.
    fn cutoff_boundary_degrades_to_poisson_only_above() {
        assert_eq!(
            ObservationNoise::from_model(1, &[PHI_POISSON_CUTOFF]),
            Ok(ObservationNoise::NegativeBinomial { phi: PHI_POISSON_CUTOFF })
        );
        assert_eq!(
            ObservationNoise::from_model(1, &[PHI_POISSON_CUTOFF + 1.0]),
            Ok(ObservationNoise::Poisson)
        );
    }

    #[test]
    // Purpose
    // -------
    // Reject invalid phi values and out-of-range model types with typed
    // errors.
    //
    // Given
    // -----
    // - phi = [0.0] and [NaN]; model_type = 2 with a single-entry phi.
    //
    // Expect
    // ------
    // - `InvalidPhi` for the bad values; `UnknownModelType` for the
    //   out-of-range selector.
    fn invalid_phi_and_model_type_are_rejected() {
        assert!(matches!(
            ObservationNoise::from_model(1, &[0.0]),
            Err(ObsError::InvalidPhi { index: 0, .. })
        ));
        assert!(matches!(
            ObservationNoise::from_model(1, &[f64::NAN]),
            Err(ObsError::InvalidPhi { index: 0, .. })
        ));
        assert!(matches!(
            ObservationNoise::from_model(2, &[6.5]),
            Err(ObsError::UnknownModelType { model_type: 2, n_phi: 1 })
        ));
    }
}
