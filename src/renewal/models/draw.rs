//! Posterior-draw inputs — the per-draw parameter bundle consumed by the
//! estimator.
//!
//! Purpose
//! -------
//! Represent one draw from an externally fitted posterior: the latent
//! infection trajectory together with the generation-time parameters,
//! reporting-delay parameters, dispersion parameters, and model-type
//! selector that the derived-quantity pipeline needs.
//!
//! Key behaviors
//! -------------
//! - Bundle a validated [`InfectionTrajectory`] with scalar delay
//!   parameters and the observation-noise selectors.
//! - Validation of the scalar parameters happens where they are used
//!   (kernel construction, noise selection), so a draw can be assembled
//!   cheaply from raw posterior output and still fail fast inside
//!   [`RenewalEstimator::estimate`].
//!
//! Invariants & assumptions
//! ------------------------
//! - One `PosteriorDraw` corresponds to one joint posterior sample; draws
//!   are independent of each other and carry no shared mutable state, which
//!   is what makes the outer-driver parallelism axis safe.
//! - `phi` is stored 0-based; `model_type == k > 0` selects `phi[k − 1]`.
//!
//! Conventions
//! -----------
//! - Delay parameters are `(mean, sd)` of continuous gamma distributions,
//!   in days.
//!
//! Downstream usage
//! ----------------
//! - Assemble from the external inference output and pass by reference to
//!   [`RenewalEstimator::estimate`] together with a per-draw RNG stream.
//!
//! Testing notes
//! -------------
//! - This is a plain data carrier; behavior is exercised through the
//!   estimator's unit and integration tests.
//!
//! [`InfectionTrajectory`]: crate::renewal::core::trajectory::InfectionTrajectory
//! [`RenewalEstimator::estimate`]: crate::renewal::models::estimator::RenewalEstimator::estimate
use crate::renewal::core::trajectory::InfectionTrajectory;

/// PosteriorDraw — one joint posterior sample for the derived-quantity
/// pipeline.
///
/// Purpose
/// -------
/// Carry everything draw-specific the estimator consumes: the latent
/// infection trajectory, generation-time and reporting-delay parameters,
/// dispersion parameters, and the model-type selector.
///
/// Parameters
/// ----------
/// Constructed directly (all fields public); the trajectory is the only
/// field with construction-time validation of its own.
///
/// Fields
/// ------
/// - `trajectory`: [`InfectionTrajectory`]
///   Latent daily infections with seeding metadata.
/// - `gt_mean`, `gt_sd`: `f64`
///   Generation-time gamma parameters in days.
/// - `delay_mean`, `delay_sd`: `f64`
///   Reporting-delay gamma parameters in days.
/// - `phi`: `Vec<f64>`
///   Per-stream Negative-Binomial dispersion parameters (0-based storage).
/// - `model_type`: `usize`
///   `0` for Poisson reporting noise; `k > 0` selects `phi[k − 1]`.
///
/// Invariants
/// ----------
/// - The trajectory invariants hold (validated at its construction).
/// - Scalar parameters are validated when the estimator builds kernels and
///   selects the noise model; an invalid draw fails fast at that point.
///
/// Notes
/// -----
/// - Cloning is cheap relative to the per-draw computation; draws can be
///   fanned out to worker threads by value.
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorDraw {
    /// Latent daily infections with seeding metadata.
    pub trajectory: InfectionTrajectory,
    /// Generation-time gamma mean, days.
    pub gt_mean: f64,
    /// Generation-time gamma sd, days.
    pub gt_sd: f64,
    /// Reporting-delay gamma mean, days.
    pub delay_mean: f64,
    /// Reporting-delay gamma sd, days.
    pub delay_sd: f64,
    /// Per-stream dispersion parameters (0-based storage).
    pub phi: Vec<f64>,
    /// Observation model selector: 0 = Poisson, k > 0 = NB with `phi[k − 1]`.
    pub model_type: usize,
}
