//! renewal — renewal-equation Rt estimation stack: core numerics,
//! observation model, per-draw pipeline, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive estimation layer that bundles delay-kernel
//! discretization, the renewal convolution and its Rt inversion, the
//! growth-rate transform, the reporting/observation model, horizon
//! adjustment, cross-draw summaries, and shared error types under a single
//! namespace. This is the surface most consumers (including the optional
//! Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the numerical building blocks in [`core`]: [`DelayKernel`]
//!   discretization, [`InfectionTrajectory`] containers, the floored
//!   renewal convolution ([`compute_rt`]), the growth transform
//!   ([`rt_to_growth`]), and validation helpers.
//! - Model report generation in [`observation`]: tagged-variant count
//!   noise ([`ObservationNoise`]) and clamped posterior-predictive sampling
//!   ([`sample_reports`]).
//! - Expose the per-draw pipeline in [`models`] via [`RenewalEstimator`]
//!   and [`DrawEstimates`], consuming [`PosteriorDraw`] bundles.
//! - Keep orchestration-adjacent but logic-bearing pieces alongside:
//!   forecast-horizon adjustment in [`horizon`] and credible-interval
//!   quantiles in [`summary`].
//! - Centralize error types in [`errors`] (`RenewalError`, `ObsError`, and
//!   the `RenewalResult` / `ObsResult` aliases) so callers see a uniform
//!   error surface across the stack.
//!
//! Invariants & assumptions
//! ------------------------
//! - Infection series are validated [`InfectionTrajectory`] instances:
//!   finite, non-negative, with `seeding_time < len`; Rt and growth outputs
//!   always have length `len − seeding_time`.
//! - Delay kernels are proper PMFs over lags `1..=max_support`, built with
//!   validated positive `(mean, sd)`; invalid parameters are
//!   construction-time failures, never silent NaNs.
//! - The renewal division is protected by an additive infectiousness floor
//!   (1e-5) and report sampling by an expected-value clamp (1e8); these are
//!   design attenuations, not errors.
//! - Randomness is confined to report sampling and always flows through a
//!   caller-supplied seeded `Rng`; every other operation is a deterministic
//!   pure array transform.
//! - Draws are independent: nothing in this namespace holds mutable state
//!   across `estimate` calls, so outer drivers may parallelize across
//!   draws freely.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; series run oldest-first; `pmf[j]`
//!   weights a lag of `j + 1` days.
//! - The stack performs no I/O and no logging; persistence, plotting, and
//!   table rendering belong to the orchestration layer, which consumes the
//!   series and quantile matrices produced here.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Build [`RenewalOptions`] (kernel supports) and a
//!      [`RenewalEstimator`].
//!   2. For each posterior draw, assemble a [`PosteriorDraw`] (trajectory +
//!      delay/noise parameters) and call
//!      `estimator.estimate(&draw, &mut rng)` with an independent seeded
//!      RNG stream.
//!   3. Collect the per-draw series and summarize them with
//!      [`credible_quantiles`] at [`default_probability_levels`] (or a
//!      custom level set).
//!   4. Adjust the requested forecast horizon once per run with
//!      [`update_horizon`] against the validated [`ReportedCases`] table.
//! - Python bindings are expected to import from this module (or its
//!   [`prelude`]) and rely on the `RenewalError`/`ObsError` conversions
//!   into `PyErr` defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule and cover kernel normalization,
//!   convolution truncation and steady state, the growth identity, noise
//!   selection and sampling statistics, horizon edge cases, and quantile
//!   exactness; `tests/integration_renewal_pipeline.rs` exercises the
//!   composed multi-draw pipeline.

pub mod core;
pub mod errors;
pub mod horizon;
pub mod models;
pub mod observation;
pub mod summary;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. More specialized items
// (validation helpers, the raw convolution, constants) remain under their
// respective submodules.

pub use self::core::{
    compute_infectiousness, compute_rt, rt_to_growth, DelayKernel, InfectionTrajectory,
    RenewalOptions,
};

pub use self::errors::{ObsError, ObsResult, RenewalError, RenewalResult};

pub use self::horizon::{update_horizon, ReportedCases};

pub use self::models::{DrawEstimates, PosteriorDraw, RenewalEstimator};

pub use self::observation::{expected_reports, sample_reports, ObservationNoise};

pub use self::summary::{credible_quantiles, default_probability_levels};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use epi_renewal::renewal::prelude::*;
//
// to import the main estimation surface in a single line, without pulling
// in lower-level internals.

pub mod prelude {
    pub use super::{
        compute_infectiousness, compute_rt, credible_quantiles, default_probability_levels,
        expected_reports, rt_to_growth, sample_reports, update_horizon, DelayKernel,
        DrawEstimates, InfectionTrajectory, ObsError, ObsResult, ObservationNoise,
        PosteriorDraw, RenewalError, RenewalEstimator, RenewalOptions, RenewalResult,
        ReportedCases,
    };
}
