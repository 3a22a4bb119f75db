//! observation — reporting model: count-noise selection, delay convolution,
//! and posterior-predictive sampling.
//!
//! Purpose
//! -------
//! Map latent infections to observed report counts. The noise model
//! ([`ObservationNoise`]) is selected once per run from the
//! `(model_type, phi)` pair; the reports module convolves cases with a
//! reporting-delay kernel and samples integer counts through a
//! caller-supplied RNG.
//!
//! Key behaviors
//! -------------
//! - Tagged-variant noise selection with the large-phi Poisson fallback
//!   ([`ObservationNoise::from_model`], [`PHI_POISSON_CUTOFF`]).
//! - Expected-report convolution and clamped posterior-predictive sampling
//!   ([`expected_reports`], [`sample_reports`], [`MAX_EXPECTED_REPORT`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Sampling is the only stochastic code in the crate and always goes
//!   through an explicit `Rng` argument; there is no global random state.
//! - Outputs are finite non-negative integer series of the input length.
//!
//! Downstream usage
//! ----------------
//! - Used by `renewal::models::estimator` per draw; usable standalone when
//!   only report simulation is needed.
//!
//! Testing notes
//! -------------
//! - Stochastic tests are seeded with tolerances several standard errors
//!   wide; selection logic is tested exactly.

pub mod noise;
pub mod reports;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::noise::{ObservationNoise, PHI_POISSON_CUTOFF};
pub use self::reports::{expected_reports, sample_reports, MAX_EXPECTED_REPORT};
