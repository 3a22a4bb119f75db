//! core — shared renewal data, kernels, and convolution numerics.
//!
//! Purpose
//! -------
//! Collect the core building blocks for renewal-equation Rt estimation:
//! discretized delay kernels, validated infection trajectories, the bounded
//! lag-window convolution with its Rt inversion, the growth-rate transform,
//! run-level options, and validation helpers. Higher-level models build on
//! top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Discretize continuous gamma delays into finite PMFs ([`DelayKernel`]).
//! - Carry validated latent infection draws with their seeding prefix
//!   ([`InfectionTrajectory`]).
//! - Implement the renewal convolution and Rt recovery
//!   ([`convolve_lagged`], [`compute_infectiousness`], [`compute_rt`]) and
//!   the closed-form growth transform ([`rt_to_growth`]).
//! - Provide run configuration ([`RenewalOptions`]) and the shared
//!   fail-fast checks in [`validation`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Kernels are proper PMFs (non-negative, mass 1 within tolerance) over
//!   lags `1..=max_support`; trajectories are finite, non-negative, with
//!   `seeding_time < len`.
//! - The renewal division is floored, never raw: Rt is finite for every
//!   valid input.
//! - Everything here is a pure, bounded, finite-length array transform: no
//!   I/O, no logging, no randomness (randomness enters only in the
//!   observation layer).
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; `pmf[j]` weights a lag of `j + 1`
//!   days, series run oldest-first.
//!
//! Downstream usage
//! ----------------
//! - The per-draw pipeline in `renewal::models` is the expected consumer;
//!   callers needing lower-level control can use the convolution functions
//!   directly.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own invariants; the
//!   integration test exercises the composed pipeline.

pub mod convolution;
pub mod delay;
pub mod growth;
pub mod options;
pub mod trajectory;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::convolution::{
    compute_infectiousness, compute_rt, convolve_lagged, INFECTIOUSNESS_FLOOR,
};
pub use self::delay::{DelayKernel, KERNEL_MASS_TOL};
pub use self::growth::rt_to_growth;
pub use self::options::RenewalOptions;
pub use self::trajectory::InfectionTrajectory;
pub use self::validation::{
    validate_delay_mean, validate_delay_sd, validate_infections, validate_probability_levels,
    validate_seeding_time,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use epi_renewal::renewal::core::prelude::*;
//
// to import the main core surface in a single line.

pub mod prelude {
    pub use super::convolution::{compute_infectiousness, compute_rt, convolve_lagged};
    pub use super::delay::DelayKernel;
    pub use super::growth::rt_to_growth;
    pub use super::options::RenewalOptions;
    pub use super::trajectory::InfectionTrajectory;
}
