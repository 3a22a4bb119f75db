//! models — the per-draw estimation pipeline over posterior samples.
//!
//! Purpose
//! -------
//! Expose the user-facing estimation surface: the [`PosteriorDraw`] input
//! bundle and the [`RenewalEstimator`] that turns one draw into aligned Rt,
//! growth, and report series ([`DrawEstimates`]).
//!
//! Key behaviors
//! -------------
//! - One `estimate` call per posterior draw, composing the core convolution
//!   and the observation model behind a single type.
//! - Statelessness across draws: the estimator holds only run options, so
//!   an outer driver can parallelize draws with independent RNG streams.
//!
//! Downstream usage
//! ----------------
//! - Construct [`RenewalOptions`] once, wrap them in a [`RenewalEstimator`],
//!   then map `estimate` over the posterior; summarize the collected series
//!   with `renewal::summary`.
//!
//! Testing notes
//! -------------
//! - The estimator's unit tests cover alignment, reproducibility, and
//!   fail-fast behavior; the integration test runs a realistic multi-draw
//!   scenario end to end.
//!
//! [`RenewalOptions`]: crate::renewal::core::options::RenewalOptions

pub mod draw;
pub mod estimator;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::draw::PosteriorDraw;
pub use self::estimator::{DrawEstimates, RenewalEstimator};
