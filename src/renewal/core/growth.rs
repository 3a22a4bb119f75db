//! Growth-rate transform — map Rt to exponential growth rates under a gamma
//! generation interval.
//!
//! Purpose
//! -------
//! Provide the closed-form element-wise mapping from an instantaneous Rt
//! series to an exponential growth-rate series, assuming the generation
//! interval follows a gamma distribution with the supplied mean and sd.
//!
//! Key behaviors
//! -------------
//! - Compute `k = (sd/mean)^2` and `growth = (rt^k − 1) / (k · mean)`
//!   element-wise (the Wallinga–Lipsitch R-to-r relation for gamma
//!   generation intervals).
//! - Take the analytic `k → 0` limit `ln(rt) / mean` when `sd == 0`
//!   instead of dividing by zero.
//!
//! Invariants & assumptions
//! ------------------------
//! - `mean` must be finite and strictly positive; `sd` must be finite and
//!   ≥ 0. Unlike kernel discretization, a degenerate `sd == 0` is
//!   meaningful here (a fixed-length generation interval) and is accepted.
//! - The output has exactly the length of the input Rt series and carries no
//!   independent state.
//! - `growth == 0` exactly when `rt == 1`, for every valid `(mean, sd)` —
//!   including the degenerate branch.
//!
//! Conventions
//! -----------
//! - Growth rates are per day, matching the daily time step of the renewal
//!   convolution.
//! - Pure function: no I/O, no randomness.
//!
//! Downstream usage
//! ----------------
//! - Feed the output of [`compute_rt`] straight in; the generation-time
//!   `(mean, sd)` should be the same pair the generation-time kernel was
//!   built from.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the zero-at-one property across parameter choices,
//!   sign behavior around Rt = 1, the degenerate-sd limit against a small-sd
//!   approximation, and parameter rejection.
//!
//! [`compute_rt`]: crate::renewal::core::convolution::compute_rt
use crate::renewal::{
    core::validation::validate_delay_mean,
    errors::{RenewalError, RenewalResult},
};
use ndarray::{Array1, ArrayView1};

/// Map an Rt series to exponential growth rates under a gamma generation
/// interval.
///
/// Parameters
/// ----------
/// - `rt`: `ArrayView1<f64>`
///   Instantaneous reproduction numbers, one per observed day.
/// - `gt_mean`: `f64`
///   Mean of the gamma generation interval. Must be finite and strictly
///   positive.
/// - `gt_sd`: `f64`
///   Standard deviation of the generation interval. Must be finite and
///   ≥ 0; `0` selects the degenerate fixed-interval limit.
///
/// Returns
/// -------
/// `RenewalResult<Array1<f64>>`
///   Growth rates, same length as `rt`:
///   - `sd > 0`: `(rt^k − 1) / (k · mean)` with `k = (sd/mean)^2`;
///   - `sd == 0`: the analytic limit `ln(rt) / mean`.
///
/// Errors
/// ------
/// - `RenewalError::InvalidDelayMean` when `gt_mean` is non-finite or ≤ 0.
/// - `RenewalError::InvalidGrowthSd` when `gt_sd` is non-finite or < 0.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - The degenerate-sd branch is a deliberate policy choice: the source
///   relation leaves `k = 0` unspecified, and the limit preserves
///   "growth = 0 iff Rt = 1" across the whole parameter domain instead of
///   propagating NaN.
/// - `rt == 0` yields `-∞` in the degenerate branch and a finite negative
///   value otherwise; both are faithful to the closed form and are left to
///   the caller to interpret.
///
/// Examples
/// --------
/// ```rust
/// # use epi_renewal::renewal::core::growth::rt_to_growth;
/// # use ndarray::array;
/// let rt = array![1.0, 1.2, 0.8];
/// let growth = rt_to_growth(rt.view(), 3.0, 2.0)?;
/// assert!(growth[0].abs() < 1e-12); // Rt = 1 ⇒ zero growth
/// assert!(growth[1] > 0.0);
/// assert!(growth[2] < 0.0);
/// # Ok::<(), epi_renewal::renewal::errors::RenewalError>(())
/// ```
pub fn rt_to_growth(
    rt: ArrayView1<f64>, gt_mean: f64, gt_sd: f64,
) -> RenewalResult<Array1<f64>> {
    let gt_mean = validate_delay_mean(gt_mean)?;
    if !gt_sd.is_finite() || gt_sd < 0.0 {
        return Err(RenewalError::InvalidGrowthSd { value: gt_sd });
    }

    if gt_sd == 0.0 {
        return Ok(rt.mapv(|r| r.ln() / gt_mean));
    }

    let k = (gt_sd / gt_mean).powi(2);
    Ok(rt.mapv(|r| (r.powf(k) - 1.0) / (k * gt_mean)))
}
