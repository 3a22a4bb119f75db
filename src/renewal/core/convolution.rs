//! Renewal/convolution engine — bounded lag-window convolutions and Rt
//! recovery.
//!
//! Purpose
//! -------
//! Implement the dense numerical loop at the heart of the estimator: a fixed
//! maximum-width trailing-window convolution of a daily series against a
//! discretized delay kernel, and the renewal-equation inversion that recovers
//! Rt from a latent infection trajectory.
//!
//! Key behaviors
//! -------------
//! - [`convolve_lagged`]: for each day `t`, the dot product of the kernel
//!   against the trailing window of the series ending at day `t − 1`,
//!   truncated at the series start when fewer than `max_support` past days
//!   exist.
//! - [`compute_infectiousness`]: the same convolution restricted to observed
//!   (post-seeding) days, plus the additive [`INFECTIOUSNESS_FLOOR`].
//! - [`compute_rt`]: `rt[s] = infections[s + seeding_time] /
//!   infectiousness[s]`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The kernel is reversed internally so that within a full window the
//!   first reversed coefficient aligns with the most distant lag; partial
//!   windows at the series start keep only the most recent lags (the
//!   available overlap).
//! - The divisor is never smaller than [`INFECTIOUSNESS_FLOOR`], so Rt is
//!   always finite given finite non-negative infections. Division by
//!   near-zero infectiousness must never occur; the explicit additive floor
//!   is the mechanism, not a caller obligation.
//! - Output length of [`compute_rt`] always equals
//!   `trajectory.observed_len()`.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout: `pmf[j]` weights a lag of `j + 1` days,
//!   so day `t` convolves days `t − 1, t − 2, …` with weights
//!   `pmf[0], pmf[1], …`.
//! - No I/O, no logging, no randomness; pure array transforms.
//!
//! Downstream usage
//! ----------------
//! - Build the generation-time kernel with
//!   [`DelayKernel::discretised_gamma`], wrap the infection draw in an
//!   [`InfectionTrajectory`], and call [`compute_rt`]; feed the result to
//!   [`rt_to_growth`] for growth rates.
//! - [`convolve_lagged`] is shared with the reporting model, which applies
//!   it with a reporting-delay kernel and no floor.
//!
//! Testing notes
//! -------------
//! - Unit tests cover output lengths, the steady-state property (constant
//!   infections ⇒ Rt ≈ 1 past the kernel support), window truncation at the
//!   series start, and a hand-computed uptick scenario.
//!
//! [`DelayKernel::discretised_gamma`]: crate::renewal::core::delay::DelayKernel::discretised_gamma
//! [`InfectionTrajectory`]: crate::renewal::core::trajectory::InfectionTrajectory
//! [`rt_to_growth`]: crate::renewal::core::growth::rt_to_growth
use crate::renewal::core::{delay::DelayKernel, trajectory::InfectionTrajectory};
use ndarray::{s, Array1, ArrayView1};
use std::cmp::min;

/// Additive floor on infectiousness. Keeps the renewal division away from
/// zero without distorting any realistically sized epidemic.
pub const INFECTIOUSNESS_FLOOR: f64 = 1e-5;

/// Trailing lag-window convolution of a daily series against a delay kernel.
///
/// Parameters
/// ----------
/// - `series`: `ArrayView1<f64>`
///   Daily values, oldest first.
/// - `kernel`: `&DelayKernel`
///   Discretized delay PMF; `kernel.pmf[j]` weights a lag of `j + 1` days.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Same length as `series`. Entry `t` is
///   `Σ_{lag = 1..=min(max_support, t)} pmf[lag − 1] · series[t − lag]`;
///   entry 0 is always 0 because no past days exist.
///
/// Errors
/// ------
/// - None. All index arithmetic is bounded by construction.
///
/// Panics
/// ------
/// - Never panics: window widths are clamped with `min` before slicing.
///
/// Notes
/// -----
/// - The kernel is applied through a reversed slice so a single `.dot`
///   covers the window, mirroring how a fixed-size sliding convolution is
///   usually written; when the window truncates at the series start, only
///   the most recent lags (the available overlap) contribute.
pub fn convolve_lagged(series: ArrayView1<f64>, kernel: &DelayKernel) -> Array1<f64> {
    let n = series.len();
    let max_support = kernel.max_support();
    let mut out = Array1::zeros(n);
    for t in 0..n {
        let width = min(max_support, t);
        if width == 0 {
            continue;
        }
        // series[t - width .. t] reversed pairs series[t - 1] with pmf[0].
        let window_rev = series.slice(s![t - width..t; -1]);
        out[t] = kernel.pmf.slice(s![..width]).dot(&window_rev);
    }
    out
}

/// Infectiousness over the observed period: floored generation-time
/// convolution of the infection trajectory.
///
/// Parameters
/// ----------
/// - `trajectory`: `&InfectionTrajectory`
///   Validated latent infections with seeding metadata.
/// - `gt_kernel`: `&DelayKernel`
///   Discretized generation-time distribution.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Length `trajectory.observed_len()`. Entry `s` is
///   [`INFECTIOUSNESS_FLOOR`] plus the trailing-window dot product of the
///   kernel against infections ending at day `s + seeding_time − 1`.
///
/// Errors
/// ------
/// - None; inputs are validated at construction of their types.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Every entry is ≥ [`INFECTIOUSNESS_FLOOR`] by construction, which is
///   what guarantees finite Rt downstream.
pub fn compute_infectiousness(
    trajectory: &InfectionTrajectory, gt_kernel: &DelayKernel,
) -> Array1<f64> {
    let full = convolve_lagged(trajectory.view(), gt_kernel);
    full.slice(s![trajectory.seeding_time..]).mapv(|v| v + INFECTIOUSNESS_FLOOR)
}

/// Recover the Rt series from a latent infection trajectory via the renewal
/// equation.
///
/// Parameters
/// ----------
/// - `trajectory`: `&InfectionTrajectory`
///   Validated latent infections with seeding metadata.
/// - `gt_kernel`: `&DelayKernel`
///   Discretized generation-time distribution.
///
/// Returns
/// -------
/// `Array1<f64>`
///   One Rt value per observed day:
///   `rt[s] = infections[s + seeding_time] / infectiousness[s]`. Length is
///   always `trajectory.observed_len()`; every entry is finite and
///   non-negative.
///
/// Errors
/// ------
/// - None; malformed inputs are rejected when the trajectory and kernel are
///   constructed.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - With constant infections `c` and a proper kernel, infectiousness is
///   ≈ `c` once the window is fully inside the series, so Rt ≈ 1 in steady
///   state.
/// - Rt is derived, never directly estimated: the caller supplies the
///   infection draw, this function inverts the renewal relation.
///
/// Examples
/// --------
/// ```rust
/// # use epi_renewal::renewal::core::{
/// #     convolution::compute_rt, delay::DelayKernel, trajectory::InfectionTrajectory,
/// # };
/// # use ndarray::array;
/// let gt = DelayKernel::discretised_gamma(3.0, 2.0, 5)?;
/// let infections = array![100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 110.0];
/// let trajectory = InfectionTrajectory::new(infections, 5)?;
/// let rt = compute_rt(&trajectory, &gt);
/// assert_eq!(rt.len(), 3);
/// # Ok::<(), epi_renewal::renewal::errors::RenewalError>(())
/// ```
pub fn compute_rt(trajectory: &InfectionTrajectory, gt_kernel: &DelayKernel) -> Array1<f64> {
    let infectiousness = compute_infectiousness(trajectory, gt_kernel);
    let observed = trajectory.infections.slice(s![trajectory.seeding_time..]);
    &observed / &infectiousness
}
