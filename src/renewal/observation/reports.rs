//! Reporting model — delay convolution of cases into expected reports and
//! posterior-predictive report sampling.
//!
//! Purpose
//! -------
//! Map latent infections/cases to observed report counts: first through a
//! reporting-delay convolution producing *expected* reports, then through a
//! count-noise distribution producing *sampled* integer reports.
//!
//! Key behaviors
//! -------------
//! - [`expected_reports`]: trailing-window convolution of a case series with
//!   a reporting-delay kernel (same bounded-window rule as the renewal
//!   engine, no floor term).
//! - [`sample_reports`]: element-wise posterior-predictive sampling; each
//!   expected value is clamped to [`MAX_EXPECTED_REPORT`] before sampling,
//!   then drawn from Poisson or from a Negative Binomial realized as the
//!   gamma–Poisson mixture `λ ~ Gamma(shape = φ, scale = μ/φ)`,
//!   `y ~ Poisson(λ)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Expected values must be finite and non-negative; violations are typed
//!   errors (fail fast, never truncated output).
//! - The clamp at [`MAX_EXPECTED_REPORT`] is a design attenuation against
//!   overflow in the random generators, not an error.
//! - Sampling is stochastic through a caller-supplied `Rng`; reproducibility
//!   requires the caller to seed it. No global randomness is touched.
//! - A zero mean short-circuits to a zero count (the Poisson constructor
//!   requires a strictly positive rate).
//!
//! Conventions
//! -----------
//! - Output counts are `u64`, same length as the input, finite by
//!   construction.
//! - The noise model is selected once via [`ObservationNoise::from_model`];
//!   this module only matches on the selected variant.
//!
//! Downstream usage
//! ----------------
//! - Convolve the post-seeding case/infection series with a reporting-delay
//!   kernel, then sample once per posterior draw with that draw's RNG
//!   stream.
//!
//! Testing notes
//! -------------
//! - Seeded-RNG tests cover Poisson mean convergence, the clamp, the zero
//!   mean short-circuit, length preservation, overdispersion of the
//!   Negative Binomial at small phi, and mean agreement at large phi.
//!
//! [`ObservationNoise::from_model`]: crate::renewal::observation::noise::ObservationNoise::from_model
use crate::renewal::{
    core::{convolution::convolve_lagged, delay::DelayKernel},
    errors::{ObsError, ObsResult},
    observation::noise::ObservationNoise,
};
use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rand_distr::{Distribution, Gamma, Poisson};

/// Clamp applied to expected report counts before sampling. Prevents
/// overflow inside the Poisson/gamma generators for pathological posterior
/// draws.
pub const MAX_EXPECTED_REPORT: f64 = 1e8;

/// Expected reports: reporting-delay convolution of a case series.
///
/// Parameters
/// ----------
/// - `cases`: `ArrayView1<f64>`
///   Daily latent cases/infections, oldest first.
/// - `delay_kernel`: `&DelayKernel`
///   Discretized reporting-delay distribution.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Same length as `cases`; entry `t` is the delay-weighted sum of past
///   cases, with the window truncating at the series start.
///
/// Errors
/// ------
/// - None; this is the same pure bounded convolution the renewal engine
///   uses, without the infectiousness floor.
///
/// Panics
/// ------
/// - Never panics.
pub fn expected_reports(cases: ArrayView1<f64>, delay_kernel: &DelayKernel) -> Array1<f64> {
    convolve_lagged(cases, delay_kernel)
}

/// Draw one Poisson count, short-circuiting a non-positive mean to zero.
///
/// The mean is validated finite and clamped before this is called, so the
/// constructor cannot fail on that domain; the error arm exists only to
/// keep the function total without panicking.
fn draw_poisson<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> u64 {
    if mean <= 0.0 {
        return 0;
    }
    match Poisson::new(mean) {
        Ok(dist) => dist.sample(rng) as u64,
        Err(_) => 0,
    }
}

/// Draw one Negative-Binomial count with mean `mean` and dispersion `phi`
/// via the gamma–Poisson mixture.
fn draw_neg_binomial<R: Rng + ?Sized>(rng: &mut R, mean: f64, phi: f64) -> u64 {
    if mean <= 0.0 {
        return 0;
    }
    let lambda = match Gamma::new(phi, mean / phi) {
        Ok(dist) => dist.sample(rng),
        Err(_) => mean,
    };
    draw_poisson(rng, lambda)
}

/// Posterior-predictive sampling of report counts.
///
/// Parameters
/// ----------
/// - `expected`: `ArrayView1<f64>`
///   Expected report counts, one per day. Every entry must be finite and
///   ≥ 0; entries are clamped to [`MAX_EXPECTED_REPORT`] before sampling.
/// - `noise`: `&ObservationNoise`
///   Count-noise model selected once per run. [`ObservationNoise::Poisson`]
///   samples `Poisson(expected)`;
///   [`ObservationNoise::NegativeBinomial`] samples the gamma–Poisson
///   mixture with the carried dispersion.
/// - `rng`: `&mut R`
///   Caller-supplied random source. Seed it for reproducible draws; use one
///   independent stream per posterior draw for parallel safety.
///
/// Returns
/// -------
/// `ObsResult<Array1<u64>>`
///   Sampled integer reports, same length as `expected`, every entry finite
///   and non-negative by construction.
///
/// Errors
/// ------
/// - `ObsError::NonFiniteExpectedReport` for NaN/±∞ expected values.
/// - `ObsError::NegativeExpectedReport` for negative expected values.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - The large-phi Poisson fallback happens at noise *selection* time
///   ([`ObservationNoise::from_model`]), so any `NegativeBinomial` reaching
///   this function has `phi ≤ 1e4` and the mixture is numerically safe
///   under the mean clamp.
///
/// Examples
/// --------
/// ```rust
/// # use epi_renewal::renewal::observation::{noise::ObservationNoise, reports::sample_reports};
/// # use ndarray::array;
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let expected = array![0.0, 12.5, 40.0];
/// let sampled = sample_reports(expected.view(), &ObservationNoise::Poisson, &mut rng)?;
/// assert_eq!(sampled.len(), 3);
/// assert_eq!(sampled[0], 0);
/// # Ok::<(), epi_renewal::renewal::errors::ObsError>(())
/// ```
pub fn sample_reports<R: Rng + ?Sized>(
    expected: ArrayView1<f64>, noise: &ObservationNoise, rng: &mut R,
) -> ObsResult<Array1<u64>> {
    for (index, &value) in expected.iter().enumerate() {
        if !value.is_finite() {
            return Err(ObsError::NonFiniteExpectedReport { index, value });
        }
        if value < 0.0 {
            return Err(ObsError::NegativeExpectedReport { index, value });
        }
    }

    let sampled = expected
        .iter()
        .map(|&mu| {
            let mean = mu.min(MAX_EXPECTED_REPORT);
            match *noise {
                ObservationNoise::Poisson => draw_poisson(rng, mean),
                ObservationNoise::NegativeBinomial { phi } => {
                    draw_neg_binomial(rng, mean, phi)
                }
            }
        })
        .collect::<Vec<u64>>();

    Ok(Array1::from(sampled))
}
