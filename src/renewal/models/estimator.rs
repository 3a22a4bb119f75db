//! Per-draw estimation pipeline — Rt, growth, and report series from one
//! posterior draw.
//!
//! Purpose
//! -------
//! Orchestrate the core routines behind a single model type: given a
//! [`PosteriorDraw`], build the draw's delay kernels, recover Rt via the
//! renewal convolution, transform it to growth rates, convolve the
//! infection series into expected reports, and sample posterior-predictive
//! report counts.
//!
//! Key behaviors
//! -------------
//! - [`RenewalEstimator::estimate`] runs the full derived-quantity pipeline
//!   for one draw and returns a [`DrawEstimates`] bundle.
//! - The estimator holds only the run-level [`RenewalOptions`] (kernel
//!   supports); it is stateless across draws, so one instance can be shared
//!   by reference across worker threads while each worker supplies its own
//!   RNG stream.
//!
//! Invariants & assumptions
//! ------------------------
//! - `rt` and `growth` have length `trajectory.observed_len()`; the report
//!   series are aligned to the same observed days.
//! - All validation is delegated to the constructors this pipeline calls;
//!   any invalid draw parameter surfaces as a typed `RenewalError` before
//!   partial output exists.
//!
//! Conventions
//! -----------
//! - The reporting convolution runs over the full infection series (the
//!   seeding period supplies warm-up history) and keeps the post-seeding
//!   days, so day `s` of every output refers to the same calendar day.
//! - One RNG stream per draw keeps draws reproducible and independent.
//!
//! Downstream usage
//! ----------------
//! - The orchestration layer (external to this crate) iterates posterior
//!   draws, calls `estimate` per draw, and assembles/persists the results;
//!   cross-draw credible intervals come from the summary module.
//!
//! Testing notes
//! -------------
//! - Unit tests cover output alignment, statelessness (identical inputs and
//!   seeds give identical outputs), and fail-fast propagation of invalid
//!   draw parameters. The integration test runs a realistic multi-draw
//!   pipeline.
use crate::renewal::{
    core::{
        convolution::compute_rt, delay::DelayKernel, growth::rt_to_growth,
        options::RenewalOptions,
    },
    errors::RenewalResult,
    models::draw::PosteriorDraw,
    observation::{noise::ObservationNoise, reports},
};
use ndarray::{s, Array1};
use rand::Rng;

/// DrawEstimates — derived quantities for one posterior draw.
///
/// Purpose
/// -------
/// Bundle the per-draw outputs of the pipeline: Rt, growth rate, expected
/// reports, and sampled reports, all aligned to the observed (post-seeding)
/// days.
///
/// Fields
/// ------
/// - `rt`: `Array1<f64>`
///   Effective reproduction numbers, one per observed day.
/// - `growth`: `Array1<f64>`
///   Exponential growth rates, same length as `rt`.
/// - `expected_reports`: `Array1<f64>`
///   Delay-convolved expected report counts over the observed days.
/// - `sampled_reports`: `Array1<u64>`
///   One posterior-predictive sample of report counts.
///
/// Invariants
/// ----------
/// - All four series have the same length: the draw's observed length.
///
/// Notes
/// -----
/// - Persistence, summarization into tables, and plotting of these series
///   are external concerns; this type is the core's output contract.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawEstimates {
    /// Effective reproduction numbers over the observed days.
    pub rt: Array1<f64>,
    /// Exponential growth rates over the observed days.
    pub growth: Array1<f64>,
    /// Expected (mean) report counts over the observed days.
    pub expected_reports: Array1<f64>,
    /// One posterior-predictive sample of report counts.
    pub sampled_reports: Array1<u64>,
}

/// RenewalEstimator — stateless per-draw derived-quantity pipeline.
///
/// Purpose
/// -------
/// Run the renewal core end to end for individual posterior draws, holding
/// only the run-level kernel supports.
///
/// Key behaviors
/// -------------
/// - Builds the generation-time and reporting-delay kernels from each
///   draw's parameters and the configured supports.
/// - Selects the observation-noise model once per draw from
///   `(model_type, phi)`.
/// - Carries no mutable state; `estimate` borrows `self` immutably.
///
/// Parameters
/// ----------
/// Constructed via [`RenewalEstimator::new`] with validated
/// [`RenewalOptions`].
///
/// Fields
/// ------
/// - `options`: [`RenewalOptions`]
///   Kernel supports shared by every draw of the run.
///
/// Invariants
/// ----------
/// - `options` satisfies its construction-time invariants (both supports
///   ≥ 1).
///
/// Performance
/// -----------
/// - Per draw: two kernel discretizations (O(support) CDF evaluations) and
///   O(n · support) convolution work.
///
/// Notes
/// -----
/// - Draw-level parallelism belongs to the caller: share the estimator by
///   reference and give each worker its own seeded RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenewalEstimator {
    /// Run-level kernel supports.
    pub options: RenewalOptions,
}

impl RenewalEstimator {
    /// Construct an estimator from validated run options.
    pub fn new(options: RenewalOptions) -> Self {
        RenewalEstimator { options }
    }

    /// Run the derived-quantity pipeline for one posterior draw.
    ///
    /// Parameters
    /// ----------
    /// - `draw`: `&PosteriorDraw`
    ///   One joint posterior sample (trajectory + delay/noise parameters).
    /// - `rng`: `&mut R`
    ///   Seeded random source for the posterior-predictive report sample;
    ///   use one independent stream per draw.
    ///
    /// Returns
    /// -------
    /// `RenewalResult<DrawEstimates>`
    ///   Rt, growth, expected reports, and sampled reports, all of length
    ///   `draw.trajectory.observed_len()`.
    ///
    /// Errors
    /// ------
    /// - `RenewalError::InvalidDelayMean` / `InvalidDelaySd` /
    ///   `DegenerateKernelMass` from kernel construction.
    /// - `RenewalError::InvalidGrowthSd` from the growth transform.
    /// - `RenewalError::Observation(..)` from noise selection or report
    ///   sampling.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Notes
    /// -----
    /// - Pipeline order: generation-time kernel → Rt → growth →
    ///   reporting-delay kernel → expected reports → sampled reports. Any
    ///   failure aborts before partial output is returned.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use epi_renewal::renewal::{
    /// #     core::{options::RenewalOptions, trajectory::InfectionTrajectory},
    /// #     models::{draw::PosteriorDraw, estimator::RenewalEstimator},
    /// # };
    /// # use ndarray::Array1;
    /// # use rand::SeedableRng;
    /// let estimator = RenewalEstimator::new(RenewalOptions::new(5, 10)?);
    /// let draw = PosteriorDraw {
    ///     trajectory: InfectionTrajectory::new(Array1::from_elem(20, 100.0), 5)?,
    ///     gt_mean: 3.0,
    ///     gt_sd: 2.0,
    ///     delay_mean: 4.0,
    ///     delay_sd: 2.0,
    ///     phi: vec![6.5],
    ///     model_type: 1,
    /// };
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let estimates = estimator.estimate(&draw, &mut rng)?;
    /// assert_eq!(estimates.rt.len(), 15);
    /// # Ok::<(), epi_renewal::renewal::errors::RenewalError>(())
    /// ```
    pub fn estimate<R: Rng + ?Sized>(
        &self, draw: &PosteriorDraw, rng: &mut R,
    ) -> RenewalResult<DrawEstimates> {
        let gt_kernel =
            DelayKernel::discretised_gamma(draw.gt_mean, draw.gt_sd, self.options.max_gt)?;
        let rt = compute_rt(&draw.trajectory, &gt_kernel);
        let growth = rt_to_growth(rt.view(), draw.gt_mean, draw.gt_sd)?;

        let delay_kernel = DelayKernel::discretised_gamma(
            draw.delay_mean,
            draw.delay_sd,
            self.options.max_delay,
        )?;
        // The seeding period supplies warm-up history for the reporting
        // convolution too: convolve the full series, then keep the observed
        // days, exactly as `compute_infectiousness` does.
        let expected_full = reports::expected_reports(draw.trajectory.view(), &delay_kernel);
        let expected = expected_full.slice(s![draw.trajectory.seeding_time..]).to_owned();

        let noise = ObservationNoise::from_model(draw.model_type, &draw.phi)?;
        let sampled = reports::sample_reports(expected.view(), &noise, rng)?;

        Ok(DrawEstimates { rt, growth, expected_reports: expected, sampled_reports: sampled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renewal::core::trajectory::InfectionTrajectory;
    use crate::renewal::errors::{ObsError, RenewalError};
    use rand::{rngs::StdRng, SeedableRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Output alignment of the four derived series.
    // - Reproducibility / statelessness of `estimate` under fixed seeds.
    // - Fail-fast propagation of invalid draw parameters.
    //
    // They intentionally DO NOT cover:
    // - Numerical correctness of the individual stages (unit tests in their
    //   modules) or realistic multi-draw scenarios (integration tests).
    // -------------------------------------------------------------------------

    fn flat_draw() -> PosteriorDraw {
        PosteriorDraw {
            trajectory: InfectionTrajectory::new(Array1::from_elem(25, 80.0), 7)
                .expect("valid trajectory must construct"),
            gt_mean: 3.6,
            gt_sd: 3.1,
            delay_mean: 4.0,
            delay_sd: 2.5,
            phi: vec![6.5],
            model_type: 1,
        }
    }

    #[test]
    // Purpose
    // -------
    // All four derived series share the draw's observed length.
    //
    // Given
    // -----
    // - A 25-day flat draw with seeding_time = 7.
    //
    // Expect
    // ------
    // - Lengths 18 everywhere; Rt ≈ 1 away from the window edge.
    fn estimates_are_aligned_to_observed_days() {
        // Arrange
        let estimator =
            RenewalEstimator::new(RenewalOptions::new(7, 10).expect("valid options"));
        let draw = flat_draw();
        let mut rng = StdRng::seed_from_u64(5);

        // Act
        let estimates = estimator.estimate(&draw, &mut rng).expect("pipeline must run");

        // Assert
        assert_eq!(estimates.rt.len(), 18);
        assert_eq!(estimates.growth.len(), 18);
        assert_eq!(estimates.expected_reports.len(), 18);
        assert_eq!(estimates.sampled_reports.len(), 18);
        assert!((estimates.rt[17] - 1.0).abs() < 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // The reporting convolution draws on seeding-period history: with a
    // flat, well-seeded trajectory the expected reports sit at the flat
    // level from observed day 0, with no warm-up ramp.
    //
    // Given
    // -----
    // - 30 flat days at 100 infections, seeding_time = 12, and a delay
    //   support of 10 days, so every observed day has a full convolution
    //   window reaching into the seeding period.
    //
    // Expect
    // ------
    // - Every expected report ≈ 100 (the kernel is renormalized to unit
    //   mass), including the very first observed day.
    fn expected_reports_use_seeding_history() {
        // Arrange
        let estimator =
            RenewalEstimator::new(RenewalOptions::new(7, 10).expect("valid options"));
        let draw = PosteriorDraw {
            trajectory: InfectionTrajectory::new(Array1::from_elem(30, 100.0), 12)
                .expect("valid trajectory must construct"),
            gt_mean: 3.6,
            gt_sd: 3.1,
            delay_mean: 4.0,
            delay_sd: 2.5,
            phi: vec![],
            model_type: 0,
        };
        let mut rng = StdRng::seed_from_u64(2);

        // Act
        let estimates = estimator.estimate(&draw, &mut rng).expect("pipeline must run");

        // Assert
        assert_eq!(estimates.expected_reports.len(), 18);
        for &value in estimates.expected_reports.iter() {
            assert!(
                (value - 100.0).abs() < 1e-6,
                "expected reports should hold the flat level from day 0, got {value}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // `estimate` is stateless: the same draw and seed produce identical
    // output on repeated calls and across estimator clones.
    //
    // Given
    // -----
    // - One estimator used twice with seed 9, and a copied estimator with
    //   the same seed.
    //
    // Expect
    // ------
    // - All three `DrawEstimates` compare equal.
    fn estimate_is_stateless_and_reproducible() {
        // Arrange
        let estimator =
            RenewalEstimator::new(RenewalOptions::new(7, 10).expect("valid options"));
        let copy = estimator;
        let draw = flat_draw();

        // Act
        let a = estimator
            .estimate(&draw, &mut StdRng::seed_from_u64(9))
            .expect("pipeline must run");
        let b = estimator
            .estimate(&draw, &mut StdRng::seed_from_u64(9))
            .expect("pipeline must run");
        let c = copy.estimate(&draw, &mut StdRng::seed_from_u64(9)).expect("pipeline must run");

        // Assert
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    // Purpose
    // -------
    // Invalid draw parameters fail fast with the typed error of the stage
    // that rejects them.
    //
    // Given
    // -----
    // - A draw with gt_sd = 0 (kernel construction rejects) and a draw with
    //   model_type = 3 but one phi entry.
    //
    // Expect
    // ------
    // - `InvalidDelaySd` and `Observation(UnknownModelType)` respectively.
    fn invalid_draw_parameters_fail_fast() {
        // Arrange
        let estimator =
            RenewalEstimator::new(RenewalOptions::new(7, 10).expect("valid options"));
        let mut rng = StdRng::seed_from_u64(1);

        let mut bad_sd = flat_draw();
        bad_sd.gt_sd = 0.0;

        let mut bad_model = flat_draw();
        bad_model.model_type = 3;

        // Act / Assert
        assert!(matches!(
            estimator.estimate(&bad_sd, &mut rng),
            Err(RenewalError::InvalidDelaySd { .. })
        ));
        assert!(matches!(
            estimator.estimate(&bad_model, &mut rng),
            Err(RenewalError::Observation(ObsError::UnknownModelType {
                model_type: 3,
                n_phi: 1
            }))
        ));
    }
}
