//! epi_renewal — renewal-equation Rt estimation core with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the renewal estimation pipeline to Python via the `_epi_renewal`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing classes and the module initializer.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`renewal`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_epi_renewal` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Indexing, units, and statistical conventions follow the documentation of
//!   the underlying Rust modules (`renewal::core`, `renewal::observation`,
//!   etc.).
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//! - Reproducibility from Python flows through an explicit integer seed
//!   argument; the bindings never touch global random state.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - External users are expected to interact with either the safe Rust APIs
//!   or thin pure-Python wrappers over the classes defined here; the PyO3
//!   plumbing is considered internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration test that exercises the full per-draw pipeline.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, called, and round-tripped correctly from Python.

pub mod renewal;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "python-bindings")]
use crate::{
    renewal::{
        core::{options::RenewalOptions, trajectory::InfectionTrajectory},
        models::{
            draw::PosteriorDraw,
            estimator::{DrawEstimates, RenewalEstimator},
        },
    },
    utils::extract_f64_array,
};

/// RtEstimator — Python-facing wrapper for the per-draw renewal pipeline.
///
/// Purpose
/// -------
/// Expose the [`RenewalEstimator`] API to Python callers while preserving the
/// core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a [`RenewalEstimator`] from Python-friendly arguments, validating
///   the kernel supports up front.
/// - Provide an `estimate` method that converts a Python array of latent
///   infections into an [`InfectionTrajectory`], runs the full derived-
///   quantity pipeline for one posterior draw, and returns the aligned
///   series as an [`RtDrawEstimates`] result object.
///
/// Parameters
/// ----------
/// Constructed from Python via `RtEstimator(max_gt, max_delay)`:
/// - `max_gt`: `usize`
///   Generation-time kernel support in days; must be ≥ 1.
/// - `max_delay`: `usize`
///   Reporting-delay kernel support in days; must be ≥ 1.
///
/// Fields
/// ------
/// - `inner`: [`RenewalEstimator`]
///   Stateless pipeline holding the validated run options.
///
/// Invariants
/// ----------
/// - `inner` always holds options validated by [`RenewalOptions::new`].
///
/// Performance
/// -----------
/// - One allocation copies the Python infection array into a Rust buffer;
///   all subsequent work operates on owned `ndarray` storage.
///
/// Notes
/// -----
/// - Native Rust callers should use [`RenewalEstimator`] directly; this type
///   exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "epi_renewal")]
pub struct RtEstimator {
    /// Underlying Rust estimator.
    pub inner: RenewalEstimator,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl RtEstimator {
    #[new]
    #[pyo3(
        signature = (max_gt, max_delay),
        text_signature = "(max_gt, max_delay, /)"
    )]
    pub fn new(max_gt: usize, max_delay: usize) -> PyResult<Self> {
        let options = RenewalOptions::new(max_gt, max_delay)?;
        Ok(RtEstimator { inner: RenewalEstimator::new(options) })
    }

    #[pyo3(
        signature = (
            infections,
            seeding_time,
            gt_mean,
            gt_sd,
            delay_mean,
            delay_sd,
            phi = None,
            model_type = 0,
            seed = 0,
        ),
        text_signature = "(self, infections, seeding_time, gt_mean, gt_sd, delay_mean, \
                          delay_sd, /, phi=None, model_type=0, seed=0)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn estimate<'py>(
        &self, py: Python<'py>, infections: &Bound<'py, PyAny>, seeding_time: usize,
        gt_mean: f64, gt_sd: f64, delay_mean: f64, delay_sd: f64, phi: Option<Vec<f64>>,
        model_type: usize, seed: u64,
    ) -> PyResult<RtDrawEstimates> {
        let arr: PyReadonlyArray1<f64> = extract_f64_array(py, infections)?;
        let slice = arr.as_slice().map_err(|_| {
            PyValueError::new_err("infections must be a 1-D contiguous float64 array or sequence")
        })?;
        let trajectory = InfectionTrajectory::new(Array1::from(slice.to_vec()), seeding_time)?;

        let draw = PosteriorDraw {
            trajectory,
            gt_mean,
            gt_sd,
            delay_mean,
            delay_sd,
            phi: phi.unwrap_or_default(),
            model_type,
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let estimates = self.inner.estimate(&draw, &mut rng)?;
        Ok(RtDrawEstimates { inner: estimates })
    }
}

/// RtDrawEstimates — per-draw pipeline output exposed to Python.
///
/// Purpose
/// -------
/// Present the aligned Rt, growth-rate, and report series from
/// [`DrawEstimates`] to Python code in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the four derived series produced for one posterior draw.
/// - Provide accessors that clone the underlying values into Python-owned
///   containers.
///
/// Parameters
/// ----------
/// Instances are constructed internally by [`RtEstimator::estimate`] and are
/// not created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`DrawEstimates`]
///   Full per-draw result bundle.
///
/// Invariants
/// ----------
/// - All four series share the observed-window length of the trajectory the
///   draw was estimated from.
///
/// Performance
/// -----------
/// - Accessors are O(n) in the observed-window length when cloning into
///   Python; no other work is performed.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should prefer
///   using [`DrawEstimates`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "epi_renewal")]
pub struct RtDrawEstimates {
    /// Underlying Rust result bundle.
    pub inner: DrawEstimates,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl RtDrawEstimates {
    /// Effective reproduction number per observed day.
    #[getter]
    pub fn rt(&self) -> Vec<f64> {
        self.inner.rt.to_vec()
    }

    /// Exponential growth rate per observed day.
    #[getter]
    pub fn growth(&self) -> Vec<f64> {
        self.inner.growth.to_vec()
    }

    /// Expected reported cases per observed day.
    #[getter]
    pub fn expected_reports(&self) -> Vec<f64> {
        self.inner.expected_reports.to_vec()
    }

    /// Sampled reported-case counts per observed day.
    #[getter]
    pub fn sampled_reports(&self) -> Vec<u64> {
        self.inner.sampled_reports.to_vec()
    }
}

/// _epi_renewal — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_epi_renewal` Python module and register the classes used by
/// the public `epi_renewal` package.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_epi_renewal`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If class registration fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _epi_renewal<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<RtEstimator>()?;
    m.add_class::<RtDrawEstimates>()?;
    Ok(())
}
