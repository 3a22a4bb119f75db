//! Errors for the renewal-equation Rt stack (series validation, delay-kernel
//! checks, and observation-model failures).
//!
//! This module defines a renewal-core error type, [`RenewalError`], and an
//! observation-model error type, [`ObsError`], used across the Rust core and
//! the optional Python-facing API. Both implement `Display`/`Error` and, when
//! the `python-bindings` feature is enabled, convert to `PyErr`.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy); lags are reported 1-based
//!   because a lag of zero days has no mass in any delay kernel.
//! - Infection counts must be **finite and non-negative**; delay distribution
//!   means and standard deviations must be **finite and strictly positive**.
//! - `seeding_time` marks the warm-up prefix excluded from Rt/growth output;
//!   it must be strictly smaller than the series length.
//! - Numerical edge cases with a defined substitute (the infectiousness floor, the
//!   expected-report clamp, the large-phi Poisson fallback) are **not**
//!   errors and never appear here.

/// Crate-wide result alias for renewal-core operations that may produce
/// [`RenewalError`].
pub type RenewalResult<T> = Result<T, RenewalError>;

/// Result alias for observation-model paths that may produce [`ObsError`].
pub type ObsResult<T> = Result<T, ObsError>;

/// Unified error type for the renewal estimation core.
///
/// Covers input/series validation, delay-kernel construction, and
/// configuration checks. Implements `Display`/`Error` and converts to a
/// Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum RenewalError {
    // ---- Input/series validation ----
    /// Series is empty.
    EmptySeries,

    /// An infection value is NaN/±inf.
    NonFiniteInfection { index: usize, value: f64 },

    /// An infection value is < 0 (counts must be non-negative).
    NegativeInfection { index: usize, value: f64 },

    /// Seeding time must leave at least one post-seeding day.
    SeedingTimeOutOfRange { seeding_time: usize, len: usize },

    /// Two series that must align have different lengths.
    LengthMismatch { expected: usize, actual: usize },

    // ---- Reported-case table validation ----
    /// Case table has no rows.
    EmptyCases,

    /// Case dates must be strictly ascending.
    NonAscendingDates { index: usize },

    /// A confirmed count is NaN/±inf or negative.
    InvalidCaseCount { index: usize, value: f64 },

    // ---- Delay-kernel construction ----
    /// Delay distribution mean must be finite and > 0.
    InvalidDelayMean { value: f64 },

    /// Delay distribution sd must be finite and > 0.
    InvalidDelaySd { value: f64 },

    /// Kernel support must contain at least one lag.
    InvalidMaxSupport,

    /// The gamma mass over the truncated support is zero or non-finite, so
    /// the kernel cannot be renormalized.
    DegenerateKernelMass { mass: f64 },

    // ---- Growth transform ----
    /// Generation-time sd for the growth transform must be finite and ≥ 0.
    InvalidGrowthSd { value: f64 },

    // ---- Summary configuration ----
    /// Probability levels for credible intervals must lie strictly in (0, 1).
    InvalidProbabilityLevel { index: usize, value: f64 },

    /// No posterior draws were supplied to summarize.
    NoDraws,

    // ---- Observation model (lifted from ObsError) ----
    /// Wrapper for an observation-model failure inside a pipeline run.
    Observation(ObsError),
}

impl std::error::Error for RenewalError {}

impl std::fmt::Display for RenewalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/series validation ----
            RenewalError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            RenewalError::NonFiniteInfection { index, value } => {
                write!(f, "Infection value at index {index} is non-finite: {value}")
            }
            RenewalError::NegativeInfection { index, value } => {
                write!(f, "Infection value at index {index} is negative: {value}")
            }
            RenewalError::SeedingTimeOutOfRange { seeding_time, len } => {
                write!(
                    f,
                    "Seeding time ({seeding_time}) must be smaller than the series length ({len})."
                )
            }
            RenewalError::LengthMismatch { expected, actual } => {
                write!(f, "Series length mismatch: expected {expected}, got {actual}")
            }
            // ---- Reported-case table validation ----
            RenewalError::EmptyCases => {
                write!(f, "Reported-case table has no rows.")
            }
            RenewalError::NonAscendingDates { index } => {
                write!(f, "Case dates must be strictly ascending; violation at index {index}")
            }
            RenewalError::InvalidCaseCount { index, value } => {
                write!(
                    f,
                    "Confirmed count at index {index} must be finite and non-negative; got {value}"
                )
            }
            // ---- Delay-kernel construction ----
            RenewalError::InvalidDelayMean { value } => {
                write!(f, "Delay distribution mean must be finite and > 0; got {value}")
            }
            RenewalError::InvalidDelaySd { value } => {
                write!(f, "Delay distribution sd must be finite and > 0; got {value}")
            }
            RenewalError::InvalidMaxSupport => {
                write!(f, "Delay kernel support must contain at least one lag.")
            }
            RenewalError::DegenerateKernelMass { mass } => {
                write!(
                    f,
                    "Gamma mass over the truncated kernel support is degenerate ({mass}); \
                     cannot renormalize."
                )
            }
            // ---- Growth transform ----
            RenewalError::InvalidGrowthSd { value } => {
                write!(f, "Generation-time sd for the growth transform must be finite and >= 0; got {value}")
            }
            // ---- Summary configuration ----
            RenewalError::InvalidProbabilityLevel { index, value } => {
                write!(
                    f,
                    "Probability level at index {index} must lie strictly in (0, 1); got {value}"
                )
            }
            RenewalError::NoDraws => {
                write!(f, "At least one posterior draw is required.")
            }
            // ---- Observation model ----
            RenewalError::Observation(err) => {
                write!(f, "Observation model error: {err}")
            }
        }
    }
}

impl From<ObsError> for RenewalError {
    fn from(err: ObsError) -> RenewalError {
        RenewalError::Observation(err)
    }
}

/// Errors specific to observation-noise selection and report sampling.
///
/// Typical causes include an out-of-range model-type selector, invalid
/// dispersion parameters, and non-finite expected report counts.
#[derive(Debug, Clone, PartialEq)]
pub enum ObsError {
    /// model_type selects a dispersion stream that does not exist.
    UnknownModelType { model_type: usize, n_phi: usize },

    /// Dispersion parameter phi must be finite and > 0.
    InvalidPhi { index: usize, value: f64 },

    /// An expected report count is NaN/±inf.
    NonFiniteExpectedReport { index: usize, value: f64 },

    /// An expected report count is < 0.
    NegativeExpectedReport { index: usize, value: f64 },
}

impl std::error::Error for ObsError {}

impl std::fmt::Display for ObsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObsError::UnknownModelType { model_type, n_phi } => {
                write!(
                    f,
                    "model_type {model_type} selects dispersion stream {model_type} but only \
                     {n_phi} phi value(s) were supplied"
                )
            }
            ObsError::InvalidPhi { index, value } => {
                write!(f, "Dispersion phi at index {index} must be finite and > 0; got {value}")
            }
            ObsError::NonFiniteExpectedReport { index, value } => {
                write!(f, "Expected report count at index {index} is non-finite: {value}")
            }
            ObsError::NegativeExpectedReport { index, value } => {
                write!(f, "Expected report count at index {index} is negative: {value}")
            }
        }
    }
}

/// Convert a [`RenewalError`] into a Python `ValueError` with the error
/// message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<RenewalError> for pyo3::PyErr {
    fn from(err: RenewalError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Convert an [`ObsError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ObsError> for pyo3::PyErr {
    fn from(err: ObsError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Display formatting for representative variants of both error enums.
    // - The ObsError → RenewalError lifting used by the pipeline.
    //
    // They intentionally DO NOT cover:
    // - PyErr conversions (exercised by Python-level smoke tests when the
    //   `python-bindings` feature is enabled).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that Display output carries the offending values so fail-fast
    // messages are actionable without a debugger.
    //
    // Given
    // -----
    // - A `SeedingTimeOutOfRange` with seeding_time = 9, len = 9.
    //
    // Expect
    // ------
    // - Both numbers appear in the rendered message.
    fn renewal_error_display_includes_payload() {
        // Arrange
        let err = RenewalError::SeedingTimeOutOfRange { seeding_time: 9, len: 9 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('9'));
        assert!(msg.contains("Seeding time"));
    }

    #[test]
    // Purpose
    // -------
    // Ensure observation errors lift into the renewal error surface unchanged.
    //
    // Given
    // -----
    // - An `ObsError::UnknownModelType` with model_type = 2 and n_phi = 1.
    //
    // Expect
    // ------
    // - `RenewalError::from` wraps it as `Observation` and Display nests the
    //   inner message.
    fn obs_error_lifts_into_renewal_error() {
        // Arrange
        let inner = ObsError::UnknownModelType { model_type: 2, n_phi: 1 };

        // Act
        let lifted = RenewalError::from(inner.clone());

        // Assert
        assert_eq!(lifted, RenewalError::Observation(inner));
        assert!(lifted.to_string().contains("Observation model error"));
    }
}
