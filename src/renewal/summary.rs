//! Cross-draw summaries — per-day credible-interval quantiles over posterior
//! draws.
//!
//! Purpose
//! -------
//! Reduce a collection of per-draw series (Rt, growth, reports) to per-day
//! sample quantiles at configurable probability levels, the numerical
//! content of the credible-interval tables the orchestration layer renders.
//!
//! Key behaviors
//! -------------
//! - [`default_probability_levels`] supplies the standard level set: the
//!   0.05 grid from 0.05 to 0.95 plus the 0.01/0.025 and 0.975/0.99 tails.
//! - [`credible_quantiles`] sorts each day's cross-draw sample once and
//!   evaluates every requested level with linear-interpolation sample
//!   quantiles (Hyndman & Fan type 7, the convention of the reference
//!   summarizers).
//!
//! Invariants & assumptions
//! ------------------------
//! - All draws must have the same length; a mismatch is a typed error, not
//!   a truncation.
//! - Levels must lie strictly in (0, 1); they need not be sorted or unique.
//! - With a single draw every quantile equals that draw's value.
//!
//! Conventions
//! -----------
//! - The output is indexed `[level, day]`, matching "one summary row per
//!   level" table layouts.
//!
//! Downstream usage
//! ----------------
//! - Run the estimator over all posterior draws, collect one series per
//!   draw (e.g. `rt`), and summarize here; rendering and persistence of the
//!   resulting table stay external to this crate.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the default level set, exact quantiles on a known
//!   grid, the single-draw degenerate case, and validation failures.
use crate::renewal::{
    core::validation::validate_probability_levels,
    errors::{RenewalError, RenewalResult},
};
use ndarray::{Array2, ArrayView1};

/// Standard credible-interval probability levels: 0.01 and 0.025 tails, the
/// 0.05…0.95 grid, and the 0.975 and 0.99 tails.
pub fn default_probability_levels() -> Vec<f64> {
    let mut levels = vec![0.01, 0.025];
    for step in 1..=19 {
        levels.push(f64::from(step) * 0.05);
    }
    levels.push(0.975);
    levels.push(0.99);
    levels
}

/// Linear-interpolation sample quantile (Hyndman & Fan type 7) on sorted
/// data.
///
/// Parameters
/// ----------
/// - `sorted`: `&[f64]`
///   Non-empty, ascending sample.
/// - `p`: `f64`
///   Probability level in (0, 1), validated by the caller.
///
/// Returns
/// -------
/// `f64`
///   `x[h]` interpolated at `h = (n − 1) · p`.
///
/// Notes
/// -----
/// - Type 7 is the default of the reference summarizers this module
///   mirrors; for `n == 1` every level returns the single value.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Per-day cross-draw quantiles at the given probability levels.
///
/// Parameters
/// ----------
/// - `draws`: `&[ArrayView1<f64>]`
///   One series per posterior draw, all of the same length (one entry per
///   observed day).
/// - `levels`: `&[f64]`
///   Probability levels, each strictly in (0, 1).
///
/// Returns
/// -------
/// `RenewalResult<Array2<f64>>`
///   Quantile matrix indexed `[level, day]` with shape
///   `(levels.len(), day_count)`.
///
/// Errors
/// ------
/// - `RenewalError::NoDraws` for an empty draw collection.
/// - `RenewalError::LengthMismatch` at the first draw whose length differs
///   from the first draw's.
/// - `RenewalError::InvalidProbabilityLevel` for levels outside (0, 1).
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Each day's cross-draw sample is sorted once and reused for every
///   level, so the cost is O(days · draws · log draws + days · levels).
///
/// Examples
/// --------
/// ```rust
/// # use epi_renewal::renewal::summary::credible_quantiles;
/// # use ndarray::array;
/// let a = array![1.0, 10.0];
/// let b = array![2.0, 20.0];
/// let c = array![3.0, 30.0];
/// let q = credible_quantiles(&[a.view(), b.view(), c.view()], &[0.5])?;
/// assert_eq!(q[[0, 0]], 2.0);
/// assert_eq!(q[[0, 1]], 20.0);
/// # Ok::<(), epi_renewal::renewal::errors::RenewalError>(())
/// ```
pub fn credible_quantiles(
    draws: &[ArrayView1<f64>], levels: &[f64],
) -> RenewalResult<Array2<f64>> {
    validate_probability_levels(levels)?;
    let first = draws.first().ok_or(RenewalError::NoDraws)?;
    let day_count = first.len();
    for draw in draws.iter().skip(1) {
        if draw.len() != day_count {
            return Err(RenewalError::LengthMismatch {
                expected: day_count,
                actual: draw.len(),
            });
        }
    }

    let mut out = Array2::zeros((levels.len(), day_count));
    let mut column = Vec::with_capacity(draws.len());
    for day in 0..day_count {
        column.clear();
        column.extend(draws.iter().map(|draw| draw[day]));
        column.sort_unstable_by(|a, b| a.total_cmp(b));
        for (row, &p) in levels.iter().enumerate() {
            out[[row, day]] = quantile_sorted(&column, p);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover the default level set, exact type-7 quantiles on a
    // known grid, the single-draw degenerate case, and validation failures.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The default level set is the documented 23-element grid, ascending,
    // with the expected tails.
    //
    // Given
    // -----
    // - `default_probability_levels()`.
    //
    // Expect
    // ------
    // - 23 levels from 0.01 to 0.99, strictly ascending, containing 0.025,
    //   0.5, and 0.975.
    fn default_levels_form_the_documented_grid() {
        // Act
        let levels = default_probability_levels();

        // Assert
        assert_eq!(levels.len(), 23);
        assert!((levels[0] - 0.01).abs() < 1e-12);
        assert!((levels[levels.len() - 1] - 0.99).abs() < 1e-12);
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
        assert!(levels.iter().any(|&p| (p - 0.025).abs() < 1e-12));
        assert!(levels.iter().any(|&p| (p - 0.5).abs() < 1e-12));
        assert!(levels.iter().any(|&p| (p - 0.975).abs() < 1e-12));
    }

    #[test]
    // Purpose
    // -------
    // Type-7 quantiles on a known 5-draw grid match the closed-form
    // interpolation.
    //
    // Given
    // -----
    // - Draws [1, 2, 3, 4, 5] on a single day; levels 0.25, 0.5, 0.75.
    //
    // Expect
    // ------
    // - Quantiles 2.0, 3.0, 4.0 (h = (n − 1)p lands on integers).
    fn known_grid_quantiles_are_exact() {
        // Arrange
        let draws: Vec<ndarray::Array1<f64>> =
            (1..=5).map(|v| array![f64::from(v)]).collect();
        let views: Vec<_> = draws.iter().map(|d| d.view()).collect();

        // Act
        let q = credible_quantiles(&views, &[0.25, 0.5, 0.75])
            .expect("valid inputs must summarize");

        // Assert
        assert_eq!(q.shape(), &[3, 1]);
        assert!((q[[0, 0]] - 2.0).abs() < 1e-12);
        assert!((q[[1, 0]] - 3.0).abs() < 1e-12);
        assert!((q[[2, 0]] - 4.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // A single draw makes every quantile equal to that draw's values.
    //
    // Given
    // -----
    // - One 3-day draw and the default levels.
    //
    // Expect
    // ------
    // - Every row of the output equals the draw.
    fn single_draw_collapses_all_levels() {
        // Arrange
        let draw = array![1.5, 2.5, 3.5];
        let levels = default_probability_levels();

        // Act
        let q = credible_quantiles(&[draw.view()], &levels)
            .expect("valid inputs must summarize");

        // Assert
        assert_eq!(q.shape(), &[levels.len(), 3]);
        for row in 0..levels.len() {
            for day in 0..3 {
                assert!((q[[row, day]] - draw[day]).abs() < 1e-12);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Validation failures are typed: no draws, mismatched lengths, and
    // out-of-range levels.
    //
    // Given
    // -----
    // - An empty draw slice; draws of lengths 2 and 3; a level of 1.0.
    //
    // Expect
    // ------
    // - `NoDraws`, `LengthMismatch`, and `InvalidProbabilityLevel`
    //   respectively.
    fn malformed_inputs_fail_fast() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        assert!(matches!(
            credible_quantiles(&[], &[0.5]),
            Err(RenewalError::NoDraws)
        ));
        assert!(matches!(
            credible_quantiles(&[a.view(), b.view()], &[0.5]),
            Err(RenewalError::LengthMismatch { expected: 2, actual: 3 })
        ));
        assert!(matches!(
            credible_quantiles(&[a.view()], &[1.0]),
            Err(RenewalError::InvalidProbabilityLevel { index: 0, .. })
        ));
    }
}
