//! Forecast-horizon adjustment — anchor forecasts to a target date
//! regardless of data staleness.
//!
//! Purpose
//! -------
//! Provide the reported-case table abstraction the core reads (date range
//! and confirmed counts only) and the horizon-adjustment rule that extends a
//! requested forecast horizon by the gap between the estimation target date
//! and the latest observed report date.
//!
//! Key behaviors
//! -------------
//! - [`ReportedCases::new`] validates a date-indexed confirmed-count series
//!   (strictly ascending dates, finite non-negative counts, non-empty).
//! - [`update_horizon`] treats `horizon == 0` as the "no forecast
//!   requested" sentinel and returns it unchanged; otherwise it adds the
//!   day gap `target_date − last_report_date`, so the forecast always
//!   reaches exactly `target_date + original_horizon`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Dates are calendar days (`chrono::NaiveDate`); one row per day is not
//!   required, only strict ascent.
//! - A target date *before* the latest observed date shrinks the horizon
//!   and may drive it negative; that outcome is returned as-is and callers
//!   must validate before using it as a length.
//!
//! Conventions
//! -----------
//! - Horizons are signed day counts (`i64`); the sentinel comparison is
//!   against exactly 0.
//!
//! Downstream usage
//! ----------------
//! - The orchestration layer adjusts the requested horizon once per run
//!   before sizing forecast buffers; the core itself never touches the
//!   case file, only this validated view of it.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the sentinel, the stale-data extension (the
//!   `7 → 10` case), the negative-shrink edge, and table validation.
use crate::renewal::errors::{RenewalError, RenewalResult};
use chrono::NaiveDate;

/// ReportedCases — validated date-indexed confirmed-count series.
///
/// Purpose
/// -------
/// Give the core a minimal, validated view of the reported-case table: the
/// date range and the confirmed counts, nothing else.
///
/// Key behaviors
/// -------------
/// - Validates strict date ascent and finite, non-negative counts at
///   construction.
/// - Exposes the latest report date used by the horizon adjustment.
///
/// Parameters
/// ----------
/// Constructed via [`ReportedCases::new`] with:
/// - `dates`: `Vec<NaiveDate>` — report dates, strictly ascending,
///   non-empty.
/// - `confirm`: `Vec<f64>` — confirmed counts, one per date, finite and
///   ≥ 0.
///
/// Fields
/// ------
/// - `dates`: `Vec<NaiveDate>`
///   Report dates, oldest first.
/// - `confirm`: `Vec<f64>`
///   Confirmed counts aligned to `dates`.
///
/// Invariants
/// ----------
/// - `dates.len() == confirm.len() > 0`.
/// - `dates` strictly ascending; `confirm` finite and non-negative.
///
/// Notes
/// -----
/// - Counts are `f64` because upstream cleaning may produce smoothed or
///   imputed values; the core only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedCases {
    /// Report dates, oldest first, strictly ascending.
    pub dates: Vec<NaiveDate>,
    /// Confirmed counts aligned to `dates`.
    pub confirm: Vec<f64>,
}

impl ReportedCases {
    /// Construct a validated reported-case series.
    ///
    /// Parameters
    /// ----------
    /// - `dates`: `Vec<NaiveDate>`
    ///   Report dates, strictly ascending, non-empty.
    /// - `confirm`: `Vec<f64>`
    ///   Confirmed counts, one per date, finite and ≥ 0.
    ///
    /// Returns
    /// -------
    /// `RenewalResult<ReportedCases>`
    ///   The validated table, or the first invariant violation found.
    ///
    /// Errors
    /// ------
    /// - `RenewalError::EmptyCases` for an empty table.
    /// - `RenewalError::LengthMismatch` when dates and counts differ in
    ///   length.
    /// - `RenewalError::NonAscendingDates` at the first non-increasing
    ///   date.
    /// - `RenewalError::InvalidCaseCount` at the first malformed count.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(dates: Vec<NaiveDate>, confirm: Vec<f64>) -> RenewalResult<Self> {
        if dates.is_empty() {
            return Err(RenewalError::EmptyCases);
        }
        if dates.len() != confirm.len() {
            return Err(RenewalError::LengthMismatch {
                expected: dates.len(),
                actual: confirm.len(),
            });
        }
        for index in 1..dates.len() {
            if dates[index] <= dates[index - 1] {
                return Err(RenewalError::NonAscendingDates { index });
            }
        }
        for (index, &value) in confirm.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(RenewalError::InvalidCaseCount { index, value });
            }
        }
        Ok(ReportedCases { dates, confirm })
    }

    /// Latest observed report date.
    pub fn last_date(&self) -> NaiveDate {
        // Non-empty by construction.
        self.dates[self.dates.len() - 1]
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the table has no rows. Always false for a constructed value;
    /// provided for clippy's len/is_empty convention.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Adjust a requested forecast horizon for data staleness.
///
/// Parameters
/// ----------
/// - `horizon`: `i64`
///   Requested forecast horizon in days. `0` is the "no forecast
///   requested" sentinel and is returned unchanged.
/// - `target_date`: `NaiveDate`
///   Date the estimation run is anchored to (usually "today").
/// - `reported_cases`: `&ReportedCases`
///   Validated case table; only its latest report date is read.
///
/// Returns
/// -------
/// `i64`
///   `horizon + (target_date − last_report_date)` in days, so the forecast
///   reaches exactly `target_date + original_horizon` however stale the
///   observed series is. May be negative when `target_date` predates the
///   latest report; callers must validate before use.
///
/// Errors
/// ------
/// - None; the table is validated at construction.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use chrono::NaiveDate;
/// # use epi_renewal::renewal::horizon::{update_horizon, ReportedCases};
/// let d = |day| NaiveDate::from_ymd_opt(2020, 4, day).unwrap();
/// let cases = ReportedCases::new(vec![d(1), d(2), d(3)], vec![10.0, 12.0, 11.0])?;
/// assert_eq!(update_horizon(0, d(6), &cases), 0);
/// assert_eq!(update_horizon(7, d(6), &cases), 10);
/// # Ok::<(), epi_renewal::renewal::errors::RenewalError>(())
/// ```
pub fn update_horizon(horizon: i64, target_date: NaiveDate, reported_cases: &ReportedCases) -> i64 {
    if horizon == 0 {
        return 0;
    }
    let gap = (target_date - reported_cases.last_date()).num_days();
    horizon + gap
}
