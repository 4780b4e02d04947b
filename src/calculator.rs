//! Due-date arithmetic for bonuses and promotions.
//!
//! Every function here is pure: callers pass the records and `today`
//! explicitly, nothing reads the clock or touches storage.

use chrono::{Months, NaiveDate};

use crate::model::{
    appreciation_letter::AppreciationLetter,
    due_status::{DueSeverity, DueStatus},
    employee::Employee,
    job_grade::JobGrade,
    penalty::Penalty,
};

/// Months between two bonuses before any adjustment.
pub const BONUS_PERIOD_MONTHS: u32 = 12;

/// A due date at most this many days ahead counts as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// Shift `date` by a signed number of calendar months.
///
/// When the target month is shorter the day is clamped to its last day
/// (Jan 31 + 1 month = Feb 28/29). Returns `None` outside chrono's range.
pub fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let span = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(span)
    } else {
        date.checked_sub_months(span)
    }
}

pub fn total_advanced_months(employee_id: &str, letters: &[AppreciationLetter]) -> i64 {
    letters
        .iter()
        .filter(|letter| letter.employee_id == employee_id)
        .map(|letter| i64::from(letter.months_advanced))
        .sum()
}

pub fn total_delayed_months(employee_id: &str, penalties: &[Penalty]) -> i64 {
    penalties
        .iter()
        .filter(|penalty| penalty.employee_id == employee_id)
        .map(|penalty| i64::from(penalty.months_delayed))
        .sum()
}

/// Net adjustment in months: delays push the date back, letters pull it forward.
fn net_adjustment(employee_id: &str, letters: &[AppreciationLetter], penalties: &[Penalty]) -> i64 {
    total_delayed_months(employee_id, penalties) - total_advanced_months(employee_id, letters)
}

/// Base period first, then the adjustment, as two separate month steps.
fn adjusted_due_date(
    last: NaiveDate,
    period_months: u32,
    employee_id: &str,
    letters: &[AppreciationLetter],
    penalties: &[Penalty],
) -> Option<NaiveDate> {
    let base = add_months(last, i64::from(period_months))?;
    add_months(base, net_adjustment(employee_id, letters, penalties))
}

pub fn next_bonus_date(
    employee: &Employee,
    letters: &[AppreciationLetter],
    penalties: &[Penalty],
) -> Option<NaiveDate> {
    let last = employee.last_bonus_date?;
    adjusted_due_date(last, BONUS_PERIOD_MONTHS, &employee.id, letters, penalties)
}

/// Promotion due date from the grade's cycle length.
///
/// Reuses the same advanced/delayed totals as the bonus; letters and
/// penalties are not split by what they apply to.
pub fn next_promotion_date(
    employee: &Employee,
    letters: &[AppreciationLetter],
    penalties: &[Penalty],
) -> Option<NaiveDate> {
    let last = employee.last_promotion_date?;
    let period = JobGrade::promotion_months_for(&employee.job_grade);
    adjusted_due_date(last, period, &employee.id, letters, penalties)
}

/// Classify `date` against `today`. Used for both bonus and promotion dates.
pub fn due_status(date: Option<NaiveDate>, today: NaiveDate) -> DueStatus {
    let Some(date) = date else {
        return DueStatus::new(DueSeverity::Unspecified, None);
    };

    let diff = date.signed_duration_since(today).num_days();
    let severity = if diff <= 0 {
        DueSeverity::Overdue
    } else if diff <= UPCOMING_WINDOW_DAYS {
        DueSeverity::Upcoming
    } else {
        DueSeverity::Future
    };

    DueStatus::new(severity, Some(diff))
}
