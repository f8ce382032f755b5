//! Shared traits and clamped calendar arithmetic.

use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in a profile.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Shifts `date` by a number of months, clamping the day-of-month to the
/// length of the target month. A 31st-of-month date shifted into February
/// lands on the 28th (29th in leap years) instead of rolling over.
pub fn shift_month_clamped(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

/// Shifts `date` by a number of years with the same day clamping
/// (Feb 29 maps to Feb 28 in non-leap targets).
pub fn shift_year_clamped(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let month = date.month();
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Returns the number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// Replaces the day-of-month, clamping to the month's actual length.
pub fn with_day_clamped(date: NaiveDate, day: u32) -> NaiveDate {
    let clamped = day.max(1).min(days_in_month(date.year(), date.month()));
    date.with_day(clamped).unwrap_or(date)
}
