//! Forecast output points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::shift_year_clamped;

/// Default forecast horizon in years when the caller does not supply one.
pub const DEFAULT_FORECAST_YEARS: u32 = 10;

/// One day of the projected liquid balance, in EUR.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// End date of the default forecast horizon measured from `reference`.
pub fn default_horizon(reference: NaiveDate) -> NaiveDate {
    shift_year_clamped(reference, DEFAULT_FORECAST_YEARS as i32)
}
