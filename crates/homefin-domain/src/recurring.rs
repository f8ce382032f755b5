//! Recurring transaction templates and occurrence projection.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{shift_month_clamped, shift_year_clamped, with_day_clamped, Identifiable};
use crate::transaction::TransactionKind;

/// Upper bound on projected occurrences per template. Ten years of daily
/// occurrences stays well under this.
pub const MAX_OCCURRENCES: usize = 8192;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Cadence unit for a recurring transaction.
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

/// Template describing a repeating cash movement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringTransaction {
    pub id: Uuid,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<Uuid>,
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub frequency_interval: u32,
    pub start_date: NaiveDate,
    pub next_due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Pins monthly occurrences to this day, clamped to the month's length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_of_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_interval() -> u32 {
    1
}

impl RecurringTransaction {
    pub fn new(
        account_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        currency: impl Into<String>,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            to_account_id: None,
            kind,
            amount,
            currency: currency.into(),
            frequency,
            frequency_interval: 1,
            start_date,
            next_due_date: start_date,
            end_date: None,
            due_date_of_month: None,
            notes: None,
        }
    }

    pub fn with_to_account(mut self, account_id: Uuid) -> Self {
        self.to_account_id = Some(account_id);
        self
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.frequency_interval = interval.max(1);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_due_day(mut self, day: u32) -> Self {
        self.due_date_of_month = Some(day);
        if self.frequency == Frequency::Monthly {
            self.next_due_date = with_day_clamped(self.next_due_date, day);
        }
        self
    }

    /// One frequency step from `from`. Monthly and yearly steps clamp the
    /// day-of-month to the target month's length; a pinned due day re-targets
    /// monthly occurrences after stepping.
    pub fn advance(&self, from: NaiveDate) -> NaiveDate {
        let step = self.frequency_interval.max(1);
        match self.frequency {
            Frequency::Daily => from + Duration::days(step as i64),
            Frequency::Weekly => from + Duration::weeks(step as i64),
            Frequency::Monthly => {
                let next = shift_month_clamped(from, step as i32);
                match self.due_date_of_month {
                    Some(day) => with_day_clamped(next, day),
                    None => next,
                }
            }
            Frequency::Yearly => shift_year_clamped(from, step as i32),
        }
    }

    /// Occurrence dates within `[from, to]`, starting from `next_due_date`.
    /// An overdue template is fast-forwarded to `from` without emitting the
    /// skipped occurrences. Respects `end_date` and the occurrence guard.
    pub fn occurrences_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut occurrences = Vec::new();
        if to < from {
            return occurrences;
        }
        let limit = match self.end_date {
            Some(end) if end < to => end,
            _ => to,
        };
        let mut current = self.next_due_date;
        let mut guard = 0usize;
        while current < from && guard < MAX_OCCURRENCES {
            current = self.advance(current);
            guard += 1;
        }
        while current <= limit && guard < MAX_OCCURRENCES {
            occurrences.push(current);
            current = self.advance(current);
            guard += 1;
        }
        occurrences
    }
}

impl Identifiable for RecurringTransaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monthly_template(start: NaiveDate) -> RecurringTransaction {
        RecurringTransaction::new(
            Uuid::new_v4(),
            TransactionKind::Expense,
            100.0,
            "EUR",
            Frequency::Monthly,
            start,
        )
    }

    #[test]
    fn monthly_advance_clamps_to_february() {
        let template = monthly_template(date(2025, 1, 31));
        assert_eq!(template.advance(date(2025, 1, 31)), date(2025, 2, 28));

        let leap = monthly_template(date(2024, 1, 31));
        assert_eq!(leap.advance(date(2024, 1, 31)), date(2024, 2, 29));
    }

    #[test]
    fn pinned_due_day_recovers_after_short_month() {
        let template = monthly_template(date(2025, 1, 31)).with_due_day(31);
        let feb = template.advance(date(2025, 1, 31));
        assert_eq!(feb, date(2025, 2, 28));
        // Without the pin the clamped day would drift; with it March returns to the 31st.
        assert_eq!(template.advance(feb), date(2025, 3, 31));
    }

    #[test]
    fn occurrences_fast_forward_overdue_templates() {
        let mut template = monthly_template(date(2025, 1, 15));
        template.next_due_date = date(2025, 1, 15);
        let occurrences = template.occurrences_between(date(2025, 4, 1), date(2025, 6, 30));
        assert_eq!(
            occurrences,
            vec![date(2025, 4, 15), date(2025, 5, 15), date(2025, 6, 15)]
        );
    }

    #[test]
    fn occurrences_respect_end_date() {
        let template = monthly_template(date(2025, 1, 1)).with_end_date(date(2025, 3, 1));
        let occurrences = template.occurrences_between(date(2025, 1, 1), date(2025, 12, 31));
        assert_eq!(
            occurrences,
            vec![date(2025, 1, 1), date(2025, 2, 1), date(2025, 3, 1)]
        );
    }

    #[test]
    fn weekly_interval_steps_by_weeks() {
        let mut template = monthly_template(date(2025, 1, 6));
        template.frequency = Frequency::Weekly;
        template.frequency_interval = 2;
        assert_eq!(template.advance(date(2025, 1, 6)), date(2025, 1, 20));
    }
}
