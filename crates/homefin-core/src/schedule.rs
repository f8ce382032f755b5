//! Upcoming occurrence listings and due-date maintenance for recurring
//! templates.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use homefin_domain::{RecurringTransaction, TransactionKind, MAX_OCCURRENCES};

/// A single projected occurrence of a recurring transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingOccurrence {
    pub recurring_id: Uuid,
    pub account_id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub currency: String,
    pub kind: TransactionKind,
}

pub struct ScheduleService;

impl ScheduleService {
    /// Occurrences across all templates within `horizon_days` of `reference`,
    /// in chronological order.
    pub fn upcoming(
        recurring: &[RecurringTransaction],
        reference: NaiveDate,
        horizon_days: i64,
    ) -> Vec<UpcomingOccurrence> {
        let end = reference + Duration::days(horizon_days.max(0));
        let mut occurrences = Vec::new();
        for template in recurring {
            for date in template.occurrences_between(reference, end) {
                occurrences.push(UpcomingOccurrence {
                    recurring_id: template.id,
                    account_id: template.account_id,
                    date,
                    amount: template.amount,
                    currency: template.currency.clone(),
                    kind: template.kind,
                });
            }
        }
        occurrences.sort_by_key(|occurrence| (occurrence.date, occurrence.recurring_id));
        occurrences
    }

    /// The template's next due date strictly after `reference`, or `None`
    /// when the series has ended. Used to roll `next_due_date` forward after
    /// a posting run.
    pub fn advance_due(template: &RecurringTransaction, reference: NaiveDate) -> Option<NaiveDate> {
        let mut current = template.next_due_date;
        let mut guard = 0usize;
        while current <= reference && guard < MAX_OCCURRENCES {
            current = template.advance(current);
            guard += 1;
        }
        match template.end_date {
            Some(end) if current > end => None,
            _ => Some(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homefin_domain::Frequency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monthly(amount: f64, start: NaiveDate) -> RecurringTransaction {
        RecurringTransaction::new(
            Uuid::new_v4(),
            TransactionKind::Expense,
            amount,
            "EUR",
            Frequency::Monthly,
            start,
        )
    }

    #[test]
    fn upcoming_merges_templates_chronologically() {
        let rent = monthly(900.0, date(2025, 2, 1));
        let gym = monthly(35.0, date(2025, 1, 20));
        let occurrences = ScheduleService::upcoming(&[rent, gym], date(2025, 1, 15), 40);

        let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 1, 20), date(2025, 2, 1), date(2025, 2, 20)]
        );
    }

    #[test]
    fn advance_due_rolls_past_the_reference() {
        let template = monthly(50.0, date(2025, 1, 10));
        assert_eq!(
            ScheduleService::advance_due(&template, date(2025, 3, 15)),
            Some(date(2025, 4, 10))
        );
    }

    #[test]
    fn advance_due_reports_ended_series() {
        let template = monthly(50.0, date(2025, 1, 10)).with_end_date(date(2025, 3, 10));
        assert_eq!(ScheduleService::advance_due(&template, date(2025, 3, 15)), None);
    }
}
