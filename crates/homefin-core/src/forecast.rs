//! Day-by-day liquid balance forecasting.
//!
//! Builds a sparse day-to-delta map from recurring transactions, goals, and
//! outstanding bills, then integrates forward from the current liquid balance
//! one calendar day at a time.

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use homefin_domain::{
    shift_month_clamped, Account, BillPayment, FinancialGoal, ForecastPoint, GoalDirection,
    GoalKind, RecurringTransaction, TransactionKind, MAX_OCCURRENCES,
};

use crate::summary::{convert_to_eur, SummaryService};

pub struct ForecastEngine;

impl ForecastEngine {
    /// Projects the combined liquid balance from `reference` through `end`,
    /// one point per calendar day, in EUR.
    ///
    /// Yields an empty series when there are no liquid accounts or the range
    /// is inverted.
    pub fn balance_forecast(
        accounts: &[Account],
        recurring: &[RecurringTransaction],
        goals: &[FinancialGoal],
        bills: &[BillPayment],
        reference: NaiveDate,
        end: NaiveDate,
    ) -> Vec<ForecastPoint> {
        let liquid: HashSet<Uuid> = accounts
            .iter()
            .filter(|account| account.kind.is_liquid())
            .map(|account| account.id)
            .collect();
        if liquid.is_empty() || end < reference {
            return Vec::new();
        }
        tracing::debug!(
            days = (end - reference).num_days() + 1,
            templates = recurring.len(),
            "projecting liquid balance"
        );

        let mut deltas: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for template in recurring {
            let Some(delta) = liquid_delta(template, &liquid) else {
                continue;
            };
            for date in template.occurrences_between(reference, end) {
                *deltas.entry(date).or_insert(0.0) += delta;
            }
        }
        for goal in goals {
            apply_goal_deltas(goal, reference, end, &mut deltas);
        }
        for bill in bills {
            if bill.status.is_outstanding() && bill.due_date >= reference && bill.due_date <= end {
                *deltas.entry(bill.due_date).or_insert(0.0) -=
                    convert_to_eur(bill.amount, &bill.currency);
            }
        }

        let mut points = Vec::with_capacity(((end - reference).num_days() + 1) as usize);
        let mut value = SummaryService::liquid_balance_eur(accounts);
        let mut day = reference;
        while day <= end {
            if let Some(delta) = deltas.get(&day) {
                value += delta;
            }
            points.push(ForecastPoint { date: day, value });
            day += Duration::days(1);
        }
        points
    }
}

/// EUR contribution of one occurrence of the template to the liquid balance.
/// Transfers contribute only when exactly one side is liquid; internal
/// transfers cancel to zero and yield `None`.
fn liquid_delta(template: &RecurringTransaction, liquid: &HashSet<Uuid>) -> Option<f64> {
    let amount = convert_to_eur(template.amount, &template.currency);
    match template.kind {
        TransactionKind::Transfer => {
            let from_liquid = liquid.contains(&template.account_id);
            let to_liquid = template
                .to_account_id
                .map(|id| liquid.contains(&id))
                .unwrap_or(false);
            match (from_liquid, to_liquid) {
                (true, false) => Some(-amount),
                (false, true) => Some(amount),
                _ => None,
            }
        }
        TransactionKind::Income => liquid.contains(&template.account_id).then_some(amount),
        TransactionKind::Expense => liquid.contains(&template.account_id).then_some(-amount),
    }
}

fn apply_goal_deltas(
    goal: &FinancialGoal,
    reference: NaiveDate,
    end: NaiveDate,
    deltas: &mut BTreeMap<NaiveDate, f64>,
) {
    match &goal.kind {
        GoalKind::OneTime { date } => {
            if *date > reference && *date <= end {
                let amount = match goal.direction {
                    GoalDirection::Income => goal.amount,
                    GoalDirection::Expense => -goal.amount,
                };
                *deltas.entry(*date).or_insert(0.0) += amount;
            }
        }
        GoalKind::Recurring {
            start_date,
            monthly_contribution,
        } => {
            let contribution = *monthly_contribution;
            if contribution <= 0.0 {
                return;
            }
            let mut remaining = goal.shortfall();
            if remaining <= 0.0 {
                return;
            }
            let mut date = *start_date;
            let mut guard = 0usize;
            while date < reference && guard < MAX_OCCURRENCES {
                date = shift_month_clamped(date, 1);
                guard += 1;
            }
            // Contributions are expenses against liquid cash; the final
            // installment is truncated so the goal is funded exactly.
            while date <= end && remaining > 0.0 && guard < MAX_OCCURRENCES {
                let installment = contribution.min(remaining);
                *deltas.entry(date).or_insert(0.0) -= installment;
                remaining -= installment;
                date = shift_month_clamped(date, 1);
                guard += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homefin_domain::{AccountKind, Frequency};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn internal_transfers_cancel_to_zero() {
        let checking = Account::new("Checking", AccountKind::Checking, "EUR");
        let savings = Account::new("Savings", AccountKind::Savings, "EUR");
        let liquid: HashSet<Uuid> = [checking.id, savings.id].into_iter().collect();

        let template = RecurringTransaction::new(
            checking.id,
            TransactionKind::Transfer,
            200.0,
            "EUR",
            Frequency::Monthly,
            date(2025, 1, 1),
        )
        .with_to_account(savings.id);

        assert_eq!(liquid_delta(&template, &liquid), None);
    }

    #[test]
    fn outbound_transfers_reduce_the_liquid_balance() {
        let checking = Account::new("Checking", AccountKind::Checking, "EUR");
        let loan = Account::new("Loan", AccountKind::Loan, "EUR");
        let liquid: HashSet<Uuid> = [checking.id].into_iter().collect();

        let template = RecurringTransaction::new(
            checking.id,
            TransactionKind::Transfer,
            450.0,
            "EUR",
            Frequency::Monthly,
            date(2025, 1, 1),
        )
        .with_to_account(loan.id);

        assert_eq!(liquid_delta(&template, &liquid), Some(-450.0));
    }

    #[test]
    fn recurring_goal_deltas_sum_to_the_shortfall() {
        let goal = FinancialGoal::recurring("Vacation", 1000.0, date(2025, 1, 10), 300.0)
            .with_current_amount(250.0);
        let mut deltas = BTreeMap::new();
        apply_goal_deltas(&goal, date(2025, 1, 1), date(2026, 1, 1), &mut deltas);

        let contributed: f64 = deltas.values().map(|delta| -delta).sum();
        assert!((contributed - goal.shortfall()).abs() < 1e-9);
        // 300 + 300 + 150 covers the 750 shortfall.
        assert_eq!(deltas.len(), 3);
    }

    #[test]
    fn funded_goals_contribute_nothing() {
        let goal = FinancialGoal::recurring("Done", 1000.0, date(2025, 1, 10), 300.0)
            .with_current_amount(1000.0);
        let mut deltas = BTreeMap::new();
        apply_goal_deltas(&goal, date(2025, 1, 1), date(2026, 1, 1), &mut deltas);
        assert!(deltas.is_empty());
    }
}
