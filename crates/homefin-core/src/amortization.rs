//! Amortization schedule generation for fixed-duration loans.
//!
//! Schedules are recomputed from scratch on every call: the closed-form
//! annuity table, a reconciliation pass against real repayment transfers, and
//! the user's sparse override map folded in per row.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use homefin_domain::{
    shift_month_clamped, Account, PaymentOverride, PaymentStatus, ScheduledPayment, Transaction,
};

pub struct AmortizationEngine;

impl AmortizationEngine {
    /// Computes the full payment schedule for a loan or lending account.
    ///
    /// Returns an empty schedule unless the account is loan-like and carries
    /// complete loan terms (a rate of zero is a valid rate). `reference` is
    /// the date used to classify rows as overdue or upcoming.
    pub fn generate_schedule(
        account: &Account,
        transactions: &[Transaction],
        overrides: &BTreeMap<u32, PaymentOverride>,
        reference: NaiveDate,
    ) -> Vec<ScheduledPayment> {
        if !account.is_loan_like() {
            return Vec::new();
        }
        let Some(terms) = account.loan_terms() else {
            return Vec::new();
        };
        tracing::debug!(
            account = %account.id,
            months = terms.duration_months,
            "generating amortization schedule"
        );

        let monthly_rate = terms.annual_rate / 100.0 / 12.0;
        let base_payment = annuity_payment(terms.principal, monthly_rate, terms.duration_months);
        let real_payments = collect_real_payments(account, transactions);

        let mut outstanding = terms.principal;
        let mut schedule = Vec::with_capacity(terms.duration_months as usize);
        for number in 1..=terms.duration_months {
            let date = shift_month_clamped(terms.start_date, number as i32);
            let mut interest = outstanding * monthly_rate;
            // The last row absorbs rounding drift by retiring the balance.
            let mut total = if number == terms.duration_months {
                outstanding + interest
            } else {
                base_payment
            };
            let mut principal = total - interest;

            if let Some(correction) = overrides.get(&number) {
                if let Some(value) = correction.total_payment {
                    total = value;
                }
                if let Some(value) = correction.principal {
                    principal = value;
                }
                if let Some(value) = correction.interest {
                    interest = value;
                }
                // A bad override must not drive the principal negative.
                if interest > total {
                    principal = 0.0;
                    interest = total;
                }
            }
            // Never collect more than what retires the loan.
            if outstanding + interest < total {
                total = outstanding + interest;
                principal = outstanding;
            }

            let month_key = (date.year(), date.month());
            let (status, transaction_id) = match real_payments.get(&month_key) {
                Some(txn) => {
                    if let Some(split) = txn.principal_component {
                        principal = split;
                    }
                    if let Some(split) = txn.interest_component {
                        interest = split;
                    }
                    if txn.principal_component.is_some() || txn.interest_component.is_some() {
                        total = principal + interest;
                    }
                    (PaymentStatus::Paid, Some(txn.id))
                }
                None if date < reference => (PaymentStatus::Overdue, None),
                None => (PaymentStatus::Upcoming, None),
            };

            outstanding = (outstanding - principal).max(0.0);
            schedule.push(ScheduledPayment {
                payment_number: number,
                date,
                total_payment: total,
                principal,
                interest,
                outstanding_balance: outstanding,
                status,
                transaction_id,
            });
        }
        schedule
    }
}

/// Standard annuity payment `P·r(1+r)^n / ((1+r)^n − 1)`; straight-line when
/// the rate is zero.
fn annuity_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }
    let factor = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * factor / (factor - 1.0)
}

/// Real repayments: transfers between the loan account and its linked
/// account, deduplicated to at most one per calendar month. The first
/// transaction found for a month wins.
fn collect_real_payments<'a>(
    account: &Account,
    transactions: &'a [Transaction],
) -> BTreeMap<(i32, u32), &'a Transaction> {
    let mut by_month = BTreeMap::new();
    let Some(linked) = account.linked_account_id else {
        return by_month;
    };
    for txn in transactions {
        if !txn.is_transfer_between(account.id, linked) {
            continue;
        }
        by_month.entry((txn.date.year(), txn.date.month())).or_insert(txn);
    }
    by_month
}
