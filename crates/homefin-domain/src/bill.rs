//! One-off bill payments.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillPayment {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub currency: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BillPayment {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            currency: currency.into(),
            due_date,
            status: BillStatus::Unpaid,
            account_id: None,
            notes: None,
        }
    }

    pub fn with_account(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn mark_paid(&mut self) {
        self.status = BillStatus::Paid;
    }

    /// Flips an unpaid bill to overdue once its due date has passed.
    pub fn refresh_status(&mut self, reference: NaiveDate) {
        if self.status == BillStatus::Unpaid && self.due_date < reference {
            self.status = BillStatus::Overdue;
        }
    }
}

impl Identifiable for BillPayment {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Paid,
    #[default]
    Unpaid,
    Overdue,
}

impl BillStatus {
    pub fn is_outstanding(self) -> bool {
        matches!(self, BillStatus::Unpaid | BillStatus::Overdue)
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillStatus::Paid => "Paid",
            BillStatus::Unpaid => "Unpaid",
            BillStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn refresh_marks_past_due_bills_overdue() {
        let mut bill = BillPayment::new("Electricity", 80.0, "EUR", date(2025, 2, 1));
        bill.refresh_status(date(2025, 2, 15));
        assert_eq!(bill.status, BillStatus::Overdue);
        assert!(bill.status.is_outstanding());
    }

    #[test]
    fn refresh_leaves_paid_bills_alone() {
        let mut bill = BillPayment::new("Water", 30.0, "EUR", date(2025, 2, 1));
        bill.mark_paid();
        bill.refresh_status(date(2025, 2, 15));
        assert_eq!(bill.status, BillStatus::Paid);
        assert!(!bill.status.is_outstanding());
    }
}
