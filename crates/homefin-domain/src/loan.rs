//! Computed loan schedule rows and user-supplied payment overrides.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of an amortization schedule. Schedules are recomputed from scratch
/// on every call and never persisted; only override maps are stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledPayment {
    /// 1-based index into the schedule.
    pub payment_number: u32,
    pub date: NaiveDate,
    pub total_payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub outstanding_balance: f64,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Upcoming,
    Paid,
    Overdue,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Upcoming => "Upcoming",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

/// Sparse user correction for a single schedule row. Overridden fields take
/// precedence over computed values for that index only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,
}

impl PaymentOverride {
    pub fn is_empty(&self) -> bool {
        self.total_payment.is_none() && self.principal.is_none() && self.interest.is_none()
    }
}
