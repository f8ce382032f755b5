//! Domain models for recorded transactions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<Uuid>,
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub date: NaiveDate,
    /// How a loan repayment split into principal, when the user recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_component: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_component: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn new(
        account_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            to_account_id: None,
            kind,
            amount,
            currency: currency.into(),
            date,
            principal_component: None,
            interest_component: None,
            notes: None,
        }
    }

    pub fn transfer(
        from: Uuid,
        to: Uuid,
        amount: f64,
        currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let mut txn = Self::new(from, TransactionKind::Transfer, amount, currency, date);
        txn.to_account_id = Some(to);
        txn
    }

    pub fn with_split(mut self, principal: f64, interest: f64) -> Self {
        self.principal_component = Some(principal);
        self.interest_component = Some(interest);
        self
    }

    /// True when this transaction moves value between the two accounts,
    /// in either direction.
    pub fn is_transfer_between(&self, a: Uuid, b: Uuid) -> bool {
        if self.kind != TransactionKind::Transfer {
            return false;
        }
        let Some(to) = self.to_account_id else {
            return false;
        };
        (self.account_id == a && to == b) || (self.account_id == b && to == a)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Direction of a cash movement relative to its account.
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
            TransactionKind::Transfer => "Transfer",
        };
        f.write_str(label)
    }
}
