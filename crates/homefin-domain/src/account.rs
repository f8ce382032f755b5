//! Domain models for tracked accounts, including loan terms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// Represents a financial account tracked within a profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    pub currency: String,
    #[serde(default)]
    pub balance: f64,
    /// Counterpart account that loan repayments are drawn from (or lending
    /// repayments arrive into).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_amount: Option<f64>,
    /// Annual interest rate in percent. Zero is a valid rate; only a missing
    /// rate disables schedule generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Account {
    pub fn new(name: impl Into<String>, kind: AccountKind, currency: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            currency: currency.into(),
            balance: 0.0,
            linked_account_id: None,
            principal_amount: None,
            interest_rate: None,
            duration_months: None,
            loan_start_date: None,
            notes: None,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_linked_account(mut self, account_id: Uuid) -> Self {
        self.linked_account_id = Some(account_id);
        self
    }

    pub fn with_loan_terms(
        mut self,
        principal: f64,
        annual_rate: f64,
        duration_months: u32,
        start_date: NaiveDate,
    ) -> Self {
        self.principal_amount = Some(principal);
        self.interest_rate = Some(annual_rate);
        self.duration_months = Some(duration_months);
        self.loan_start_date = Some(start_date);
        self
    }

    pub fn is_loan_like(&self) -> bool {
        matches!(self.kind, AccountKind::Loan | AccountKind::Lending)
    }

    /// Returns the complete loan terms, or `None` when any of the four
    /// required fields is missing. Amortization requires all of them.
    pub fn loan_terms(&self) -> Option<LoanTerms> {
        Some(LoanTerms {
            principal: self.principal_amount?,
            annual_rate: self.interest_rate?,
            duration_months: self.duration_months?,
            start_date: self.loan_start_date?,
        })
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Enumerates the supported account classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Savings,
    Cash,
    Investment,
    Property,
    Vehicle,
    Loan,
    Lending,
    Other,
}

impl AccountKind {
    /// Liquid accounts represent cash available for forecasting.
    pub fn is_liquid(self) -> bool {
        matches!(
            self,
            AccountKind::Checking | AccountKind::Savings | AccountKind::Cash
        )
    }
}

/// Fully specified terms of a fixed-duration loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate: f64,
    pub duration_months: u32,
    pub start_date: NaiveDate,
}
