//! The profile aggregate: the whole of a user's financial data, persisted as
//! one document with dirty tracking.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    account::Account, bill::BillPayment, goal::FinancialGoal, loan::PaymentOverride,
    recurring::RecurringTransaction, transaction::Transaction,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub recurring_transactions: Vec<RecurringTransaction>,
    #[serde(default)]
    pub goals: Vec<FinancialGoal>,
    #[serde(default)]
    pub bills: Vec<BillPayment>,
    /// Per loan account: payment number to user correction. Only overrides
    /// are persisted; schedules are recomputed on demand.
    #[serde(default)]
    pub payment_overrides: BTreeMap<Uuid, BTreeMap<u32, PaymentOverride>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    dirty: bool,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            accounts: Vec::new(),
            transactions: Vec::new(),
            recurring_transactions: Vec::new(),
            goals: Vec::new(),
            bills: Vec::new(),
            payment_overrides: BTreeMap::new(),
            created_at: now,
            updated_at: now,
            dirty: false,
        }
    }

    /// Records a modification: bumps `updated_at` and flags the document for
    /// the next flush.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// Removes the account along with its override map. Returns whether an
    /// account was removed.
    pub fn remove_account(&mut self, id: Uuid) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        let removed = self.accounts.len() != before;
        if removed {
            self.payment_overrides.remove(&id);
            self.touch();
        }
        removed
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn add_recurring_transaction(&mut self, template: RecurringTransaction) -> Uuid {
        let id = template.id;
        self.recurring_transactions.push(template);
        self.touch();
        id
    }

    pub fn add_goal(&mut self, goal: FinancialGoal) -> Uuid {
        let id = goal.id;
        self.goals.push(goal);
        self.touch();
        id
    }

    pub fn add_bill(&mut self, bill: BillPayment) -> Uuid {
        let id = bill.id;
        self.bills.push(bill);
        self.touch();
        id
    }

    /// Stores or clears a single payment override. Empty overrides are
    /// dropped so the sparse map stays sparse.
    pub fn set_payment_override(
        &mut self,
        account_id: Uuid,
        payment_number: u32,
        value: PaymentOverride,
    ) {
        let map = self.payment_overrides.entry(account_id).or_default();
        if value.is_empty() {
            map.remove(&payment_number);
        } else {
            map.insert(payment_number, value);
        }
        if map.is_empty() {
            self.payment_overrides.remove(&account_id);
        }
        self.touch();
    }

    pub fn overrides_for(&self, account_id: Uuid) -> Option<&BTreeMap<u32, PaymentOverride>> {
        self.payment_overrides.get(&account_id)
    }

    /// Re-derives bill statuses relative to `reference`.
    pub fn refresh_bill_statuses(&mut self, reference: NaiveDate) {
        let mut changed = false;
        for bill in &mut self.bills {
            let before = bill.status;
            bill.refresh_status(reference);
            changed |= bill.status != before;
        }
        if changed {
            self.touch();
        }
    }
}
