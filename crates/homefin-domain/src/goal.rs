//! Financial goals: one-time targets and recurring savings plans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub id: Uuid,
    pub name: String,
    /// Target amount for the goal.
    pub amount: f64,
    /// How much has already been set aside.
    #[serde(default)]
    pub current_amount: f64,
    pub direction: GoalDirection,
    pub kind: GoalKind,
}

impl FinancialGoal {
    pub fn one_time(
        name: impl Into<String>,
        amount: f64,
        direction: GoalDirection,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            current_amount: 0.0,
            direction,
            kind: GoalKind::OneTime { date },
        }
    }

    pub fn recurring(
        name: impl Into<String>,
        amount: f64,
        start_date: NaiveDate,
        monthly_contribution: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            current_amount: 0.0,
            direction: GoalDirection::Expense,
            kind: GoalKind::Recurring {
                start_date,
                monthly_contribution,
            },
        }
    }

    pub fn with_current_amount(mut self, current: f64) -> Self {
        self.current_amount = current;
        self
    }

    /// Remaining amount to fund, floored at zero.
    pub fn shortfall(&self) -> f64 {
        (self.amount - self.current_amount).max(0.0)
    }

    pub fn is_funded(&self) -> bool {
        self.shortfall() <= f64::EPSILON
    }
}

impl Identifiable for FinancialGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Sign of a one-time goal's projected cash event.
pub enum GoalDirection {
    Income,
    Expense,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Distinguishes single-date targets from periodic savings plans.
pub enum GoalKind {
    OneTime {
        date: NaiveDate,
    },
    Recurring {
        start_date: NaiveDate,
        monthly_contribution: f64,
    },
}
