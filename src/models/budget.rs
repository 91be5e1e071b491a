//! Budget model
//!
//! A budget is a spending ceiling for one category, recurring monthly or
//! yearly. Budgets reference categories by id; resolution against a catalog
//! happens at report time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId, UserId};
use super::money::Money;
use super::period::PeriodKind;

/// A spending ceiling for a category over a recurring period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this ceiling applies to
    pub category_id: CategoryId,

    /// The ceiling amount
    pub amount: Money,

    /// How often the ceiling recurs
    pub period: PeriodKind,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,

    /// Owning user, if the surrounding app tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
}

impl Budget {
    /// Create a new budget
    pub fn new(category_id: CategoryId, amount: Money, period: PeriodKind) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category_id,
            amount,
            period,
            created_at: now,
            updated_at: now,
            owner_id: None,
        }
    }

    /// Set the ceiling amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Change the recurrence
    pub fn set_period(&mut self, period: PeriodKind) {
        self.period = period;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ceiling {} ({})", self.id, self.amount, self.period)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
