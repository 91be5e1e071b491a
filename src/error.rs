//! Error and warning types for budgetlens
//!
//! Hard failures are rare in this crate: only a structurally invalid input
//! collection aborts a computation. Everything else is recovered locally and
//! surfaced as a [`Warning`] next to the successful results.

use std::fmt;

use thiserror::Error;

use crate::models::{BudgetId, CategoryId, TransactionId};

/// The error type for budgetlens operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LensError {
    /// A required collection argument was not a well-formed sequence
    #[error("invalid input: `{field}` is not a sequence")]
    InvalidInput { field: &'static str },
}

impl LensError {
    /// Create an invalid-input error for the named argument
    pub fn invalid_input(field: &'static str) -> Self {
        Self::InvalidInput { field }
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Generic notice suitable for end users. Never exposes field names,
    /// identifiers, or other internals.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Unable to load budget data. Please try refreshing.",
        }
    }
}

/// Result type alias for budgetlens operations
pub type LensResult<T> = Result<T, LensError>;

/// A non-fatal condition recorded while decoding input or computing a report
///
/// Warnings never abort processing: the offending item is skipped and every
/// other item is handled normally. Callers inspect the warning list to decide
/// whether anything is worth telling the user about.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A budget references a category the catalog does not know
    CategoryNotFound {
        budget_id: BudgetId,
        category_id: CategoryId,
    },

    /// A budget record could not be decoded or failed validation
    MalformedBudget { index: usize, reason: String },

    /// A transaction record lacked a usable amount, date, category, or kind
    MalformedTransaction {
        index: usize,
        id: Option<TransactionId>,
        reason: String,
    },
}

impl Warning {
    /// Check if this warning reports an unresolvable category
    pub fn is_category_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound { .. })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryNotFound {
                budget_id,
                category_id,
            } => write!(
                f,
                "budget {} references unknown category {}",
                budget_id, category_id
            ),
            Self::MalformedBudget { index, reason } => {
                write!(f, "budget at index {} skipped: {}", index, reason)
            }
            Self::MalformedTransaction {
                index,
                id: Some(id),
                reason,
            } => write!(f, "transaction {} (index {}) skipped: {}", id, index, reason),
            Self::MalformedTransaction {
                index,
                id: None,
                reason,
            } => write!(f, "transaction at index {} skipped: {}", index, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = LensError::invalid_input("budgets");
        assert_eq!(err.to_string(), "invalid input: `budgets` is not a sequence");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_user_message_is_generic() {
        let err = LensError::invalid_input("transactions");
        let message = err.user_message();
        assert!(!message.contains("transactions"));
        assert!(!message.contains('`'));
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::MalformedBudget {
            index: 3,
            reason: "missing amount".into(),
        };
        assert_eq!(
            warning.to_string(),
            "budget at index 3 skipped: missing amount"
        );
        assert!(!warning.is_category_not_found());
    }

    #[test]
    fn test_category_not_found_display() {
        let budget_id = BudgetId::new();
        let category_id = CategoryId::new();
        let warning = Warning::CategoryNotFound {
            budget_id,
            category_id,
        };
        assert!(warning.is_category_not_found());
        assert!(warning.to_string().contains(&budget_id.to_string()));
        assert!(warning.to_string().contains(&category_id.to_string()));
    }
}
