//! Budget progress report
//!
//! The heart of the crate: fold a snapshot of budgets and transactions into
//! one progress row per budget, showing what was spent in the budget's
//! current period, what remains, and the percentage consumed. The
//! computation is a pure single pass over its inputs; calling it twice with
//! the same data and reference instant yields an equal report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::catalog::CategoryCatalog;
use crate::error::Warning;
use crate::models::{Budget, BudgetId, BudgetPeriod, Category, Money, Transaction};
use crate::snapshot::Snapshot;

/// Progress of one budget within its current period
///
/// Ephemeral: computed fresh from a `(budgets, transactions)` snapshot and
/// discarded after use. `percentage` and `remaining` are unclamped; capping a
/// progress bar at 100% is the presentation layer's call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    /// The budget this row describes
    pub budget_id: BudgetId,

    /// The budget's category, resolved against the catalog
    pub category: Category,

    /// The concrete period the row covers (e.g. "2024-03")
    pub period: BudgetPeriod,

    /// The ceiling amount
    pub amount: Money,

    /// Expenses in this category within the period
    pub total_spent: Money,

    /// Percent of the ceiling consumed; 0 when the ceiling is not positive
    pub percentage: f64,

    /// Ceiling minus spent; negative when over budget
    pub remaining: Money,
}

impl BudgetProgress {
    /// Check if spending exceeded the ceiling
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Per-budget progress rows plus the warnings gathered along the way
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgressReport {
    /// The instant the period intervals were derived from
    pub reference: DateTime<Utc>,

    /// One row per resolvable budget, in input order
    pub entries: Vec<BudgetProgress>,

    /// One entry per skipped budget or transaction
    pub warnings: Vec<Warning>,
}

impl BudgetProgressReport {
    /// Compute progress for every budget against the given transactions
    ///
    /// Budgets referencing a category the catalog does not know are omitted
    /// from the result and reported in `warnings`; they never abort the rest
    /// of the computation. An empty budget list produces an empty report.
    pub fn generate(
        budgets: &[Budget],
        transactions: &[Transaction],
        catalog: &CategoryCatalog,
        reference: DateTime<Utc>,
    ) -> Self {
        let mut entries = Vec::with_capacity(budgets.len());
        let mut warnings = Vec::new();

        for budget in budgets {
            let category = match catalog.lookup(budget.category_id) {
                Some(category) => category,
                None => {
                    warn!(
                        budget = %budget.id,
                        category = %budget.category_id,
                        "skipping budget with unknown category"
                    );
                    warnings.push(Warning::CategoryNotFound {
                        budget_id: budget.id,
                        category_id: budget.category_id,
                    });
                    continue;
                }
            };

            let period = BudgetPeriod::containing(budget.period, reference);
            let total_spent: Money = transactions
                .iter()
                .filter(|transaction| transaction.counts_against(budget.category_id, &period))
                .map(|transaction| transaction.amount)
                .sum();

            let percentage = if budget.amount.is_positive() {
                total_spent.cents() as f64 / budget.amount.cents() as f64 * 100.0
            } else {
                0.0
            };

            entries.push(BudgetProgress {
                budget_id: budget.id,
                category: category.clone(),
                period,
                amount: budget.amount,
                total_spent,
                percentage,
                remaining: budget.amount - total_spent,
            });
        }

        Self {
            reference,
            entries,
            warnings,
        }
    }

    /// Compute progress from a decoded [`Snapshot`], carrying its decode
    /// warnings through to the report
    pub fn from_snapshot(
        snapshot: &Snapshot,
        catalog: &CategoryCatalog,
        reference: DateTime<Utc>,
    ) -> Self {
        let mut report =
            Self::generate(&snapshot.budgets, &snapshot.transactions, catalog, reference);
        let mut warnings = snapshot.warnings.clone();
        warnings.append(&mut report.warnings);
        report.warnings = warnings;
        report
    }

    /// Check if the report has no rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of budgets that exceeded their ceiling
    pub fn over_budget_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_over_budget()).count()
    }

    /// Rows whose spending exceeded the ceiling
    pub fn over_budget_entries(&self) -> Vec<&BudgetProgress> {
        self.entries.iter().filter(|entry| entry.is_over_budget()).collect()
    }

    /// Number of skipped items
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
