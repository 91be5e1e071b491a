//! Budget alerts
//!
//! Scans a progress report for budgets whose consumption crossed one of the
//! notification thresholds and materializes alert records the surrounding
//! app can queue, persist, and mark as seen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::budget_progress::{BudgetProgress, BudgetProgressReport};
use crate::models::{AlertId, BudgetId, CategoryId, Money};

/// Escalation tier of a budget alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Consumption reached 80% of the ceiling
    Approaching,
    /// Consumption reached 90% of the ceiling
    Critical,
    /// The ceiling is spent
    Exceeded,
}

impl AlertLevel {
    /// Threshold for [`AlertLevel::Approaching`]
    pub const APPROACHING_AT: f64 = 80.0;

    /// Threshold for [`AlertLevel::Critical`]
    pub const CRITICAL_AT: f64 = 90.0;

    /// Threshold for [`AlertLevel::Exceeded`]
    pub const EXCEEDED_AT: f64 = 100.0;

    /// The highest tier the percentage qualifies for, if any
    pub fn for_percentage(percentage: f64) -> Option<Self> {
        if percentage >= Self::EXCEEDED_AT {
            Some(Self::Exceeded)
        } else if percentage >= Self::CRITICAL_AT {
            Some(Self::Critical)
        } else if percentage >= Self::APPROACHING_AT {
            Some(Self::Approaching)
        } else {
            None
        }
    }

    /// Short notice text for this tier
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Approaching => "Getting close!",
            Self::Critical => "Almost maxed!",
            Self::Exceeded => "Over budget!",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approaching => write!(f, "approaching"),
            Self::Critical => write!(f, "critical"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// A budget threshold notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    /// Unique identifier
    pub id: AlertId,

    /// The budget that crossed a threshold
    pub budget_id: BudgetId,

    /// The budget's category
    pub category_id: CategoryId,

    /// Category display name, denormalized for rendering
    pub category_name: String,

    /// The ceiling at alert time
    pub budget_amount: Money,

    /// The spending at alert time
    pub spent_amount: Money,

    /// Percentage consumed at alert time
    pub percentage: f64,

    /// Escalation tier
    pub level: AlertLevel,

    /// Pre-built notification text
    pub message: String,

    /// When the alert was raised
    pub date: DateTime<Utc>,

    /// Whether the user has dismissed the alert
    pub seen: bool,
}

impl BudgetAlert {
    /// Build an alert from a progress row, if it crosses any threshold
    pub fn from_progress(entry: &BudgetProgress, at: DateTime<Utc>) -> Option<Self> {
        let level = AlertLevel::for_percentage(entry.percentage)?;
        Some(Self {
            id: AlertId::new(),
            budget_id: entry.budget_id,
            category_id: entry.category.id,
            category_name: entry.category.name.clone(),
            budget_amount: entry.amount,
            spent_amount: entry.total_spent,
            percentage: entry.percentage,
            level,
            message: format!("{}: {}", entry.category.name, level.notice()),
            date: at,
            seen: false,
        })
    }

    /// Scan a report and build one alert per qualifying row
    pub fn scan(report: &BudgetProgressReport, at: DateTime<Utc>) -> Vec<Self> {
        report
            .entries
            .iter()
            .filter_map(|entry| Self::from_progress(entry, at))
            .collect()
    }

    /// Mark the alert as seen
    pub fn mark_seen(&mut self) {
        self.seen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryCatalog;
    use crate::models::{Budget, PeriodKind, Transaction};

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_threshold_ladder() {
        assert_eq!(AlertLevel::for_percentage(0.0), None);
        assert_eq!(AlertLevel::for_percentage(79.9), None);
        assert_eq!(AlertLevel::for_percentage(80.0), Some(AlertLevel::Approaching));
        assert_eq!(AlertLevel::for_percentage(89.9), Some(AlertLevel::Approaching));
        assert_eq!(AlertLevel::for_percentage(90.0), Some(AlertLevel::Critical));
        assert_eq!(AlertLevel::for_percentage(100.0), Some(AlertLevel::Exceeded));
        assert_eq!(AlertLevel::for_percentage(250.0), Some(AlertLevel::Exceeded));
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(AlertLevel::Approaching < AlertLevel::Critical);
        assert!(AlertLevel::Critical < AlertLevel::Exceeded);
        assert_eq!(AlertLevel::Exceeded.to_string(), "exceeded");
    }

    #[test]
    fn test_scan_builds_alerts_for_qualifying_rows() {
        let catalog = CategoryCatalog::default_expense();
        let groceries = catalog.find_by_name("Groceries").unwrap().clone();
        let dining = catalog.find_by_name("Dining Out").unwrap().clone();

        let calm = Budget::new(groceries.id, Money::from_cents(50000), PeriodKind::Monthly);
        let busted = Budget::new(dining.id, Money::from_cents(10000), PeriodKind::Monthly);
        let transactions = vec![
            Transaction::expense(
                Money::from_cents(5000),
                "shop",
                groceries.clone(),
                instant("2024-03-05T10:00:00Z"),
            ),
            Transaction::expense(
                Money::from_cents(15000),
                "feast",
                dining.clone(),
                instant("2024-03-06T20:00:00Z"),
            ),
        ];

        let report = BudgetProgressReport::generate(
            &[calm, busted],
            &transactions,
            &catalog,
            instant("2024-03-15T00:00:00Z"),
        );
        let alerts = BudgetAlert::scan(&report, instant("2024-03-15T00:00:00Z"));

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.level, AlertLevel::Exceeded);
        assert_eq!(alert.category_name, "Dining Out");
        assert_eq!(alert.spent_amount.cents(), 15000);
        assert_eq!(alert.message, "Dining Out: Over budget!");
        assert!(!alert.seen);
    }

    #[test]
    fn test_mark_seen() {
        let catalog = CategoryCatalog::default_expense();
        let groceries = catalog.find_by_name("Groceries").unwrap().clone();
        let budget = Budget::new(groceries.id, Money::from_cents(10000), PeriodKind::Monthly);
        let transactions = vec![Transaction::expense(
            Money::from_cents(9500),
            "shop",
            groceries.clone(),
            instant("2024-03-05T10:00:00Z"),
        )];

        let report = BudgetProgressReport::generate(
            &[budget],
            &transactions,
            &catalog,
            instant("2024-03-15T00:00:00Z"),
        );
        let mut alerts = BudgetAlert::scan(&report, instant("2024-03-15T00:00:00Z"));

        assert_eq!(alerts[0].level, AlertLevel::Critical);
        alerts[0].mark_seen();
        assert!(alerts[0].seen);
    }

    #[test]
    fn test_serde_roundtrip() {
        let catalog = CategoryCatalog::default_expense();
        let groceries = catalog.find_by_name("Groceries").unwrap().clone();
        let budget = Budget::new(groceries.id, Money::from_cents(10000), PeriodKind::Monthly);
        let transactions = vec![Transaction::expense(
            Money::from_cents(12000),
            "shop",
            groceries.clone(),
            instant("2024-03-05T10:00:00Z"),
        )];
        let report = BudgetProgressReport::generate(
            &[budget],
            &transactions,
            &catalog,
            instant("2024-03-15T00:00:00Z"),
        );
        let alerts = BudgetAlert::scan(&report, instant("2024-03-15T00:00:00Z"));

        let json = serde_json::to_string(&alerts[0]).unwrap();
        assert!(json.contains("\"categoryName\":\"Groceries\""));
        let back: BudgetAlert = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alerts[0]);
    }
}
