//! Transaction model
//!
//! A recorded movement of money. Transactions carry their category as a
//! fully-resolved record (not just an id) and a kind that decides whether
//! they count toward budget consumption: only expenses do.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{CategoryId, TransactionId};
use super::money::Money;
use super::period::BudgetPeriod;

/// What a transaction represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent; counts toward budget consumption
    Expense,
    /// Money received; never counts toward any budget
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount in the account currency (may be zero)
    pub amount: Money,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// The resolved category record
    pub category: Category,

    /// When the transaction happened
    pub date: DateTime<Utc>,

    /// Expense or income
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Optional tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// ISO currency code, when different from the account default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Amount in the original currency, when `currency` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_amount: Option<Money>,

    /// Receipt attachment reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: DateTime<Utc>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            category,
            date,
            kind,
            tags: Vec::new(),
            currency: None,
            original_amount: None,
            receipt: None,
        }
    }

    /// Create an expense
    pub fn expense(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(amount, description, category, date, TransactionKind::Expense)
    }

    /// Create an income entry
    pub fn income(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(amount, description, category, date, TransactionKind::Income)
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this transaction consumes the given category's budget within
    /// the given period
    pub fn counts_against(&self, category_id: CategoryId, period: &BudgetPeriod) -> bool {
        self.is_expense() && self.category.id == category_id && period.contains(self.date)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> Category {
        Category::new("Groceries", "shopping-cart", "emerald")
    }

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_expense_constructor() {
        let txn = Transaction::expense(
            Money::from_cents(12000),
            "Weekly shop",
            groceries(),
            instant("2024-03-10T09:00:00Z"),
        );
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert!(txn.tags.is_empty());
        assert!(txn.receipt.is_none());
    }

    #[test]
    fn test_counts_against_matches_category_and_period() {
        let category = groceries();
        let period = BudgetPeriod::monthly(2024, 3);
        let txn = Transaction::expense(
            Money::from_cents(9500),
            "Market",
            category.clone(),
            instant("2024-03-20T18:00:00Z"),
        );
        assert!(txn.counts_against(category.id, &period));
        assert!(!txn.counts_against(CategoryId::new(), &period));
        assert!(!txn.counts_against(category.id, &BudgetPeriod::monthly(2024, 2)));
    }

    #[test]
    fn test_income_never_counts() {
        let category = groceries();
        let period = BudgetPeriod::monthly(2024, 3);
        let txn = Transaction::income(
            Money::from_cents(3000),
            "Refund",
            category.clone(),
            instant("2024-03-20T18:00:00Z"),
        );
        assert!(!txn.counts_against(category.id, &period));
    }

    #[test]
    fn test_serde_kind_as_type_field() {
        let txn = Transaction::expense(
            Money::from_cents(12000),
            "Weekly shop",
            groceries(),
            instant("2024-03-10T09:00:00Z"),
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"expense\""));
        assert!(json.contains("\"amount\":120.0"));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_receipt_is_separate_from_kind() {
        let mut txn = Transaction::expense(
            Money::from_cents(500),
            "Coffee",
            groceries(),
            instant("2024-03-10T09:00:00Z"),
        );
        txn.receipt = Some("receipts/coffee.jpg".into());
        assert!(txn.is_expense());

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"receipt\":\"receipts/coffee.jpg\""));
        assert!(json.contains("\"type\":\"expense\""));
    }

    #[test]
    fn test_display() {
        let txn = Transaction::expense(
            Money::from_cents(12000),
            "Weekly shop",
            groceries(),
            instant("2024-03-10T09:00:00Z"),
        );
        assert_eq!(txn.to_string(), "2024-03-10 Weekly shop 120.00 (expense)");
    }
}
