//! Input boundary for untrusted budget and transaction data
//!
//! The presentation layer hands this crate collections it cannot vouch for:
//! payloads from a store, a sync endpoint, or an older app version. A
//! [`Snapshot`] is the typed landing zone. The top-level shape is checked
//! hard (a non-sequence is [`LensError::InvalidInput`]); individual records
//! are decoded leniently, with each unusable record skipped and reported as a
//! [`Warning`] instead of failing the batch.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{LensError, LensResult, Warning};
use crate::models::{Budget, Category, Money, Transaction, TransactionId, TransactionKind};

/// A decoded, validated snapshot of budgets and transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Budgets that decoded and validated cleanly, in input order
    pub budgets: Vec<Budget>,

    /// Transactions that decoded cleanly, in input order
    pub transactions: Vec<Transaction>,

    /// One entry per skipped record
    pub warnings: Vec<Warning>,
}

impl Snapshot {
    /// Decode budgets and transactions from JSON text
    pub fn from_json(budgets: &str, transactions: &str) -> LensResult<Self> {
        let budgets: Value =
            serde_json::from_str(budgets).map_err(|_| LensError::invalid_input("budgets"))?;
        let transactions: Value = serde_json::from_str(transactions)
            .map_err(|_| LensError::invalid_input("transactions"))?;
        Self::from_values(&budgets, &transactions)
    }

    /// Decode budgets and transactions from JSON values
    ///
    /// Each top-level value must be an array; anything else fails the whole
    /// call with [`LensError::InvalidInput`]. Empty arrays are valid.
    pub fn from_values(budgets: &Value, transactions: &Value) -> LensResult<Self> {
        let budget_items = budgets
            .as_array()
            .ok_or_else(|| LensError::invalid_input("budgets"))?;
        let transaction_items = transactions
            .as_array()
            .ok_or_else(|| LensError::invalid_input("transactions"))?;

        let mut warnings = Vec::new();
        let budgets = decode_budgets(budget_items, &mut warnings);
        let transactions = decode_transactions(transaction_items, &mut warnings);

        Ok(Self {
            budgets,
            transactions,
            warnings,
        })
    }
}

fn decode_budgets(items: &[Value], warnings: &mut Vec<Warning>) -> Vec<Budget> {
    let mut budgets = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let result = serde_json::from_value::<Budget>(item.clone())
            .map_err(|err| err.to_string())
            .and_then(|budget| match budget.validate() {
                Ok(()) => Ok(budget),
                Err(err) => Err(err.to_string()),
            });
        match result {
            Ok(budget) => budgets.push(budget),
            Err(reason) => {
                warn!(index, %reason, "skipping malformed budget record");
                warnings.push(Warning::MalformedBudget { index, reason });
            }
        }
    }
    budgets
}

fn decode_transactions(items: &[Value], warnings: &mut Vec<Warning>) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match decode_transaction(item) {
            Ok(transaction) => transactions.push(transaction),
            Err((id, reason)) => {
                match id {
                    Some(id) => warn!(%id, index, %reason, "skipping malformed transaction"),
                    None => warn!(index, %reason, "skipping malformed transaction"),
                }
                warnings.push(Warning::MalformedTransaction { index, id, reason });
            }
        }
    }
    transactions
}

/// Permissive mirror of [`Transaction`] used for field-by-field decoding
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    id: Option<TransactionId>,
    amount: Option<Value>,
    #[serde(default)]
    description: String,
    category: Option<Category>,
    date: Option<Value>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    currency: Option<String>,
    original_amount: Option<Value>,
    receipt: Option<String>,
}

type TransactionDecodeError = (Option<TransactionId>, String);

fn decode_transaction(item: &Value) -> Result<Transaction, TransactionDecodeError> {
    let raw: RawTransaction =
        serde_json::from_value(item.clone()).map_err(|err| (None, err.to_string()))?;
    let id = raw.id;
    let fail = |reason: &str| (id, reason.to_string());

    let amount = match &raw.amount {
        Some(Value::Number(number)) => number
            .as_f64()
            .map(Money::from_major_f64)
            .ok_or_else(|| fail("non-numeric amount"))?,
        Some(_) => return Err(fail("non-numeric amount")),
        None => return Err(fail("missing amount")),
    };

    let date = match &raw.date {
        Some(Value::String(text)) => parse_instant(text).ok_or_else(|| fail("unparseable date"))?,
        Some(_) => return Err(fail("invalid date")),
        None => return Err(fail("missing date")),
    };

    let category = raw.category.ok_or_else(|| fail("missing category"))?;

    let kind = match raw.kind.as_deref() {
        Some("expense") => TransactionKind::Expense,
        Some("income") => TransactionKind::Income,
        Some(other) => return Err((id, format!("unsupported type `{}`", other))),
        None => return Err(fail("missing type")),
    };

    let original_amount = raw
        .original_amount
        .as_ref()
        .and_then(Value::as_f64)
        .map(Money::from_major_f64);

    Ok(Transaction {
        id: id.unwrap_or_default(),
        amount,
        description: raw.description,
        category,
        date,
        kind,
        tags: raw.tags,
        currency: raw.currency,
        original_amount,
        receipt: raw.receipt,
    })
}

/// Accepts RFC 3339 instants and bare `YYYY-MM-DD` dates (taken as midnight UTC)
fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
