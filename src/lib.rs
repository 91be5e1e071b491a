//! budgetlens - budget progress tracking for personal finance apps
//!
//! Given a set of spending budgets and a set of recorded transactions, this
//! crate computes how much of each budget's ceiling was consumed within its
//! current period: total spent, percentage, and the (possibly negative)
//! remaining amount. The computation is pure and synchronous; persistence,
//! transaction entry, and rendering belong to the surrounding application.
//!
//! # Architecture
//!
//! - `models`: the budgeting domain (budgets, categories, transactions,
//!   periods, money)
//! - `catalog`: read-only category lookup
//! - `snapshot`: lenient decoding of untrusted input collections
//! - `reports`: the progress report and threshold alerts
//! - `currency`: display currencies, formatting, exchange rates
//! - `error`: the crate error type and the non-fatal warning taxonomy
//!
//! # Example
//!
//! ```rust
//! use budgetlens::{Budget, BudgetProgressReport, CategoryCatalog, Money, PeriodKind, Transaction};
//!
//! let catalog = CategoryCatalog::default_expense();
//! let groceries = catalog.find_by_name("Groceries").unwrap().clone();
//!
//! let budgets = vec![Budget::new(groceries.id, Money::from_cents(50_000), PeriodKind::Monthly)];
//! let transactions = vec![Transaction::expense(
//!     Money::from_cents(21_500),
//!     "Weekly shop",
//!     groceries,
//!     "2024-03-10T09:00:00Z".parse().unwrap(),
//! )];
//!
//! let report = BudgetProgressReport::generate(
//!     &budgets,
//!     &transactions,
//!     &catalog,
//!     "2024-03-15T12:00:00Z".parse().unwrap(),
//! );
//! assert_eq!(report.entries[0].percentage, 43.0);
//! assert_eq!(report.entries[0].remaining, Money::from_cents(28_500));
//! ```

pub mod catalog;
pub mod currency;
pub mod error;
pub mod models;
pub mod reports;
pub mod snapshot;

pub use catalog::{CategoryCatalog, DefaultExpenseCategory};
pub use currency::{Currency, CurrencyFormatter, ExchangeRates};
pub use error::{LensError, LensResult, Warning};
pub use models::{
    Budget, BudgetPeriod, Category, Money, PeriodKind, Transaction, TransactionKind,
};
pub use reports::{AlertLevel, BudgetAlert, BudgetProgress, BudgetProgressReport};
pub use snapshot::Snapshot;
