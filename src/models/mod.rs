//! Core data models for budgetlens
//!
//! The budgeting domain: categories, budgets, transactions, periods, and the
//! money type everything is priced in.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use ids::{AlertId, BudgetId, CategoryId, TransactionId, UserId};
pub use money::Money;
pub use period::{BudgetPeriod, PeriodKind};
pub use transaction::{Transaction, TransactionKind};
