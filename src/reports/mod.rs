//! Reports over the expense collection
//!
//! All reports are pure reads of a slice of expenses.

pub mod summary;

pub use summary::{CategoryTotal, CategoryTotals, ExpenseSummary};
