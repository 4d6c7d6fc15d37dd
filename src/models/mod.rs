//! Core data models for the expense tracker
//!
//! An expense is three flat fields; the collection is an ordered `Vec`
//! addressed by 1-based position.

pub mod amount;
pub mod expense;

pub use amount::{Amount, AmountParseError};
pub use expense::{validate_category, CategoryValidationError, Expense, ExpenseUpdate, DATE_FORMAT};
