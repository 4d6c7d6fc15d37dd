//! Expense model
//!
//! A single recorded expense: amount, free-text category and a date string.
//! The serialized shape is exactly the three keys of the on-disk format.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// Date format used for stored and defaulted dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// How much was spent
    pub amount: Amount,

    /// Free-text category label
    pub category: String,

    /// Date as entered, normally `YYYY-MM-DD` (not calendar-checked)
    pub date: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(amount: Amount, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    /// Today's local date in storage format
    pub fn today() -> String {
        Local::now().date_naive().format(DATE_FORMAT).to_string()
    }

    /// Format for display with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!(
            "{} - {} - {}",
            self.amount.format_with_symbol(symbol),
            self.category,
            self.date
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.amount, self.category, self.date)
    }
}

/// Raw replacement values for an edit
///
/// `None` or a blank date keeps the current value. The amount is kept as typed so the
/// service can reject it before touching the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl ExpenseUpdate {
    /// An update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the amount
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Replace the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Check whether any field would change
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.date.is_none()
    }
}

/// Validate and normalize a category label
pub fn validate_category(category: &str) -> Result<String, CategoryValidationError> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(CategoryValidationError::Empty);
    }
    Ok(trimmed.to_string())
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    Empty,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
