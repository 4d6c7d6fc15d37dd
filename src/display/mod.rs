//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, summaries and the category
//! chart for terminal display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_line, format_expense_list, format_expense_table};
pub use report::{format_category_chart, format_summary};
