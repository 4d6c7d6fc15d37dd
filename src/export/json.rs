//! JSON Export functionality
//!
//! Exports the expense collection to a self-describing JSON document with
//! schema versioning and summary metadata.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Expense};
use crate::reports::ExpenseSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, in insertion order
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Number of distinct categories
    pub category_count: usize,

    /// Grand total of all amounts
    pub total: Amount,

    /// Earliest date string (lexicographic, so ISO dates sort correctly)
    pub earliest_date: Option<String>,

    /// Latest date string
    pub latest_date: Option<String>,
}

impl ExpenseExport {
    /// Build an export from an expense collection
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let summary = ExpenseSummary::generate(expenses);

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            category_count: summary.categories.len(),
            total: summary.total,
            earliest_date: expenses.iter().map(|e| &e.date).min().cloned(),
            latest_date: expenses.iter().map(|e| &e.date).max().cloned(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: expenses.to_vec(),
            metadata,
        }
    }
}

/// Export expenses to JSON
pub fn export_json<W: Write>(expenses: &[Expense], writer: &mut W, pretty: bool) -> TrackerResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
