//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-friendly CSV file, one row per expense
//! with its display number.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Expense};
use serde::Serialize;
use std::io::Write;

/// Row written for each expense
#[derive(Serialize, Debug)]
struct ExpenseRecord<'a> {
    index: usize,
    date: &'a str,
    category: &'a str,
    amount: Amount,
}

/// Export expenses to CSV with header `index,date,category,amount`
pub fn export_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (i, expense) in expenses.iter().enumerate() {
        csv_writer
            .serialize(ExpenseRecord {
                index: i + 1,
                date: &expense.date,
                category: &expense.category,
                amount: expense.amount,
            })
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    if expenses.is_empty() {
        // serialize() only emits the header alongside a first record
        csv_writer
            .write_record(["index", "date", "category", "amount"])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
