//! YAML Export functionality
//!
//! Exports the expense collection to YAML for a human-readable backup.

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;
use std::io::Write;

/// Export expenses to YAML format
pub fn export_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> TrackerResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    writeln!(writer, "# Expense Tracker Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use crate::models::Amount;

    #[test]
    fn test_yaml_export() {
        let expenses = vec![Expense::new(Amount::new(dec!(12.5)), "Books", "2024-04-01")];

        let mut output = Vec::new();
        export_yaml(&expenses, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Expense Tracker Export"));
        assert!(text.contains("category: Books"));

        let parsed: ExpenseExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.expenses, expenses);
    }
}
