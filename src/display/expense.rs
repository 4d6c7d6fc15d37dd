//! Expense display formatting
//!
//! Numbered listings for the menu and a table view for the `list` command.
//! The numbers shown are the ones `edit` and `delete` take.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

/// One table row
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a single numbered expense line, e.g. `1. ₹50.00 - Food - 2024-01-01`
pub fn format_expense_line(number: usize, expense: &Expense, symbol: &str) -> String {
    format!("{}. {}", number, expense.format_with_symbol(symbol))
}

/// Format numbered expenses one per line
pub fn format_expense_list<'a, I>(expenses: I, symbol: &str) -> String
where
    I: IntoIterator<Item = (usize, &'a Expense)>,
{
    let mut output = String::new();
    for (number, expense) in expenses {
        output.push_str(&format_expense_line(number, expense, symbol));
        output.push('\n');
    }

    if output.is_empty() {
        return "No expenses to show.\n".to_string();
    }
    format!("List of Expenses:\n{}", output)
}

/// Format numbered expenses as a table
pub fn format_expense_table<'a, I>(expenses: I, symbol: &str) -> String
where
    I: IntoIterator<Item = (usize, &'a Expense)>,
{
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|(number, expense)| ExpenseRow {
            number,
            date: expense.date.clone(),
            category: expense.category.clone(),
            amount: expense.amount.format_with_symbol(symbol),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses to show.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use crate::models::Amount;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(Amount::new(dec!(50.0)), "Food", "2024-01-01"),
            Expense::new(Amount::new(dec!(20.0)), "Transport", "2024-01-02"),
        ]
    }

    fn numbered(expenses: &[Expense]) -> impl Iterator<Item = (usize, &Expense)> {
        expenses.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    #[test]
    fn test_format_expense_line() {
        let expense = &sample()[0];
        assert_eq!(
            format_expense_line(3, expense, "₹"),
            "3. ₹50.00 - Food - 2024-01-01"
        );
    }

    #[test]
    fn test_format_expense_list() {
        let expenses = sample();
        let text = format_expense_list(numbered(&expenses), "$");

        assert!(text.starts_with("List of Expenses:\n"));
        assert!(text.contains("1. $50.00 - Food - 2024-01-01\n"));
        assert!(text.contains("2. $20.00 - Transport - 2024-01-02\n"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(numbered(&[]), "$"), "No expenses to show.\n");
        assert_eq!(format_expense_table(numbered(&[]), "$"), "No expenses to show.\n");
    }

    #[test]
    fn test_format_expense_table() {
        let expenses = sample();
        let table = format_expense_table(numbered(&expenses), "$");

        assert!(table.contains("Category"));
        assert!(table.contains("Transport"));
        assert!(table.contains("$20.00"));
    }
}
