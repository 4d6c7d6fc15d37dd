//! Expense CLI commands
//!
//! One-shot equivalents of the menu options, bridging clap arguments with
//! the expense service.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_chart, format_expense_table, format_summary};
use crate::error::TrackerResult;
use crate::models::ExpenseUpdate;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "50.0")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label (e.g., "Food")
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses with their numbers
    List,
    /// Show totals per category and overall
    Summary,
    /// Edit an expense by number; omitted fields are kept
    Edit {
        /// Expense number as shown by `list`
        index: usize,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense by number
    Delete {
        /// Expense number as shown by `list`
        index: usize,
    },
    /// Show the category distribution chart
    Chart,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = ExpenseService::new(&mut storage.expenses);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
        } => {
            let expense = service.add(&amount, &category, date.as_deref())?;
            println!("Added expense:");
            println!("  Amount:   {}", expense.amount.format_with_symbol(symbol));
            println!("  Category: {}", expense.category);
            println!("  Date:     {}", expense.date);
            if let Some(moved) = storage.expenses.take_recovered() {
                println!("The damaged expense file was moved to {}", moved.display());
            }
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_table(service.list(), symbol));
        }

        ExpenseCommands::Summary => {
            print!("{}", format_summary(&service.summarize(), symbol));
        }

        ExpenseCommands::Edit {
            index,
            amount,
            category,
            date,
        } => {
            let update = ExpenseUpdate {
                amount,
                category,
                date,
            };
            let updated = service.edit(index, update)?;
            println!("Updated expense {}:", index);
            println!("  Amount:   {}", updated.amount.format_with_symbol(symbol));
            println!("  Category: {}", updated.category);
            println!("  Date:     {}", updated.date);
        }

        ExpenseCommands::Delete { index } => {
            let removed = service.delete(index)?;
            println!("Deleted: {}", removed.format_with_symbol(symbol));
        }

        ExpenseCommands::Chart => {
            print!(
                "{}",
                format_category_chart(&service.category_totals(), symbol, settings.chart_width)
            );
        }
    }

    Ok(())
}
