//! Interactive text menu
//!
//! Six numbered options, one line of input per prompt. Every failure is
//! reported and the loop returns to the top-level prompt; only a broken
//! input or output stream ends it early. End of input behaves like "Exit".

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_category_chart, format_expense_list, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseUpdate;
use crate::services::ExpenseService;
use crate::storage::{ExpenseRepository, LoadProblem};

const MENU: &str = "\
Personal Expense Tracker Menu:
1. Add Expense
2. View Summary
3. Edit Expense
4. Delete Expense
5. Show Expense Graph
6. Exit";

/// What the loop should do after handling a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu session over arbitrary input and output streams
pub struct Menu<'a, R, W> {
    repo: &'a mut ExpenseRepository,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu session
    pub fn new(repo: &'a mut ExpenseRepository, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            repo,
            settings,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        match self.repo.load_problem() {
            Some(LoadProblem::Corrupt(_)) => writeln!(
                self.output,
                "Warning: the expense file is damaged. Starting with no expenses; \
                 the old file will be kept aside when you save."
            )?,
            Some(LoadProblem::Unreadable(reason)) => writeln!(
                self.output,
                "Warning: the expense file could not be read ({}). Changes cannot be saved.",
                reason
            )?,
            None => {}
        }

        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice (1-6): ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => self.add_expense()?,
                "2" => self.view_summary()?,
                "3" => self.edit_expense()?,
                "4" => self.delete_expense()?,
                "5" => self.show_graph()?,
                "6" => {
                    writeln!(self.output, "Exiting the program. Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn add_expense(&mut self) -> TrackerResult<Flow> {
        let Some(amount) = self.prompt("Enter amount (e.g., 50.0): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompt("Enter category (Food, Transport, etc.): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) or press Enter for today: ")? else {
            return Ok(Flow::Exit);
        };

        let result = ExpenseService::new(self.repo).add(&amount, &category, Some(date.as_str()));
        match result {
            Ok(_) => {
                writeln!(self.output, "Expense added successfully!")?;
                if let Some(moved) = self.repo.take_recovered() {
                    writeln!(self.output, "The damaged expense file was moved to {}.", moved.display())?;
                }
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_summary(&mut self) -> TrackerResult<Flow> {
        let summary = ExpenseService::new(self.repo).summarize();
        write!(
            self.output,
            "{}",
            format_summary(&summary, &self.settings.currency_symbol)
        )?;
        Ok(Flow::Continue)
    }

    fn edit_expense(&mut self) -> TrackerResult<Flow> {
        let Some(index) = self.choose_expense("Enter the expense number to edit: ")? else {
            return Ok(Flow::Continue);
        };

        let settings = self.settings;
        let symbol = &settings.currency_symbol;
        let current = self.repo.get(index)?.clone();
        writeln!(self.output, "Editing: {}", current.format_with_symbol(symbol))?;

        let prompts = [
            format!(
                "Enter new amount (or press Enter to keep {}): ",
                current.amount.format_with_symbol(symbol)
            ),
            format!("Enter new category (or press Enter to keep {}): ", current.category),
            format!("Enter new date (or press Enter to keep {}): ", current.date),
        ];
        let mut answers = Vec::with_capacity(prompts.len());
        for text in &prompts {
            match self.prompt(text)? {
                Some(answer) => answers.push(non_blank(answer)),
                None => return Ok(Flow::Exit),
            }
        }

        let mut answers = answers.into_iter();
        let update = ExpenseUpdate {
            amount: answers.next().flatten(),
            category: answers.next().flatten(),
            date: answers.next().flatten(),
        };

        let result = ExpenseService::new(self.repo).edit(index, update);
        match result {
            Ok(_) => writeln!(self.output, "Expense updated successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_expense(&mut self) -> TrackerResult<Flow> {
        let Some(index) = self.choose_expense("Enter the expense number to delete: ")? else {
            return Ok(Flow::Continue);
        };

        let result = ExpenseService::new(self.repo).delete(index);
        match result {
            Ok(removed) => writeln!(
                self.output,
                "Deleted: {}",
                removed.format_with_symbol(&self.settings.currency_symbol)
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_graph(&mut self) -> TrackerResult<Flow> {
        let totals = ExpenseService::new(self.repo).category_totals();
        write!(
            self.output,
            "{}",
            format_category_chart(
                &totals,
                &self.settings.currency_symbol,
                self.settings.chart_width
            )
        )?;
        Ok(Flow::Continue)
    }

    /// List expenses and read a valid 1-based number
    ///
    /// Returns `None` (after telling the user why) when there is nothing to
    /// choose, the input is not a number, or it is out of range.
    fn choose_expense(&mut self, text: &str) -> TrackerResult<Option<usize>> {
        let symbol = self.settings.currency_symbol.clone();
        write!(
            self.output,
            "{}",
            format_expense_list(self.repo.iter_numbered(), &symbol)
        )?;
        if self.repo.is_empty() {
            return Ok(None);
        }

        let Some(answer) = self.prompt(text)? else {
            return Ok(None);
        };

        let number: i64 = match answer.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(self.output, "Please enter a valid number.")?;
                return Ok(None);
            }
        };

        match usize::try_from(number).ok().filter(|n| self.repo.get(*n).is_ok()) {
            Some(index) => Ok(Some(index)),
            None => {
                writeln!(self.output, "Invalid number.")?;
                Ok(None)
            }
        }
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Tell the user why an operation was refused
    fn report(&mut self, err: &TrackerError) -> TrackerResult<()> {
        match err {
            TrackerError::Validation(msg) => writeln!(self.output, "Invalid input. {}", msg)?,
            TrackerError::InvalidIndex { .. } => writeln!(self.output, "Invalid number.")?,
            other => {
                tracing::error!(error = %other, "operation failed");
                writeln!(self.output, "Could not complete the operation: {}", other)?
            }
        }
        Ok(())
    }
}

/// Blank answers mean "keep the current value"
fn non_blank(answer: String) -> Option<String> {
    if answer.trim().is_empty() {
        None
    } else {
        Some(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use crate::models::{Amount, Expense};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::load(temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    fn run_menu(repo: &mut ExpenseRepository, input: &str) -> String {
        let settings = Settings::default();
        let mut output = Vec::new();
        Menu::new(repo, &settings, Cursor::new(input.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit() {
        let (_temp_dir, mut repo) = create_test_repo();
        let output = run_menu(&mut repo, "6\n");

        assert!(output.contains("1. Add Expense"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, mut repo) = create_test_repo();
        let output = run_menu(&mut repo, "");
        assert!(output.contains("Enter your choice (1-6): "));
    }

    #[test]
    fn test_invalid_choice() {
        let (_temp_dir, mut repo) = create_test_repo();
        let output = run_menu(&mut repo, "9\n6\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_add_and_summary() {
        let (_temp_dir, mut repo) = create_test_repo();
        let output = run_menu(
            &mut repo,
            "1\n50.0\nFood\n2024-01-01\n1\n20\nTransport\n2024-01-02\n2\n6\n",
        );

        assert_eq!(output.matches("Expense added successfully!").count(), 2);
        assert!(output.contains("- Food: ₹50.00"));
        assert!(output.contains("- Transport: ₹20.00"));
        assert!(output.contains("Total Spending: ₹70.00"));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_add_blank_date_uses_today() {
        let (_temp_dir, mut repo) = create_test_repo();
        run_menu(&mut repo, "1\n5\nSnacks\n\n6\n");

        assert_eq!(repo.get(1).unwrap().date, Expense::today());
    }

    #[test]
    fn test_add_invalid_amount() {
        let (_temp_dir, mut repo) = create_test_repo();
        let output = run_menu(&mut repo, "1\nabc\nFood\n\n6\n");

        assert!(output.contains("Invalid input."));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_summary_empty() {
        let (_temp_dir, mut repo) = create_test_repo();
        let output = run_menu(&mut repo, "2\n6\n");
        assert!(output.contains("No expenses found."));
    }

    #[test]
    fn test_edit_keeps_blank_fields() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.push(Expense::new(Amount::new(dec!(100.0)), "Food", "2024-01-01"));

        let output = run_menu(&mut repo, "3\n1\n30\n\n\n6\n");

        assert!(output.contains("Editing: ₹100.00 - Food - 2024-01-01"));
        assert!(output.contains("Expense updated successfully!"));
        assert_eq!(
            repo.get(1).unwrap(),
            &Expense::new(Amount::new(dec!(30.0)), "Food", "2024-01-01")
        );
    }

    #[test]
    fn test_edit_invalid_amount_keeps_record() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.push(Expense::new(Amount::new(dec!(100.0)), "Food", "2024-01-01"));

        let output = run_menu(&mut repo, "3\n1\nlots\nGames\n\n6\n");

        assert!(output.contains("Invalid input."));
        assert_eq!(repo.get(1).unwrap().category, "Food");
    }

    #[test]
    fn test_edit_and_delete_with_no_expenses() {
        let (_temp_dir, mut repo) = create_test_repo();
        let output = run_menu(&mut repo, "3\n4\n6\n");
        assert_eq!(output.matches("No expenses to show.").count(), 2);
    }

    #[test]
    fn test_delete_bad_numbers() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.push(Expense::new(Amount::new(dec!(1.0)), "A", "2024-01-01"));

        let output = run_menu(&mut repo, "4\nx\n4\n0\n4\n2\n4\n-1\n6\n");

        assert_eq!(output.matches("Please enter a valid number.").count(), 1);
        assert_eq!(output.matches("Invalid number.").count(), 3);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.push(Expense::new(Amount::new(dec!(100.0)), "Food", "2024-01-01"));

        let output = run_menu(&mut repo, "4\n1\n6\n");

        assert!(output.contains("1. ₹100.00 - Food - 2024-01-01"));
        assert!(output.contains("Deleted: ₹100.00 - Food - 2024-01-01"));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_graph() {
        let (_temp_dir, mut repo) = create_test_repo();
        let output = run_menu(&mut repo, "5\n6\n");
        assert!(output.contains("No expenses to display."));

        repo.push(Expense::new(Amount::new(dec!(10.0)), "Food", "2024-01-01"));
        let output = run_menu(&mut repo, "5\n6\n");
        assert!(output.contains("Expense Distribution by Category"));
        assert!(output.contains("100.0%"));
    }

    #[test]
    fn test_recovered_file_warning() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, "corrupt").unwrap();
        let mut repo = ExpenseRepository::load(path.clone());

        let output = run_menu(&mut repo, "2\n6\n");
        assert!(output.contains("the expense file is damaged"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "corrupt");

        let output = run_menu(&mut repo, "1\n5\nTea\n2024-01-01\n6\n");
        assert!(output.contains("Expense added successfully!"));
        assert!(output.contains("The damaged expense file was moved to"));
        assert_eq!(ExpenseRepository::load(path).len(), 1);
    }

    #[test]
    fn test_unreadable_file_warning() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::create_dir(&path).unwrap();
        let mut repo = ExpenseRepository::load(path.clone());

        let output = run_menu(&mut repo, "1\n5\nTea\n\n6\n");
        assert!(output.contains("could not be read"));
        assert!(!output.contains("Expense added successfully!"));
        assert!(repo.is_empty());
        assert!(path.is_dir());
    }
}
