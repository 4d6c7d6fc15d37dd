//! Expense service
//!
//! Business logic over the expense repository: input validation, date
//! defaulting, and a save after every mutation. A mutation whose save fails
//! is undone in memory so the collection keeps matching the file.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{validate_category, Amount, Expense, ExpenseUpdate};
use crate::reports::{CategoryTotals, ExpenseSummary};
use crate::storage::ExpenseRepository;

/// Service for expense management
pub struct ExpenseService<'a> {
    repo: &'a mut ExpenseRepository,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(repo: &'a mut ExpenseRepository) -> Self {
        Self { repo }
    }

    /// Record a new expense at the end of the collection
    ///
    /// A missing or blank `date` becomes today's date.
    pub fn add(&mut self, amount: &str, category: &str, date: Option<&str>) -> TrackerResult<Expense> {
        let amount = parse_amount(amount)?;
        let category = parse_category(category)?;
        let date = parse_date(date).unwrap_or_else(Expense::today);

        let expense = Expense::new(amount, category, date);
        self.repo.push(expense.clone());

        if let Err(e) = self.repo.save() {
            self.repo.pop();
            return Err(e);
        }

        tracing::info!(
            number = self.repo.len(),
            amount = %expense.amount,
            category = %expense.category,
            "added expense"
        );
        Ok(expense)
    }

    /// Get an expense by its 1-based number
    pub fn get(&self, index: usize) -> TrackerResult<&Expense> {
        self.repo.get(index)
    }

    /// Iterate `(number, expense)` pairs in insertion order
    pub fn list(&self) -> impl Iterator<Item = (usize, &Expense)> + '_ {
        self.repo.iter_numbered()
    }

    /// Change some fields of an expense
    ///
    /// Every supplied value is validated before anything changes; fields left
    /// as `None` keep their current value.
    pub fn edit(&mut self, index: usize, update: ExpenseUpdate) -> TrackerResult<Expense> {
        let current = self.repo.get(index)?.clone();

        let amount = match update.amount.as_deref() {
            Some(raw) => parse_amount(raw)?,
            None => current.amount,
        };
        let category = match update.category.as_deref() {
            Some(raw) => parse_category(raw)?,
            None => current.category.clone(),
        };
        let date = parse_date(update.date.as_deref()).unwrap_or_else(|| current.date.clone());

        let updated = Expense::new(amount, category, date);
        if updated == current {
            tracing::debug!(number = index, "edit changes nothing, skipping save");
            return Ok(updated);
        }

        let before = self.repo.replace(index, updated.clone())?;
        if let Err(e) = self.repo.save() {
            self.repo.replace(index, before)?;
            return Err(e);
        }

        tracing::info!(number = index, before = %before, after = %updated, "edited expense");
        Ok(updated)
    }

    /// Remove an expense; later expenses move up by one number
    pub fn delete(&mut self, index: usize) -> TrackerResult<Expense> {
        let removed = self.repo.remove(index)?;

        if let Err(e) = self.repo.save() {
            self.repo.insert(index, removed)?;
            return Err(e);
        }

        tracing::info!(number = index, expense = %removed, "deleted expense");
        Ok(removed)
    }

    /// Per-category totals and the grand total
    pub fn summarize(&self) -> ExpenseSummary {
        ExpenseSummary::generate(self.repo.expenses())
    }

    /// Chart input: labels with matching sizes
    pub fn category_totals(&self) -> CategoryTotals {
        CategoryTotals::from_expenses(self.repo.expenses())
    }
}

fn parse_amount(raw: &str) -> TrackerResult<Amount> {
    Amount::parse(raw).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Trimmed date text, or `None` when nothing was typed
fn parse_date(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|d| !d.is_empty()).map(str::to_string)
}

fn parse_category(raw: &str) -> TrackerResult<String> {
    validate_category(raw).map_err(|e| TrackerError::Validation(e.to_string()))
}
