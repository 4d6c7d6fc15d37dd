//! Expense repository for JSON storage
//!
//! Holds the ordered expense collection in memory and mirrors it to a single
//! JSON array file. Loading never fails and never touches the file: a missing
//! file is an empty collection, and a malformed one is only moved aside when
//! the first save would otherwise overwrite it.

use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

use super::file_io::{quarantine_file, read_json_lenient, write_json_atomic, JsonRead};

/// Why the stored file was not used by the last load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadProblem {
    /// Read but not a JSON array of expenses; moved aside by the next save
    Corrupt(String),
    /// Could not be read at all; saves are refused until it can be
    Unreadable(String),
}

/// Repository for expense persistence
#[derive(Debug)]
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: Vec<Expense>,
    problem: Option<LoadProblem>,
    /// Where a malformed file was moved by the first save after loading it
    recovered_from: Option<PathBuf>,
}

impl ExpenseRepository {
    /// Create an empty repository backed by `path`, without reading it
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
            problem: None,
            recovered_from: None,
        }
    }

    /// Create a repository and load whatever `path` holds
    pub fn load(path: PathBuf) -> Self {
        let mut repo = Self::new(path);
        repo.reload();
        repo
    }

    /// Replace the in-memory collection with the file contents
    pub fn reload(&mut self) {
        self.problem = None;
        self.recovered_from = None;
        self.expenses = match read_json_lenient::<Vec<Expense>, _>(&self.path) {
            JsonRead::Parsed(expenses) => {
                tracing::debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
                expenses
            }
            JsonRead::Missing | JsonRead::Empty => {
                tracing::debug!(path = %self.path.display(), "no stored expenses, starting empty");
                Vec::new()
            }
            JsonRead::Corrupt(reason) => {
                tracing::warn!(%reason, "expense file is malformed, starting empty");
                self.problem = Some(LoadProblem::Corrupt(reason));
                Vec::new()
            }
            JsonRead::Unreadable(reason) => {
                tracing::warn!(%reason, "expense file cannot be read, starting empty");
                self.problem = Some(LoadProblem::Unreadable(reason));
                Vec::new()
            }
        };
    }

    /// Write the whole collection to disk, replacing the previous contents
    ///
    /// A malformed file from the last load is quarantined first. A file that
    /// could not be read is never overwritten.
    pub fn save(&mut self) -> TrackerResult<()> {
        if let Some(LoadProblem::Unreadable(reason)) = &self.problem {
            return Err(TrackerError::Storage(format!(
                "Refusing to overwrite {}, which could not be read: {}",
                self.path.display(),
                reason
            )));
        }

        if matches!(self.problem, Some(LoadProblem::Corrupt(_))) {
            if self.path.exists() {
                let moved = quarantine_file(&self.path)?;
                tracing::warn!(moved_to = %moved.display(), "moved malformed expense file aside");
                self.recovered_from = Some(moved);
            }
            self.problem = None;
        }

        write_json_atomic(&self.path, &self.expenses)?;
        tracing::debug!(path = %self.path.display(), count = self.expenses.len(), "saved expenses");
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What was wrong with the stored file, until a save resolves it
    pub fn load_problem(&self) -> Option<&LoadProblem> {
        self.problem.as_ref()
    }

    /// Where a malformed file was moved, once a save has done so
    pub fn recovered_from(&self) -> Option<&Path> {
        self.recovered_from.as_deref()
    }

    /// Like `recovered_from`, but reports the move only once
    pub fn take_recovered(&mut self) -> Option<PathBuf> {
        self.recovered_from.take()
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if there are no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Get an expense by its 1-based number
    pub fn get(&self, index: usize) -> TrackerResult<&Expense> {
        let position = self.position(index)?;
        Ok(&self.expenses[position])
    }

    /// Iterate `(number, expense)` pairs, numbered from 1
    pub fn iter_numbered(&self) -> impl Iterator<Item = (usize, &Expense)> + '_ {
        self.expenses.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Append an expense (in memory only)
    pub(crate) fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Drop the last expense (in memory only)
    pub(crate) fn pop(&mut self) -> Option<Expense> {
        self.expenses.pop()
    }

    /// Replace the expense at a 1-based number, returning the old one
    pub(crate) fn replace(&mut self, index: usize, expense: Expense) -> TrackerResult<Expense> {
        let position = self.position(index)?;
        Ok(std::mem::replace(&mut self.expenses[position], expense))
    }

    /// Insert an expense so that it gets the 1-based number `index`
    pub(crate) fn insert(&mut self, index: usize, expense: Expense) -> TrackerResult<()> {
        if index == 0 || index > self.expenses.len() + 1 {
            return Err(TrackerError::invalid_index(index, self.expenses.len() + 1));
        }
        self.expenses.insert(index - 1, expense);
        Ok(())
    }

    /// Remove the expense at a 1-based number
    pub(crate) fn remove(&mut self, index: usize) -> TrackerResult<Expense> {
        let position = self.position(index)?;
        Ok(self.expenses.remove(position))
    }

    /// Translate a 1-based number into a vector position
    fn position(&self, index: usize) -> TrackerResult<usize> {
        if index == 0 || index > self.expenses.len() {
            return Err(TrackerError::invalid_index(index, self.expenses.len()));
        }
        Ok(index - 1)
    }
}
