//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, LoadProblem};
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Main storage coordinator, owned by one session
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance and load the expenses file
    ///
    /// Only the expenses file's directory is created; the file itself is
    /// untouched until something is saved.
    pub fn open(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::load(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}
