//! Expense Tracker - terminal-based personal expense tracking
//!
//! This library provides the core functionality for the expense tracker:
//! an ordered collection of expenses (amount, category, date) persisted to a
//! JSON file, with summaries, edits, deletes and a category chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, amounts)
//! - `storage`: JSON file storage layer
//! - `services`: Validated add/edit/delete
//! - `reports`: Category totals and grand total
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Subcommands and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::open(TrackerPaths::new())?;
//! let mut service = ExpenseService::new(&mut storage.expenses);
//! service.add("50.0", "Food", Some("2024-01-01"))?;
//! println!("Total: {}", service.summarize().total);
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
