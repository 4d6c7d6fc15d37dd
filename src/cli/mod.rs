//! CLI command handlers
//!
//! This module contains the implementation of CLI commands and the
//! interactive menu, bridging the clap argument parsing with the service
//! layer.

pub mod expense;
pub mod export;
pub mod menu;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use menu::Menu;
