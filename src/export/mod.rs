//! Export module for the expense tracker
//!
//! Provides data export in multiple formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, ExpenseExport, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
