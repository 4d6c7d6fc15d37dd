//! CLI command for data export

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows (index, date, category, amount)
    Csv,
    /// JSON document with metadata
    Json,
    /// YAML document with metadata
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> TrackerResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        TrackerError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    let expenses = storage.expenses.expenses();

    match args.format {
        ExportFormat::Csv => export_csv(expenses, &mut writer)?,
        ExportFormat::Json => export_json(expenses, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_yaml(expenses, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    tracing::info!(path = %args.output.display(), format = ?args.format, count = expenses.len(), "exported expenses");
    println!(
        "Exported {} expenses to: {}",
        expenses.len(),
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use crate::services::ExpenseService;
    use tempfile::TempDir;

    #[test]
    fn test_export_each_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(paths).unwrap();
        ExpenseService::new(&mut storage.expenses)
            .add("50", "Food", Some("2024-01-01"))
            .unwrap();

        for (format, name) in [
            (ExportFormat::Csv, "out.csv"),
            (ExportFormat::Json, "out.json"),
            (ExportFormat::Yaml, "out.yaml"),
        ] {
            let output = temp_dir.path().join(name);
            let args = ExportArgs {
                output: output.clone(),
                format,
                pretty: true,
            };
            handle_export_command(&storage, args).unwrap();

            let text = std::fs::read_to_string(&output).unwrap();
            assert!(text.contains("Food"), "{name} should contain the expense");
        }
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        let args = ExportArgs {
            output: temp_dir.path().join("missing").join("out.csv"),
            format: ExportFormat::Csv,
            pretty: false,
        };
        let err = handle_export_command(&storage, args).unwrap_err();
        assert!(matches!(err, TrackerError::Export(_)));
    }
}
