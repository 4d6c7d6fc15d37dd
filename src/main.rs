use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, ExpenseCommands, ExportArgs, Menu,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records expenses (amount, category, date) to a JSON file and \
                  summarizes, edits, deletes and charts them. Run without a \
                  subcommand for the interactive menu."
)]
struct Cli {
    /// Expenses file to use instead of the one in the data directory
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export expenses to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = TrackerPaths::new();
    if let Some(file) = cli.file {
        paths = paths.with_expenses_file(file);
    }
    let settings = Settings::load(&paths)?;

    init_tracing(&settings);

    let mut storage = Storage::open(paths)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Menu::new(&mut storage.expenses, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Commands::Expense(cmd) => {
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Commands::Export(args) => {
            handle_export_command(&storage, args)?;
        }
        Commands::Config => {
            let paths = storage.paths();
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
            println!("  Chart width:     {}", settings.chart_width);
            println!();
            println!("Expenses recorded: {}", storage.expenses.len());
        }
    }

    Ok(())
}

/// Log to stderr so menu output stays clean; `RUST_LOG` wins over settings
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={}", settings.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
