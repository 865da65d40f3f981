use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smartspend::cli::{
    handle_budget_command, handle_expense_command, handle_report_command, BudgetCommands,
    ExpenseCommands, ReportCommands,
};
use smartspend::clock::SystemClock;
use smartspend::config::{SpendPaths, Settings};
use smartspend::storage::Storage;

#[derive(Parser)]
#[command(
    name = "smartspend",
    version,
    about = "Personal expense tracker with monthly budgets",
    long_about = "SmartSpend records day-to-day expenses by category, tracks them \
                  against a monthly budget, and summarises where the money went."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config {
        /// Write the settings file with current values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(&paths, &settings)?;
    storage.load_all();
    let clock = SystemClock;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("SmartSpend Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default budget:  {}", settings.format_money(settings.default_budget));
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("SmartSpend - personal expense tracker");
            println!();
            println!("Run 'smartspend --help' for usage information.");
            println!("Run 'smartspend add 250 --category Food' to record an expense.");
        }
    }

    Ok(())
}
