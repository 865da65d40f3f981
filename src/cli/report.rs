//! CLI commands for reports
//!
//! The dashboard summary and the spending analytics view.

use clap::Subcommand;

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::format_summary;
use crate::error::SpendResult;
use crate::reports::{SpendingOverview, SpendingReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show this month's headline figures
    Summary,

    /// Show category shares and the six-month trend
    #[command(alias = "stats")]
    Analytics {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: ReportCommands,
) -> SpendResult<()> {
    let overview = SpendingOverview::from_storage(storage, clock);

    match cmd {
        ReportCommands::Summary => {
            print!("{}", format_summary(&overview, settings));
        }
        ReportCommands::Analytics { top } => {
            let mut report = SpendingReport::generate(&overview);
            if let Some(n) = top {
                report.categories = report.top_categories(n).to_vec();
            }
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
    }

    Ok(())
}
