//! Budget CLI commands

use clap::Subcommand;

use super::expense::parse_amount;
use crate::clock::Clock;
use crate::config::Settings;
use crate::error::SpendResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show this month's budget status
    Show,
    /// Set the monthly budget
    Set {
        /// New budget amount (e.g., "50000")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: BudgetCommands,
) -> SpendResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Show => {
            let status = service.status(clock);
            print!("{}", status.format_terminal(&settings.currency_symbol));
        }
        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            service.set(amount)?;
            println!("Monthly budget set to {}", settings.format_money(amount));
        }
    }

    Ok(())
}
