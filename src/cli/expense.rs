//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{SpendError, SpendResult};
use crate::models::{
    parse_category_filter, parse_month_filter, Category, ExpenseFilter, Money, NewExpense,
};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "250" or "1,250.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Travel, Shopping, Bills, Education, Health, Others)
        #[arg(short, long, default_value = "Food")]
        category: String,
        /// Date of the expense (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text notes, up to 200 characters
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only this category, or "All"
        #[arg(short, long, default_value = "All")]
        category: String,
        /// Only this month (YYYY-MM), or "All"
        #[arg(short, long, default_value = "All")]
        month: String,
        /// Show at most this many expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },
    /// List the months that have expenses
    Months,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: ExpenseCommands,
) -> SpendResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            notes,
        } => {
            let amount = parse_amount(&amount)?;
            let category = category
                .parse::<Category>()
                .map_err(|e| SpendError::Validation(e.to_string()))?;
            let date = parse_date(date.as_deref(), clock)?;

            let expense =
                service.add(NewExpense::new(amount, category, date).with_notes(notes))?;

            println!("Added expense: {}", settings.format_money(expense.amount));
            println!("  Category: {}", expense.category.label());
            println!("  Date: {}", expense.date.format(&settings.date_format));
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List {
            category,
            month,
            limit,
        } => {
            let filter = ExpenseFilter {
                category: parse_category_filter(&category)
                    .map_err(|e| SpendError::Validation(e.to_string()))?,
                month: parse_month_filter(&month)
                    .map_err(|e| SpendError::Validation(e.to_string()))?,
            };

            let mut expenses = service.list(&filter);
            let total: Money = expenses.iter().map(|e| e.amount).sum();
            let count = expenses.len();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            print!("{}", format_expense_list(&expenses, settings));
            if count > 0 {
                println!(
                    "{} expense(s), total {}",
                    count,
                    settings.format_money(total)
                );
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service
                .find(&id)
                .ok_or_else(|| SpendError::expense_not_found(&id))?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.remove(&id)?;
            println!(
                "Deleted expense: {} ({}, {})",
                expense.id,
                expense.category.label(),
                settings.format_money(expense.amount)
            );
        }

        ExpenseCommands::Months => {
            let months = service.months();
            if months.is_empty() {
                println!("No expenses recorded yet.");
            }
            for month in months {
                println!("{}  {}", month, month.label());
            }
        }
    }

    Ok(())
}

/// Parse a user-supplied amount
pub fn parse_amount(s: &str) -> SpendResult<Money> {
    Money::parse(s).map_err(|e| {
        SpendError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '250' or '1,250.50'. Error: {}",
            s, e
        ))
    })
}

/// Parse a date in YYYY-MM-DD form, or today when none is given
pub fn parse_date(s: Option<&str>, clock: &dyn Clock) -> SpendResult<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            SpendError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(clock.today()),
    }
}
