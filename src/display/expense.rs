//! Expense display formatting
//!
//! Table and detail views of expenses for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::config::Settings;
use crate::models::Expense;

/// Notes longer than this are cut in list views
const NOTES_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format(&settings.date_format).to_string(),
            category: expense.category.label(),
            amount: settings.format_money(expense.amount),
            notes: truncate(&expense.notes, NOTES_WIDTH),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!(
        "Date:     {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!("Category: {}\n", expense.category.label()));
    output.push_str(&format!(
        "Amount:   {}\n",
        settings.format_money(expense.amount)
    ));
    if !expense.notes.is_empty() {
        output.push_str(&format!("Notes:    {}\n", expense.notes));
    }

    output
}
