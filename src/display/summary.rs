//! Dashboard summary formatting
//!
//! The four headline figures for the current month.

use super::report::{format_money_colored, separator};
use crate::config::Settings;
use crate::reports::SpendingOverview;

/// Format the headline figures of an overview
pub fn format_summary(overview: &SpendingOverview, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary: {}\n", overview.month.label()));
    output.push_str(&separator(40));
    output.push('\n');

    output.push_str(&format!(
        "Monthly Expense:   {}\n",
        settings.format_money(overview.current_month_total)
    ));
    output.push_str(&format!(
        "Remaining Budget:  {}\n",
        format_money_colored(overview.remaining_budget, &settings.currency_symbol)
    ));

    match &overview.highest_category {
        Some(top) => output.push_str(&format!(
            "Top Category:      {} ({})\n",
            top.category.label(),
            settings.format_money(top.total)
        )),
        None => output.push_str("Top Category:      N/A\n"),
    }

    output.push_str(&format!(
        "Transactions:      {}\n",
        overview.total_transactions
    ));

    output
}
