//! Budget status
//!
//! How this month's spend compares with the budget, plus a naive projection
//! of where the month will end up at the current daily rate.

use chrono::{Datelike, NaiveDate};

use crate::display::report::{format_bar, separator};
use crate::models::Money;

use super::overview::SpendingOverview;

/// Usage above this percentage is flagged as a warning
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

/// Days assumed per month when projecting the daily average
pub const PROJECTION_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    /// Share of the budget used, capped at 100; 0 when the budget isn't positive
    pub percent_used: f64,
    pub daily_average: Money,
    pub projected_monthly: Money,
}

impl BudgetStatus {
    pub fn generate(overview: &SpendingOverview, today: NaiveDate) -> Self {
        Self::from_parts(
            overview.budget,
            overview.current_month_total,
            overview.total_transactions,
            today,
        )
    }

    pub fn from_parts(budget: Money, spent: Money, transactions: usize, today: NaiveDate) -> Self {
        let percent_used = if budget.is_positive() {
            spent.percent_of(budget).min(100.0)
        } else {
            0.0
        };

        let day = i64::from(today.day());
        let (daily_average, projected_monthly) = if transactions > 0 {
            (
                per_day(spent, 1, day),
                per_day(spent, PROJECTION_DAYS, day),
            )
        } else {
            (Money::zero(), Money::zero())
        };

        Self {
            budget,
            spent,
            remaining: budget - spent,
            percent_used,
            daily_average,
            projected_monthly,
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.remaining.is_negative()
    }

    pub fn is_warning(&self) -> bool {
        self.percent_used > WARNING_THRESHOLD_PERCENT
    }

    /// Whether the projection lands above the budget
    pub fn is_projected_over(&self) -> bool {
        self.projected_monthly > self.budget
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str("Monthly Budget\n");
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!("Budget:            {}\n", money(self.budget)));
        output.push_str(&format!("Spent:             {}\n", money(self.spent)));
        output.push_str(&format!("Remaining:         {}\n", money(self.remaining)));
        output.push_str(&format!(
            "Projected Monthly: {}{}\n",
            money(self.projected_monthly),
            if self.is_projected_over() { "  (over budget)" } else { "" }
        ));
        output.push_str(&format!(
            "\n{} {:.0}% used\n",
            format_bar(self.percent_used, 100.0, 30),
            self.percent_used
        ));

        if self.is_exceeded() {
            output.push_str(&format!(
                "Budget exceeded by {}\n",
                money(self.remaining.abs())
            ));
        } else if self.is_warning() {
            output.push_str("Warning: over 80% of the budget is used\n");
        }

        output
    }
}

/// `spent * days / elapsed`, rounded half away from zero and clamped to `i64`
fn per_day(spent: Money, days: i64, elapsed: i64) -> Money {
    let numerator = i128::from(spent.cents()) * i128::from(days);
    let elapsed = i128::from(elapsed.max(1));
    let half = elapsed / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / elapsed
    } else {
        (numerator - half) / elapsed
    };
    let clamped = i64::try_from(rounded).unwrap_or(if rounded > 0 { i64::MAX } else { i64::MIN });
    Money::from_cents(clamped)
}
