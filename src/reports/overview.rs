//! Spending overview
//!
//! Everything the dashboard shows, derived from the full expense list, the
//! budget, and today's date. Nothing is cached: build a new overview after
//! each mutation.

use std::collections::BTreeMap;

use crate::clock::Clock;
use crate::models::{Category, Expense, Money, MonthKey};
use crate::storage::Storage;

use super::aggregate::{
    category_breakdown, distinct_months, expenses_in_month, highest_category, total_for_month,
    CategoryTotal,
};

/// Number of months in the trend series, including the current one
pub const TREND_MONTHS: usize = 6;

/// Spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: MonthKey,
    /// Short chart label, e.g. "Jan 24"
    pub label: String,
    pub total: Money,
}

#[derive(Debug, Clone)]
pub struct SpendingOverview {
    /// The month "now" falls in
    pub month: MonthKey,
    pub budget: Money,
    pub current_month_total: Money,
    /// Current-month expenses, newest first
    pub current_month_expenses: Vec<Expense>,
    pub highest_category: Option<CategoryTotal>,
    pub total_transactions: usize,
    /// Current-month spend per category, nonzero entries only
    pub category_breakdown: BTreeMap<Category, Money>,
    /// The last `TREND_MONTHS` months, oldest first, zero months included
    pub monthly_trend: Vec<MonthTotal>,
    /// Budget minus current-month spend; negative means overspent
    pub remaining_budget: Money,
    /// Month-over-month change in percent; 0 when last month had no spend
    pub trend_percent: f64,
    /// Months that have expenses, newest first (for the month filter)
    pub available_months: Vec<MonthKey>,
}

impl SpendingOverview {
    pub fn generate(expenses: &[Expense], budget: Money, clock: &dyn Clock) -> Self {
        let month = clock.current_month();

        let current_month_expenses = expenses_in_month(expenses, month);
        let current_month_total = total_for_month(expenses, month);

        let monthly_trend: Vec<MonthTotal> = month
            .trailing(TREND_MONTHS)
            .into_iter()
            .map(|m| MonthTotal {
                month: m,
                label: m.short_label(),
                total: total_for_month(expenses, m),
            })
            .collect();

        let previous_total = second_to_last(&monthly_trend);

        Self {
            month,
            budget,
            current_month_total,
            highest_category: highest_category(&current_month_expenses),
            total_transactions: current_month_expenses.len(),
            category_breakdown: category_breakdown(&current_month_expenses),
            current_month_expenses,
            monthly_trend,
            remaining_budget: budget - current_month_total,
            trend_percent: trend_percent(current_month_total, previous_total),
            available_months: distinct_months(expenses),
        }
    }

    /// Build from both stores
    pub fn from_storage(storage: &Storage, clock: &dyn Clock) -> Self {
        Self::generate(&storage.expenses.all(), storage.budget.get(), clock)
    }

    /// Spending in the month before the current one
    pub fn previous_month_total(&self) -> Money {
        second_to_last(&self.monthly_trend)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget.is_negative()
    }
}

fn second_to_last(series: &[MonthTotal]) -> Money {
    series
        .iter()
        .rev()
        .nth(1)
        .map(|m| m.total)
        .unwrap_or_default()
}

/// Percent change from `previous` to `current`, or 0 when `previous` is zero
pub fn trend_percent(current: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        0.0
    } else {
        (current - previous).cents() as f64 / previous.cents() as f64 * 100.0
    }
}
