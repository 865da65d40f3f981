//! Aggregation over expense lists
//!
//! Pure functions: no storage, no clock beyond what the caller passes in.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::models::{Category, Expense, Money, MonthKey};

/// A category together with the amount spent in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Grouping key for a date (`YYYY-MM`)
pub fn month_key(date: NaiveDate) -> MonthKey {
    MonthKey::from_date(date)
}

/// Grouping key for today, in the clock's local timezone
pub fn current_month_key(clock: &dyn Clock) -> MonthKey {
    clock.current_month()
}

/// Sum of amounts in `category`; zero when nothing matches
pub fn total_for_category(expenses: &[Expense], category: Category) -> Money {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// Sum of amounts dated within `month`; zero when nothing matches
pub fn total_for_month(expenses: &[Expense], month: MonthKey) -> Money {
    expenses
        .iter()
        .filter(|e| e.month_key() == month)
        .map(|e| e.amount)
        .sum()
}

/// Expenses dated within `month`, in their original order
pub fn expenses_in_month(expenses: &[Expense], month: MonthKey) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.month_key() == month)
        .cloned()
        .collect()
}

/// Per-category sums, indexed by `Category::index`
pub fn category_totals(expenses: &[Expense]) -> [Money; Category::COUNT] {
    let mut totals = [Money::zero(); Category::COUNT];
    for expense in expenses {
        totals[expense.category.index()] += expense.amount;
    }
    totals
}

/// Per-category sums, keeping only categories with a nonzero total
pub fn category_breakdown(expenses: &[Expense]) -> BTreeMap<Category, Money> {
    let totals = category_totals(expenses);
    Category::ALL
        .into_iter()
        .filter(|c| !totals[c.index()].is_zero())
        .map(|c| (c, totals[c.index()]))
        .collect()
}

/// The category with the largest total
///
/// Categories are visited in enumeration order and a later one replaces the
/// current leader only when its total is strictly greater, so ties go to the
/// category listed first in `Category::ALL`. Returns `None` for an empty list.
pub fn highest_category(expenses: &[Expense]) -> Option<CategoryTotal> {
    let totals = category_totals(expenses);
    let mut present = [false; Category::COUNT];
    for expense in expenses {
        present[expense.category.index()] = true;
    }

    let mut best: Option<CategoryTotal> = None;
    for category in Category::ALL {
        if !present[category.index()] {
            continue;
        }
        let total = totals[category.index()];
        if best.map_or(true, |current| total > current.total) {
            best = Some(CategoryTotal { category, total });
        }
    }
    best
}

/// Every month that has at least one expense, newest first, without duplicates
pub fn distinct_months(expenses: &[Expense]) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = expenses.iter().map(Expense::month_key).collect();
    months.into_iter().rev().collect()
}
