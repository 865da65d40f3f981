//! Spending analytics
//!
//! This month against last month, the share of each category in this month's
//! spend, and the six-month series.

use crate::display::report::{format_bar, format_percentage, separator};
use crate::models::{Category, Money, MonthKey};

use super::overview::{MonthTotal, SpendingOverview};

/// Direction of the month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 0.0 {
            Self::Up
        } else if percent < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "–",
        }
    }
}

/// One category's slice of the month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Percent of the month's total spend
    pub percentage: f64,
}

#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub month: MonthKey,
    pub current_total: Money,
    pub previous_total: Money,
    pub trend_percent: f64,
    pub direction: TrendDirection,
    /// Nonzero categories, largest first; equal totals keep enumeration order
    pub categories: Vec<CategoryShare>,
    pub monthly: Vec<MonthTotal>,
}

impl SpendingReport {
    pub fn generate(overview: &SpendingOverview) -> Self {
        let mut categories: Vec<CategoryShare> = overview
            .category_breakdown
            .iter()
            .map(|(category, total)| CategoryShare {
                category: *category,
                total: *total,
                percentage: total.percent_of(overview.current_month_total),
            })
            .collect();
        // Stable sort over a BTreeMap walk keeps enumeration order for ties
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            month: overview.month,
            current_total: overview.current_month_total,
            previous_total: overview.previous_month_total(),
            trend_percent: overview.trend_percent,
            direction: TrendDirection::from_percent(overview.trend_percent),
            categories,
            monthly: overview.monthly_trend.clone(),
        }
    }

    pub fn top_categories(&self, limit: usize) -> &[CategoryShare] {
        &self.categories[..limit.min(self.categories.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("Spending Analytics: {}\n", self.month.label()));
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "This month: {}   Last month: {}   {} {:.1}%\n\n",
            money(self.current_total),
            money(self.previous_total),
            self.direction.arrow(),
            self.trend_percent.abs()
        ));

        output.push_str("Category Breakdown (This Month)\n");
        if self.categories.is_empty() {
            output.push_str("  No spending recorded this month.\n");
        }
        for share in &self.categories {
            output.push_str(&format!(
                "  {:<20} {:>12} {:>6}  {}\n",
                share.category.label(),
                money(share.total),
                format_percentage(share.percentage),
                format_bar(share.percentage, 100.0, 20)
            ));
        }

        output.push_str("\nLast 6 Months\n");
        let max = self
            .monthly
            .iter()
            .map(|m| m.total)
            .max()
            .unwrap_or_default();
        for month in &self.monthly {
            output.push_str(&format!(
                "  {:<8} {:>12}  {}\n",
                month.label,
                money(month.total),
                format_bar(month.total.to_f64(), max.to_f64(), 30)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Expense, ExpenseId};
    use chrono::NaiveDate;

    fn expense(units: i64, category: Category, date: &str) -> Expense {
        Expense {
            id: ExpenseId::generate(),
            amount: Money::from_units(units),
            category,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            notes: String::new(),
        }
    }

    fn report(expenses: &[Expense]) -> SpendingReport {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        SpendingReport::generate(&SpendingOverview::generate(expenses, Money::zero(), &clock))
    }

    #[test]
    fn test_shares_sorted_largest_first() {
        let r = report(&[
            expense(100, Category::Health, "2024-03-01"),
            expense(300, Category::Food, "2024-03-02"),
            expense(100, Category::Bills, "2024-03-03"),
            expense(999, Category::Food, "2024-02-03"),
        ]);

        let order: Vec<Category> = r.categories.iter().map(|s| s.category).collect();
        assert_eq!(order, [Category::Food, Category::Bills, Category::Health]);
        assert!((r.categories[0].percentage - 60.0).abs() < 1e-9);
        assert!((r.categories[1].percentage - 20.0).abs() < 1e-9);

        let total: f64 = r.categories.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(r.top_categories(1).len(), 1);
        assert_eq!(r.top_categories(10).len(), 3);
    }

    #[test]
    fn test_direction() {
        let up = report(&[
            expense(200, Category::Food, "2024-03-01"),
            expense(100, Category::Food, "2024-02-01"),
        ]);
        assert_eq!(up.direction, TrendDirection::Up);
        assert!((up.trend_percent - 100.0).abs() < 1e-9);

        let down = report(&[
            expense(50, Category::Food, "2024-03-01"),
            expense(100, Category::Food, "2024-02-01"),
        ]);
        assert_eq!(down.direction, TrendDirection::Down);

        let flat = report(&[expense(50, Category::Food, "2024-03-01")]);
        assert_eq!(flat.direction, TrendDirection::Flat);
    }

    #[test]
    fn test_terminal_format() {
        let r = report(&[
            expense(1500, Category::Bills, "2024-03-01"),
            expense(1000, Category::Bills, "2024-02-01"),
        ]);
        let output = r.format_terminal("₹");
        assert!(output.contains("Spending Analytics: Mar 2024"));
        assert!(output.contains("Bills & Utilities"));
        assert!(output.contains("₹1,500"));
        assert!(output.contains("▲ 50.0%"));
        assert!(output.contains("Oct 23"));
    }

    #[test]
    fn test_terminal_format_empty_month() {
        let output = report(&[]).format_terminal("$");
        assert!(output.contains("No spending recorded this month."));
    }
}
