//! Expense list filtering
//!
//! A filter is view state only; it is never persisted. `None` on either axis
//! means "All".

use super::category::{Category, UnknownCategory};
use super::expense::Expense;
use super::month::{InvalidMonthKey, MonthKey};

/// The token that selects every category or every month
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: Option<Category>,
    pub month: Option<MonthKey>,
}

impl ExpenseFilter {
    /// A filter that matches everything
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        let category_match = self.category.map_or(true, |c| expense.category == c);
        let month_match = self.month.map_or(true, |m| expense.month_key() == m);
        category_match && month_match
    }

    /// Apply to an ordered collection, keeping relative order
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Parse a category selector where "All" (any case) means no restriction
pub fn parse_category_filter(s: &str) -> Result<Option<Category>, UnknownCategory> {
    if s.trim().eq_ignore_ascii_case(ALL) {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

/// Parse a month selector where "All" (any case) means no restriction
pub fn parse_month_filter(s: &str) -> Result<Option<MonthKey>, InvalidMonthKey> {
    if s.trim().eq_ignore_ascii_case(ALL) {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn expense(id: &str, category: Category, date: &str) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            amount: Money::from_units(100),
            category,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            notes: String::new(),
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("c", Category::Food, "2024-02-01"),
            expense("b", Category::Travel, "2024-01-10"),
            expense("a", Category::Food, "2024-01-05"),
        ]
    }

    fn ids(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_all_matches_everything_in_order() {
        let all = ExpenseFilter::all().apply(&sample());
        assert_eq!(ids(&all), ["c", "b", "a"]);
    }

    #[test]
    fn test_category_and_month_combine() {
        let jan: MonthKey = "2024-01".parse().unwrap();
        let expenses = sample();

        let food = ExpenseFilter::all().category(Category::Food).apply(&expenses);
        assert_eq!(ids(&food), ["c", "a"]);

        let january = ExpenseFilter::all().month(jan).apply(&expenses);
        assert_eq!(ids(&january), ["b", "a"]);

        let food_in_jan = ExpenseFilter::all()
            .category(Category::Food)
            .month(jan)
            .apply(&expenses);
        assert_eq!(ids(&food_in_jan), ["a"]);

        let none = ExpenseFilter::all()
            .category(Category::Health)
            .apply(&expenses);
        assert!(none.is_empty());
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!(parse_category_filter("All").unwrap(), None);
        assert_eq!(parse_category_filter("all").unwrap(), None);
        assert_eq!(
            parse_category_filter("food").unwrap(),
            Some(Category::Food)
        );
        assert!(parse_category_filter("Pets").is_err());

        assert_eq!(parse_month_filter("ALL").unwrap(), None);
        assert_eq!(
            parse_month_filter("2024-01").unwrap(),
            Some("2024-01".parse().unwrap())
        );
        assert!(parse_month_filter("January").is_err());
    }
}
