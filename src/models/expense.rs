//! Expense model
//!
//! An expense is immutable once recorded: it is created with a fresh ID and
//! only ever removed, never edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use super::month::MonthKey;

/// Maximum length of the free-text notes, in characters
pub const MAX_NOTES_LEN: usize = 200;

/// A recorded spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Always positive for expenses that went through validation
    pub amount: Money,

    pub category: Category,

    /// The day the money was spent (not when it was recorded)
    pub date: NaiveDate,

    #[serde(default)]
    pub notes: String,
}

impl Expense {
    /// Assign a new ID to the given fields
    pub fn from_new(data: NewExpense) -> Self {
        Self {
            id: ExpenseId::generate(),
            amount: data.amount,
            category: data.category,
            date: data.date,
            notes: data.notes,
        }
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Expense fields without an ID, as supplied by the caller of `add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub notes: String,
}

impl NewExpense {
    pub fn new(amount: Money, category: Category, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Check the invariants a stored expense must satisfy
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        let notes_len = self.notes.chars().count();
        if notes_len > MAX_NOTES_LEN {
            return Err(ExpenseValidationError::NotesTooLong(notes_len));
        }

        Ok(())
    }
}

/// Validation errors for new expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    NotesTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount must be at most {} (got {})",
                Money::MAX_AMOUNT,
                amount
            ),
            Self::NotesTooLong(len) => write!(
                f,
                "Notes must be under {} characters (got {})",
                MAX_NOTES_LEN, len
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_from_new_assigns_id() {
        let data = NewExpense::new(Money::from_units(500), Category::Food, jan_5())
            .with_notes("groceries");
        let expense = Expense::from_new(data.clone());

        assert!(!expense.id.as_str().is_empty());
        assert_eq!(expense.amount, data.amount);
        assert_eq!(expense.notes, "groceries");
        assert_eq!(expense.month_key().to_string(), "2024-01");
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        let zero = NewExpense::new(Money::zero(), Category::Food, jan_5());
        assert_eq!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );

        let negative = NewExpense::new(Money::from_units(-10), Category::Food, jan_5());
        assert!(negative.validate().is_err());

        let ok = NewExpense::new(Money::from_cents(1), Category::Food, jan_5());
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_validate_caps_amount() {
        let max = NewExpense::new(Money::MAX_AMOUNT, Category::Bills, jan_5());
        assert!(max.validate().is_ok());

        let huge = Money::from_units(4_000_000_000_000_000);
        let over = NewExpense::new(huge, Category::Bills, jan_5());
        assert_eq!(
            over.validate(),
            Err(ExpenseValidationError::AmountTooLarge(huge))
        );
    }

    #[test]
    fn test_validate_notes_length_counts_chars() {
        let at_limit = NewExpense::new(Money::from_units(1), Category::Others, jan_5())
            .with_notes("é".repeat(MAX_NOTES_LEN));
        assert!(at_limit.validate().is_ok());

        let over = NewExpense::new(Money::from_units(1), Category::Others, jan_5())
            .with_notes("x".repeat(MAX_NOTES_LEN + 1));
        assert_eq!(
            over.validate(),
            Err(ExpenseValidationError::NotesTooLong(MAX_NOTES_LEN + 1))
        );
    }

    #[test]
    fn test_json_field_names() {
        let expense = Expense {
            id: ExpenseId::from("1704067200000-abc1234"),
            amount: Money::from_units(500),
            category: Category::Food,
            date: jan_5(),
            notes: String::new(),
        };
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1704067200000-abc1234",
                "amount": 500,
                "category": "Food",
                "date": "2024-01-05",
                "notes": ""
            })
        );
    }

    #[test]
    fn test_missing_notes_defaults_to_empty() {
        let json = r#"{"id":"a","amount":12.5,"category":"Travel","date":"2024-03-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.notes, "");
        assert_eq!(expense.amount, Money::from_cents(1250));
    }
}
