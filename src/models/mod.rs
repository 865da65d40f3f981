//! Core data models for SmartSpend
//!
//! This module contains the data structures of the expense domain: expenses,
//! categories, amounts, month keys and list filters.

pub mod category;
pub mod expense;
pub mod filter;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, ExpenseValidationError, NewExpense, MAX_NOTES_LEN};
pub use filter::{parse_category_filter, parse_month_filter, ExpenseFilter, ALL};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL};
pub use month::{InvalidMonthKey, MonthKey};
