//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for terminal
//! display, including tables and bar charts.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_expense_details, format_expense_list};
pub use summary::format_summary;
