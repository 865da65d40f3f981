//! Reports for SmartSpend
//!
//! Aggregation over the expense log and the derived views built on it:
//! the dashboard overview, budget status, and spending analytics.

pub mod aggregate;
pub mod budget_status;
pub mod overview;
pub mod spending;

pub use aggregate::CategoryTotal;
pub use budget_status::BudgetStatus;
pub use overview::{MonthTotal, SpendingOverview, TREND_MONTHS};
pub use spending::{CategoryShare, SpendingReport, TrendDirection};
