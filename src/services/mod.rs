//! Service layer for SmartSpend
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation before anything is persisted.

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::ExpenseService;
