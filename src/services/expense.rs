//! Expense service
//!
//! Business logic on top of the expense store: input validation, lookup by
//! ID string, and filtered listing.

use tracing::info;

use crate::error::{SpendError, SpendResult};
use crate::models::{Expense, ExpenseFilter, ExpenseId, MonthKey, NewExpense};
use crate::reports::aggregate::distinct_months;
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a new expense
    ///
    /// Notes are trimmed before the length check. Nothing reaches the store
    /// unless validation passes.
    pub fn add(&self, mut data: NewExpense) -> SpendResult<Expense> {
        data.notes = data.notes.trim().to_string();
        data.validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        let expense = self.storage.expenses.add(data);
        info!(id = %expense.id, category = %expense.category, "Recorded expense");
        Ok(expense)
    }

    /// Remove an expense; returns whether one was removed
    pub fn delete(&self, id: &ExpenseId) -> bool {
        self.storage.expenses.delete(id)
    }

    /// Remove an expense, failing when the ID is unknown
    pub fn remove(&self, identifier: &str) -> SpendResult<Expense> {
        let id = ExpenseId::from(identifier.trim());
        let expense = self
            .storage
            .expenses
            .get(&id)
            .ok_or_else(|| SpendError::expense_not_found(identifier))?;
        self.storage.expenses.delete(&id);
        Ok(expense)
    }

    /// Find an expense by ID string
    pub fn find(&self, identifier: &str) -> Option<Expense> {
        self.storage.expenses.get(&ExpenseId::from(identifier.trim()))
    }

    /// Expenses matching `filter`, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.storage.expenses.filter(filter)
    }

    /// Months that have at least one expense, newest first
    pub fn months(&self) -> Vec<MonthKey> {
        distinct_months(&self.storage.expenses.all())
    }
}
