//! Budget service
//!
//! Validates budget changes and builds the budget status report.

use tracing::info;

use crate::clock::Clock;
use crate::error::{SpendError, SpendResult};
use crate::models::Money;
use crate::reports::{BudgetStatus, SpendingOverview};
use crate::storage::Storage;

/// Service for the monthly budget
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The current monthly budget
    pub fn get(&self) -> Money {
        self.storage.budget.get()
    }

    /// Replace the monthly budget; it must be positive and at most `Money::MAX_AMOUNT`
    pub fn set(&self, amount: Money) -> SpendResult<()> {
        if !amount.is_positive() {
            return Err(SpendError::Validation(format!(
                "Budget must be a positive amount (got {})",
                amount
            )));
        }
        if amount > Money::MAX_AMOUNT {
            return Err(SpendError::Validation(format!(
                "Budget must be at most {} (got {})",
                Money::MAX_AMOUNT,
                amount
            )));
        }

        let previous = self.storage.budget.get();
        self.storage.budget.set_budget(amount);
        info!(from = %previous, to = %amount, "Updated monthly budget");
        Ok(())
    }

    /// Where the current month stands against the budget
    pub fn status(&self, clock: &dyn Clock) -> BudgetStatus {
        let overview = SpendingOverview::from_storage(self.storage, clock);
        BudgetStatus::generate(&overview, clock.today())
    }
}
