//! Storage layer for SmartSpend
//!
//! Two independent keys under a fixed namespace hold everything that is
//! persisted: the expense list and the monthly budget. Both are plain JSON.

pub mod budget;
pub mod expenses;
pub mod file_io;
pub mod kv;

pub use budget::BudgetStore;
pub use expenses::ExpenseStore;
pub use file_io::{read_if_exists, write_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use crate::config::{Settings, SpendPaths};
use crate::error::SpendError;

/// Key holding the JSON array of expenses, newest first
pub const EXPENSES_KEY: &str = "smartspend-expenses";

/// Key holding the monthly budget as a JSON number
pub const BUDGET_KEY: &str = "smartspend-budget";

/// Both stores over one shared key-value backend
pub struct Storage {
    pub expenses: ExpenseStore,
    pub budget: BudgetStore,
}

impl Storage {
    pub fn new(kv: Arc<dyn KeyValueStore>, settings: &Settings) -> Self {
        Self {
            expenses: ExpenseStore::new(kv.clone()),
            budget: BudgetStore::new(kv, settings.default_budget),
        }
    }

    /// File-backed storage under the data directory
    pub fn open(paths: &SpendPaths, settings: &Settings) -> Result<Self, SpendError> {
        paths.ensure_directories()?;
        Ok(Self::new(
            Arc::new(FileStore::new(paths.data_dir())),
            settings,
        ))
    }

    /// Storage that lives only as long as this value
    pub fn in_memory(settings: &Settings) -> Self {
        Self::new(Arc::new(MemoryStore::new()), settings)
    }

    /// Read both keys now rather than on first access
    pub fn load_all(&self) {
        self.expenses.load();
        self.budget.load();
    }
}
