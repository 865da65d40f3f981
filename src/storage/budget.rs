//! Budget store
//!
//! Holds the single monthly budget figure. No validation happens here; the
//! store keeps whatever number it is handed.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::error::SpendError;
use crate::models::Money;

use super::kv::KeyValueStore;
use super::BUDGET_KEY;

#[derive(Debug)]
struct BudgetState {
    value: Money,
    loaded: bool,
}

pub struct BudgetStore {
    kv: Arc<dyn KeyValueStore>,
    default: Money,
    state: RwLock<BudgetState>,
}

impl BudgetStore {
    /// Create an unloaded store that falls back to `default`
    pub fn new(kv: Arc<dyn KeyValueStore>, default: Money) -> Self {
        Self {
            kv,
            default,
            state: RwLock::new(BudgetState {
                value: default,
                loaded: false,
            }),
        }
    }

    /// (Re)read the persisted budget
    pub fn load(&self) {
        let mut state = self.write_state();
        state.value = self.read_persisted();
        state.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .loaded
    }

    /// The current monthly budget
    pub fn get(&self) -> Money {
        self.loaded_state().value
    }

    /// Replace the budget and persist it immediately
    pub fn set_budget(&self, value: Money) {
        let mut state = self.write_state();
        state.value = value;
        state.loaded = true;

        let result = serde_json::to_string(&value)
            .map_err(SpendError::from)
            .and_then(|json| self.kv.set(BUDGET_KEY, &json));
        match result {
            Ok(()) => debug!(budget = %value, "Saved budget"),
            Err(e) => warn!(error = %e, "Failed to save budget; keeping in-memory value"),
        }
    }

    fn loaded_state(&self) -> RwLockWriteGuard<'_, BudgetState> {
        let mut state = self.write_state();
        if !state.loaded {
            state.value = self.read_persisted();
            state.loaded = true;
        }
        state
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, BudgetState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_persisted(&self) -> Money {
        let raw = match self.kv.get(BUDGET_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return self.default,
            Err(e) => {
                warn!(error = %e, "Failed to read budget; using default");
                return self.default;
            }
        };

        match serde_json::from_str::<Money>(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Stored budget is not a number; using default");
                self.default
            }
        }
    }
}
