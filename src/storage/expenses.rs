//! Expense store
//!
//! Owns the canonical, newest-first list of expenses and is the only writer of
//! the expenses key. The in-memory list is the source of truth for the
//! session: storage failures are logged and swallowed, never returned.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::error::SpendError;
use crate::models::{Expense, ExpenseFilter, ExpenseId, NewExpense};

use super::kv::KeyValueStore;
use super::EXPENSES_KEY;

#[derive(Debug, Default)]
struct ExpenseState {
    expenses: Vec<Expense>,
    loaded: bool,
}

pub struct ExpenseStore {
    kv: Arc<dyn KeyValueStore>,
    state: RwLock<ExpenseState>,
}

impl ExpenseStore {
    /// Create an unloaded store; the first access reads from `kv`
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            state: RwLock::new(ExpenseState::default()),
        }
    }

    /// (Re)read the persisted collection, replacing the in-memory list
    pub fn load(&self) {
        let mut state = self.write_state();
        state.expenses = self.read_persisted();
        state.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.read_state().loaded
    }

    /// Record a new expense at the head of the list and persist
    ///
    /// Callers are expected to have validated `data` (see
    /// `ExpenseService::add`); the store accepts what it is given.
    pub fn add(&self, data: NewExpense) -> Expense {
        let expense = Expense::from_new(data);
        let mut state = self.loaded_state();
        state.expenses.insert(0, expense.clone());
        self.persist(&state.expenses);
        debug!(id = %expense.id, amount = %expense.amount, "Added expense");
        expense
    }

    /// Remove the expense with `id`; returns whether anything was removed
    pub fn delete(&self, id: &ExpenseId) -> bool {
        let mut state = self.loaded_state();
        let before = state.expenses.len();
        state.expenses.retain(|e| &e.id != id);
        let removed = state.expenses.len() != before;
        self.persist(&state.expenses);
        if removed {
            debug!(%id, "Deleted expense");
        }
        removed
    }

    /// Expenses matching `filter`, in collection order
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.ensure_loaded();
        filter.apply(&self.read_state().expenses)
    }

    /// Every expense, newest first
    pub fn all(&self) -> Vec<Expense> {
        self.ensure_loaded();
        self.read_state().expenses.clone()
    }

    pub fn get(&self, id: &ExpenseId) -> Option<Expense> {
        self.ensure_loaded();
        self.read_state()
            .expenses
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.ensure_loaded();
        self.read_state().expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_loaded(&self) {
        drop(self.loaded_state());
    }

    fn loaded_state(&self) -> RwLockWriteGuard<'_, ExpenseState> {
        let mut state = self.write_state();
        if !state.loaded {
            state.expenses = self.read_persisted();
            state.loaded = true;
        }
        state
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ExpenseState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ExpenseState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_persisted(&self) -> Vec<Expense> {
        match self.kv.get(EXPENSES_KEY) {
            Ok(Some(raw)) => {
                let expenses = decode_expenses(&raw);
                debug!(count = expenses.len(), "Loaded expenses");
                expenses
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read expenses; starting with an empty list");
                Vec::new()
            }
        }
    }

    fn persist(&self, expenses: &[Expense]) {
        let result = serde_json::to_string(expenses)
            .map_err(SpendError::from)
            .and_then(|json| self.kv.set(EXPENSES_KEY, &json));
        if let Err(e) = result {
            warn!(error = %e, "Failed to save expenses; keeping in-memory state");
        }
    }
}

/// Decode the persisted array one record at a time
///
/// Records that don't parse (bad date, unknown category, missing amount) are
/// skipped so a single bad entry can't hide the rest of the log.
fn decode_expenses(raw: &str) -> Vec<Expense> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "Stored expenses are not a JSON array; starting with an empty list");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(expense) => Some(expense),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed expense record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, MonthKey};
    use crate::storage::kv::MemoryStore;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn new_expense(units: i64, category: Category, day: &str) -> NewExpense {
        NewExpense::new(Money::from_units(units), category, date(day))
    }

    fn store_with(kv: Arc<MemoryStore>) -> ExpenseStore {
        ExpenseStore::new(kv)
    }

    #[test]
    fn test_missing_key_starts_empty() {
        let store = store_with(Arc::new(MemoryStore::new()));
        assert!(!store.is_loaded());
        assert!(store.is_empty());
        assert!(store.is_loaded());
    }

    #[test]
    fn test_add_inserts_at_head_and_persists() {
        let kv = Arc::new(MemoryStore::new());
        let store = store_with(kv.clone());

        let first = store.add(new_expense(500, Category::Food, "2024-01-05"));
        let second = store.add(new_expense(300, Category::Travel, "2024-01-10"));

        let all = store.filter(&ExpenseFilter::all());
        assert_eq!(all[0], second);
        assert_eq!(all[1], first);
        assert_ne!(first.id, second.id);

        let reopened = store_with(kv);
        assert_eq!(reopened.all(), all);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = store_with(Arc::new(MemoryStore::new()));
        let keep = store.add(new_expense(100, Category::Bills, "2024-01-01"));
        let gone = store.add(new_expense(200, Category::Bills, "2024-01-02"));

        assert!(store.delete(&gone.id));
        let after_once = store.all();
        assert!(!store.delete(&gone.id));
        assert_eq!(store.all(), after_once);
        assert_eq!(after_once, vec![keep]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let store = store_with(Arc::new(MemoryStore::new()));
        store.add(new_expense(100, Category::Bills, "2024-01-01"));
        assert!(!store.delete(&ExpenseId::from("nope")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let store = store_with(Arc::new(MemoryStore::new()));
        store.add(new_expense(500, Category::Food, "2024-01-05"));
        store.add(new_expense(300, Category::Travel, "2024-01-10"));
        store.add(new_expense(700, Category::Food, "2024-02-01"));

        let jan: MonthKey = "2024-01".parse().unwrap();
        let food_jan = store.filter(&ExpenseFilter::all().category(Category::Food).month(jan));
        assert_eq!(food_jan.len(), 1);
        assert_eq!(food_jan[0].amount, Money::from_units(500));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_corrupt_payload_starts_empty() {
        let kv = Arc::new(MemoryStore::new().with_value(EXPENSES_KEY, "{oops"));
        let store = store_with(kv);
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let raw = r#"[
            {"id":"1","amount":500,"category":"Food","date":"2024-01-05","notes":""},
            {"id":"2","amount":300,"category":"Pets","date":"2024-01-10","notes":""},
            {"id":"3","amount":200,"category":"Bills","date":"2024-13-45","notes":""},
            {"id":"4","amount":12.5,"category":"Health","date":"2024-02-01"}
        ]"#;
        let store = store_with(Arc::new(MemoryStore::new().with_value(EXPENSES_KEY, raw)));

        let ids: Vec<String> = store.all().iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, ["1", "4"]);
    }

    #[test]
    fn test_unreadable_storage_does_not_fail_callers() {
        let kv = Arc::new(MemoryStore::new());
        kv.set_failing(true);
        let store = store_with(kv.clone());

        let added = store.add(new_expense(500, Category::Food, "2024-01-05"));
        assert_eq!(store.all(), vec![added.clone()]);

        // Nothing reached storage while it was failing
        kv.set_failing(false);
        assert_eq!(kv.get(EXPENSES_KEY).unwrap(), None);

        // The next mutation writes the whole in-memory list
        store.add(new_expense(100, Category::Food, "2024-01-06"));
        let reopened = store_with(kv);
        assert_eq!(reopened.len(), 2);
    }

    #[test]
    fn test_load_rereads_storage() {
        let kv = Arc::new(MemoryStore::new());
        let store = store_with(kv.clone());
        assert!(store.is_empty());

        let other = store_with(kv);
        other.add(new_expense(100, Category::Shopping, "2024-05-01"));

        assert!(store.is_empty());
        store.load();
        assert_eq!(store.len(), 1);
    }
}
