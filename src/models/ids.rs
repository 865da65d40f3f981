//! Expense identifiers
//!
//! IDs are opaque strings. New ones combine the creation time in milliseconds
//! with a random suffix (`1718000000000-3f9a1c2`), which is the shape the
//! browser version of the tracker wrote, so existing data keeps its IDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of the random suffix appended to the timestamp
const SUFFIX_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a fresh ID from the current time and a random suffix
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let random = Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", millis, &random[..SUFFIX_LEN]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ExpenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
