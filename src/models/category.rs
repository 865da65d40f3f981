//! Spending categories
//!
//! The category set is closed. Enumeration order (`Category::ALL`) is the
//! order used for display and for breaking ties between equal totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Education,
    Health,
    Others,
}

impl Category {
    pub const COUNT: usize = 7;

    /// Every category, in enumeration order
    pub const ALL: [Category; Self::COUNT] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Education,
        Category::Health,
        Category::Others,
    ];

    /// The stored name (`"Food"`, `"Bills"`, ...)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Others => "Others",
        }
    }

    /// Human-friendly label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills & Utilities",
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Others => "Others",
        }
    }

    /// Position in `Category::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive; accepts either the stored name or the label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.name().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
