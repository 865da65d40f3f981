//! Configuration module for SmartSpend
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendPaths;
pub use settings::{Settings, DEFAULT_BUDGET};
