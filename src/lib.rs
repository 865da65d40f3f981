//! SmartSpend - personal expense tracker
//!
//! This library provides the core of the SmartSpend expense tracker: an
//! append-mostly log of categorized expenses, a single monthly budget, and
//! the aggregates derived from them for the dashboard and analytics views.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, amounts, months)
//! - `storage`: Key-value persistence for the expense log and the budget
//! - `reports`: Aggregation and the derived overview, budget and analytics views
//! - `services`: Validation and business logic over storage
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `smartspend` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use smartspend::config::{Settings, SpendPaths};
//! use smartspend::storage::Storage;
//!
//! let paths = SpendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings)?;
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendError, SpendResult};
