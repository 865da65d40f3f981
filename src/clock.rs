//! Wall-clock access
//!
//! Aggregates that depend on "this month" take a `Clock` so tests can pin the
//! date.

use chrono::NaiveDate;

use crate::models::MonthKey;

pub trait Clock {
    /// Today's date in the local timezone
    fn today(&self) -> NaiveDate;

    /// The month containing today
    fn current_month(&self) -> MonthKey {
        MonthKey::from_date(self.today())
    }
}

/// The system clock, read in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
