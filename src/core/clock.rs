use std::sync::Arc;

use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so planner checks stay deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the calendar date the planner treats as "today".
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local system calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!((&clock).today(), date);
        assert_eq!(Arc::new(clock).today(), date);
    }

    #[test]
    fn system_clock_matches_local_calendar() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(today >= before && today <= after);
    }
}
