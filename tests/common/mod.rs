#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use expense_planner::{ExpensePlanner, FixedClock};

/// Date every planner in the integration suite treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

pub fn yesterday() -> NaiveDate {
    today() - Duration::days(1)
}

pub fn tomorrow() -> NaiveDate {
    today() + Duration::days(1)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Planner pinned to [`today`].
pub fn planner() -> ExpensePlanner<FixedClock> {
    ExpensePlanner::with_clock(FixedClock(today()))
}
