#![doc(test(attr(deny(warnings))))]

//! Expense Planner keeps an in-memory ledger of expenses and checks them against a
//! monthly ceiling and per-category budgets.
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_planner::{Category, ExpensePlanner, FixedClock};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
//! let mut planner = ExpensePlanner::with_clock(FixedClock(today));
//! planner.set_monthly_budget(1000.0).unwrap();
//! planner.add_expense("Groceries", 120.0, Category::Food, today).unwrap();
//! assert_eq!(planner.remaining_monthly_budget(2024, 3).unwrap(), 880.0);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

pub use crate::config::{BudgetSettings, SettingsManager};
pub use crate::core::{
    CategoryBudgetStatus, Clock, ExpensePlanner, ExpenseSummary, FixedClock, SharedPlanner,
    SystemClock,
};
pub use crate::domain::{Category, CategoryBudgets, Displayable, Expense, Identifiable};
pub use crate::errors::{ConfigError, PlannerError, PlannerResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Planner tracing initialized.");
    });
}
