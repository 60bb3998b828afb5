use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use crate::core::clock::{Clock, SystemClock};
use crate::core::planner::ExpensePlanner;
use crate::core::summary::{CategoryBudgetStatus, ExpenseSummary};
use crate::domain::{Category, Expense};
use crate::errors::PlannerResult;

/// Planner handle that can be cloned across threads.
///
/// One mutex guards the whole planner and is held for the full duration of each call.
#[derive(Debug)]
pub struct SharedPlanner<C: Clock = SystemClock> {
    inner: Arc<Mutex<ExpensePlanner<C>>>,
}

impl<C: Clock> Clone for SharedPlanner<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedPlanner<SystemClock> {
    fn default() -> Self {
        Self::new(ExpensePlanner::new())
    }
}

impl<C: Clock> From<ExpensePlanner<C>> for SharedPlanner<C> {
    fn from(planner: ExpensePlanner<C>) -> Self {
        Self::new(planner)
    }
}

impl<C: Clock> SharedPlanner<C> {
    pub fn new(planner: ExpensePlanner<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(planner)),
        }
    }

    /// Runs `f` with exclusive access, for reads that must see one consistent state.
    pub fn with_planner<R>(&self, f: impl FnOnce(&mut ExpensePlanner<C>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add_expense(
        &self,
        description: &str,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> PlannerResult<String> {
        self.lock().add_expense(description, amount, category, date)
    }

    pub fn remove_expense(&self, id: &str) -> PlannerResult<bool> {
        self.lock().remove_expense(id)
    }

    pub fn set_monthly_budget(&self, amount: f64) -> PlannerResult<()> {
        self.lock().set_monthly_budget(amount)
    }

    pub fn set_category_budget(&self, category: Category, amount: f64) -> PlannerResult<()> {
        self.lock().set_category_budget(category, amount)
    }

    pub fn total_expenses(&self, start: NaiveDate, end: NaiveDate) -> PlannerResult<f64> {
        self.lock().total_expenses(start, end)
    }

    pub fn expenses_by_category(&self, category: Category) -> Vec<Expense> {
        self.lock().expenses_by_category(category)
    }

    pub fn remaining_monthly_budget(&self, year: i32, month: u32) -> PlannerResult<f64> {
        self.lock().remaining_monthly_budget(year, month)
    }

    pub fn is_category_budget_exceeded(&self, category: Category) -> bool {
        self.lock().is_category_budget_exceeded(category)
    }

    pub fn category_statistics(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<Category, f64> {
        self.lock().category_statistics(start, end)
    }

    pub fn top_expenses(&self, limit: usize) -> PlannerResult<Vec<Expense>> {
        self.lock().top_expenses(limit)
    }

    pub fn all_expenses(&self) -> Vec<Expense> {
        self.lock().all_expenses()
    }

    pub fn monthly_budget(&self) -> f64 {
        self.lock().monthly_budget()
    }

    pub fn category_budget(&self, category: Category) -> f64 {
        self.lock().category_budget(category)
    }

    pub fn category_budget_status(&self, category: Category) -> CategoryBudgetStatus {
        self.lock().category_budget_status(category)
    }

    pub fn expenses_summary(&self) -> ExpenseSummary {
        self.lock().expenses_summary()
    }

    // Planner methods validate before mutating, so a poisoned guard still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, ExpensePlanner<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
