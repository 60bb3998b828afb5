//! In-memory expense ledger with monthly and per-category budget checks.

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use tracing::{debug, warn};

use crate::config::BudgetSettings;
use crate::core::clock::{Clock, SystemClock};
use crate::core::summary::{CategoryBudgetStatus, ExpenseSummary};
use crate::domain::{Category, CategoryBudgets, Expense};
use crate::errors::{PlannerError, PlannerResult};

/// Owns the recorded expenses and the budget thresholds they are compared against.
///
/// Every query hands back owned copies; the backing vector is never exposed.
#[derive(Debug, Clone)]
pub struct ExpensePlanner<C: Clock = SystemClock> {
    expenses: Vec<Expense>,
    category_budgets: CategoryBudgets,
    monthly_budget: f64,
    clock: C,
}

impl ExpensePlanner<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ExpensePlanner<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ExpensePlanner<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            expenses: Vec::new(),
            category_budgets: CategoryBudgets::new(),
            monthly_budget: 0.0,
            clock,
        }
    }

    /// Builds a planner whose budgets are taken from previously saved settings.
    pub fn from_settings(settings: &BudgetSettings, clock: C) -> PlannerResult<Self> {
        settings.validate()?;
        let mut planner = Self::with_clock(clock);
        planner.set_monthly_budget(settings.monthly_budget)?;
        for (category, amount) in &settings.category_budgets {
            planner.set_category_budget(*category, *amount)?;
        }
        Ok(planner)
    }

    /// Records a new expense and returns its identifier.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> PlannerResult<String> {
        let description = description.trim();
        if description.is_empty() {
            return Err(reject("Description cannot be empty"));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(reject("Amount must be positive"));
        }
        if date > self.clock.today() {
            return Err(reject("Date cannot be in the future"));
        }

        let expense = Expense::new(description, amount, category, date);
        let id = expense.id().to_string();
        debug!(%id, amount, %category, %date, "expense recorded");
        self.expenses.push(expense);
        Ok(id)
    }

    /// Removes the expense with `id`. Returns `false` when nothing matched.
    pub fn remove_expense(&mut self, id: &str) -> PlannerResult<bool> {
        if id.trim().is_empty() {
            return Err(reject("Expense ID cannot be empty"));
        }
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id() != id);
        let removed = self.expenses.len() < before;
        debug!(%id, removed, "expense removal");
        Ok(removed)
    }

    pub fn set_monthly_budget(&mut self, amount: f64) -> PlannerResult<()> {
        validate_budget(amount)?;
        self.monthly_budget = amount;
        debug!(amount, "monthly budget updated");
        Ok(())
    }

    pub fn set_category_budget(&mut self, category: Category, amount: f64) -> PlannerResult<()> {
        validate_budget(amount)?;
        self.category_budgets.set(category, amount);
        debug!(%category, amount, "category budget updated");
        Ok(())
    }

    /// Sum of expenses dated within `[start, end]`.
    pub fn total_expenses(&self, start: NaiveDate, end: NaiveDate) -> PlannerResult<f64> {
        if start > end {
            return Err(reject("Start date cannot be after end date"));
        }
        Ok(self.sum_in_range(start, end))
    }

    /// Expenses filed under `category`, in insertion order.
    pub fn expenses_by_category(&self, category: Category) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|expense| expense.category() == category)
            .cloned()
            .collect()
    }

    /// Monthly budget minus the spend dated within the given calendar month.
    ///
    /// Negative values mean the month is over budget.
    pub fn remaining_monthly_budget(&self, year: i32, month: u32) -> PlannerResult<f64> {
        if !(1..=12).contains(&month) {
            return Err(reject("Month must be between 1 and 12"));
        }
        let (start, end) = month_bounds(year, month)
            .ok_or_else(|| reject(format!("Year {} is out of range", year)))?;
        let spent = self.total_expenses(start, end)?;
        Ok(self.monthly_budget - spent)
    }

    /// True when all-time spend in `category` is strictly above its budget.
    ///
    /// A budget of exactly `0.0` reads as "no limit", so it is never exceeded.
    pub fn is_category_budget_exceeded(&self, category: Category) -> bool {
        let budget = self.category_budgets.get(category);
        if budget == 0.0 {
            return false;
        }
        self.category_total(category) > budget
    }

    /// Per-category totals for expenses dated within `[start, end]`.
    ///
    /// Categories without matching expenses are left out. A reversed range is not
    /// rejected here; it simply matches nothing.
    pub fn category_statistics(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<Category, f64> {
        let mut totals = BTreeMap::new();
        for expense in self
            .expenses
            .iter()
            .filter(|expense| expense.falls_within(start, end))
        {
            *totals.entry(expense.category()).or_insert(0.0) += expense.amount();
        }
        totals
    }

    /// Up to `limit` expenses ordered by amount, largest first. Ties keep insertion order.
    pub fn top_expenses(&self, limit: usize) -> PlannerResult<Vec<Expense>> {
        if limit == 0 {
            return Err(reject("Limit must be positive"));
        }
        let mut sorted = self.expenses.clone();
        sorted.sort_by(|a, b| b.amount().total_cmp(&a.amount()));
        sorted.truncate(limit);
        Ok(sorted)
    }

    pub fn all_expenses(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }

    pub fn category_budget(&self, category: Category) -> f64 {
        self.category_budgets.get(category)
    }

    /// Looks up a budget by category name, e.g. `"food"`.
    pub fn category_budget_by_name(&self, name: &str) -> PlannerResult<f64> {
        let category: Category = name.parse()?;
        Ok(self.category_budget(category))
    }

    pub fn category_budgets(&self) -> CategoryBudgets {
        self.category_budgets
    }

    pub fn category_budget_status(&self, category: Category) -> CategoryBudgetStatus {
        CategoryBudgetStatus::from_parts(
            category,
            self.category_budgets.get(category),
            self.category_total(category),
        )
    }

    pub fn expenses_summary(&self) -> ExpenseSummary {
        let total = self.expenses.iter().map(Expense::amount).sum();
        ExpenseSummary::from_parts(
            total,
            self.expenses.len(),
            self.monthly_budget,
            self.category_budgets,
        )
    }

    /// Captures the current budgets so they can be written back to disk.
    pub fn budget_settings(&self) -> BudgetSettings {
        BudgetSettings {
            monthly_budget: self.monthly_budget,
            category_budgets: self
                .category_budgets
                .iter()
                .filter(|(_, limit)| *limit != 0.0)
                .collect(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn sum_in_range(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| expense.falls_within(start, end))
            .map(Expense::amount)
            .sum()
    }

    fn category_total(&self, category: Category) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| expense.category() == category)
            .map(Expense::amount)
            .sum()
    }
}

/// First and last calendar day of `month` in `year`.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

pub(crate) fn validate_budget(amount: f64) -> PlannerResult<()> {
    if amount.is_nan() || amount < 0.0 {
        return Err(reject("Budget cannot be negative"));
    }
    if !amount.is_finite() {
        return Err(reject("Budget must be finite"));
    }
    Ok(())
}

fn reject(message: impl Into<String>) -> PlannerError {
    let err = PlannerError::invalid(message);
    warn!(reason = err.message(), "rejected planner input");
    err
}
