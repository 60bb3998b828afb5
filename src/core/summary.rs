use serde::Serialize;

use crate::domain::{Category, CategoryBudgets};

/// Aggregate figures over every recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub total_expenses: f64,
    pub expense_count: usize,
    pub average_expense: f64,
    pub monthly_budget: f64,
    pub category_budgets: CategoryBudgets,
}

impl ExpenseSummary {
    pub fn from_parts(
        total_expenses: f64,
        expense_count: usize,
        monthly_budget: f64,
        category_budgets: CategoryBudgets,
    ) -> Self {
        let average_expense = if expense_count == 0 {
            0.0
        } else {
            total_expenses / expense_count as f64
        };
        Self {
            total_expenses,
            expense_count,
            average_expense,
            monthly_budget,
            category_budgets,
        }
    }
}

/// Spend against the configured limit for one category, over all time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBudgetStatus {
    pub category: Category,
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub exceeded: bool,
}

impl CategoryBudgetStatus {
    /// A zero budget is the "no limit" marker and never counts as exceeded.
    pub fn from_parts(category: Category, budget: f64, spent: f64) -> Self {
        Self {
            category,
            budget,
            spent,
            remaining: budget - spent,
            exceeded: budget != 0.0 && spent > budget,
        }
    }

    pub fn has_limit(&self) -> bool {
        self.budget != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_zero_without_expenses() {
        let summary = ExpenseSummary::from_parts(0.0, 0, 500.0, CategoryBudgets::new());
        assert_eq!(summary.average_expense, 0.0);
        assert_eq!(summary.monthly_budget, 500.0);
    }

    #[test]
    fn average_divides_total_by_count() {
        let summary = ExpenseSummary::from_parts(45.5, 3, 0.0, CategoryBudgets::new());
        assert!((summary.average_expense - 45.5 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn status_uses_strict_comparison() {
        let at_limit = CategoryBudgetStatus::from_parts(Category::Food, 100.0, 100.0);
        assert!(!at_limit.exceeded);
        assert_eq!(at_limit.remaining, 0.0);

        let over = CategoryBudgetStatus::from_parts(Category::Food, 100.0, 110.0);
        assert!(over.exceeded);
        assert_eq!(over.remaining, -10.0);
    }

    #[test]
    fn zero_budget_is_never_exceeded() {
        let status = CategoryBudgetStatus::from_parts(Category::Health, 0.0, 250.0);
        assert!(!status.has_limit());
        assert!(!status.exceeded);
    }
}
