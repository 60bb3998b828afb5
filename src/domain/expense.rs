use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    category::Category,
    common::{Displayable, Identifiable},
};

/// A single recorded outflow. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    id: String,
    description: String,
    amount: f64,
    category: Category,
    date: NaiveDate,
}

impl Expense {
    /// Builds an expense with a fresh identifier. Callers validate the inputs first.
    pub(crate) fn new(
        description: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            amount,
            category,
            date,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// True when the expense date lies within `[start, end]`.
    pub fn falls_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!(
            "{} ({:.2}, {}, {})",
            self.description,
            self.amount,
            self.category.display_label(),
            self.date
        )
    }
}
