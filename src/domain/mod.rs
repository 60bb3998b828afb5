//! Domain types: categories, expenses and the traits they share.

pub mod category;
pub mod common;
pub mod expense;

pub use category::{Category, CategoryBudgets};
pub use common::{Displayable, Identifiable};
pub use expense::Expense;
