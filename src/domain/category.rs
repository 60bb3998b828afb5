//! Spending categories and the fixed budget table keyed by them.

use std::{fmt, str::FromStr};

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::domain::common::Displayable;
use crate::errors::PlannerError;

/// Closed set of spending classifications an expense can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Health,
    Education,
    Other,
}

impl Category {
    pub const COUNT: usize = 7;

    /// Every category in declaration order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    /// Position of the category inside [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Transport => "TRANSPORT",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Utilities => "UTILITIES",
            Category::Health => "HEALTH",
            Category::Education => "EDUCATION",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        let name = self.name();
        let mut label = String::with_capacity(name.len());
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            label.push(first);
            label.extend(chars.map(|ch| ch.to_ascii_lowercase()));
        }
        label
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| PlannerError::invalid(format!("Unknown category: {}", needle)))
    }
}

/// Budget threshold for every category, stored by ordinal so no category can go missing.
///
/// A threshold of `0.0` means no limit has been configured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryBudgets {
    limits: [f64; Category::COUNT],
}

impl CategoryBudgets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> f64 {
        self.limits[category.index()]
    }

    pub(crate) fn set(&mut self, category: Category, amount: f64) {
        self.limits[category.index()] = amount;
    }

    /// Iterates `(category, limit)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

impl Serialize for CategoryBudgets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, limit) in self.iter() {
            map.serialize_entry(&category, &limit)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (position, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Transport ".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!("OTHER".parse::<Category>().unwrap(), Category::Other);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "groceries".parse::<Category>().expect_err("unknown category");
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
        assert!(err.message().contains("groceries"));
    }

    #[test]
    fn serializes_as_upper_case_names() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"ENTERTAINMENT\"");
        let restored: Category = serde_json::from_str("\"HEALTH\"").unwrap();
        assert_eq!(restored, Category::Health);
    }

    #[test]
    fn display_label_is_title_case() {
        assert_eq!(Category::Utilities.display_label(), "Utilities");
        assert_eq!(Category::Food.to_string(), "FOOD");
    }

    #[test]
    fn budgets_start_unset_for_every_category() {
        let budgets = CategoryBudgets::new();
        assert_eq!(budgets.iter().count(), Category::COUNT);
        assert!(budgets.iter().all(|(_, limit)| limit == 0.0));
    }

    #[test]
    fn budgets_serialize_as_a_full_map() {
        let mut budgets = CategoryBudgets::new();
        budgets.set(Category::Food, 250.0);
        let json = serde_json::to_value(budgets).unwrap();
        assert_eq!(json["FOOD"], 250.0);
        assert_eq!(json["OTHER"], 0.0);
        assert_eq!(json.as_object().map(|map| map.len()), Some(Category::COUNT));
    }
}
