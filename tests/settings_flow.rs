mod common;

use common::{planner, today};
use expense_planner::{
    BudgetSettings, Category, ConfigError, ExpensePlanner, FixedClock, SettingsManager,
};
use tempfile::TempDir;

#[test]
fn budgets_survive_a_save_and_reload() {
    let dir = TempDir::new().expect("temp dir");
    let manager = SettingsManager::with_base_dir(dir.path());

    let mut original = planner();
    original.set_monthly_budget(1500.0).unwrap();
    original.set_category_budget(Category::Food, 350.0).unwrap();
    original
        .set_category_budget(Category::Transport, 90.0)
        .unwrap();
    manager.save(&original.budget_settings()).expect("save");

    let settings = manager.load().expect("load");
    let restored = ExpensePlanner::from_settings(&settings, FixedClock(today())).expect("restore");

    assert_eq!(restored.monthly_budget(), 1500.0);
    assert_eq!(restored.category_budget(Category::Food), 350.0);
    assert_eq!(restored.category_budget(Category::Transport), 90.0);
    assert_eq!(restored.category_budget(Category::Other), 0.0);
    assert!(restored.is_empty());
}

#[test]
fn invalid_settings_do_not_build_a_planner() {
    let mut settings = BudgetSettings::default();
    settings.category_budgets.insert(Category::Education, -20.0);
    let err = ExpensePlanner::from_settings(&settings, FixedClock(today()))
        .expect_err("negative budget");
    assert_eq!(err.message(), "Budget cannot be negative");

    let dir = TempDir::new().expect("temp dir");
    let manager = SettingsManager::with_base_dir(dir.path());
    assert!(matches!(manager.save(&settings), Err(ConfigError::Invalid(_))));
    assert!(!manager.path().exists());
}
