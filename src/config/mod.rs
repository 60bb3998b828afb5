//! Budget settings persisted between runs. Expenses themselves are never written here.

use std::{
    collections::BTreeMap,
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::planner::validate_budget;
use crate::domain::Category;
use crate::errors::{ConfigError, PlannerResult};

const DEFAULT_DIR_NAME: &str = ".expense_planner";
const HOME_ENV_VAR: &str = "EXPENSE_PLANNER_HOME";
const SETTINGS_FILE: &str = "budgets.json";
const TMP_SUFFIX: &str = "tmp";

/// Budget thresholds that seed a new planner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSettings {
    #[serde(default)]
    pub monthly_budget: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub category_budgets: BTreeMap<Category, f64>,
}

impl BudgetSettings {
    /// Applies the same rules as the planner setters.
    pub fn validate(&self) -> PlannerResult<()> {
        validate_budget(self.monthly_budget)?;
        for amount in self.category_budgets.values() {
            validate_budget(*amount)?;
        }
        Ok(())
    }
}

/// Returns the application data directory, defaulting to `~/.expense_planner`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Reads and writes [`BudgetSettings`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads saved settings, or defaults when nothing has been saved yet.
    pub fn load(&self) -> Result<BudgetSettings, ConfigError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no budget settings found, using defaults");
            return Ok(BudgetSettings::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let settings: BudgetSettings = serde_json::from_str(&data)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, settings: &BudgetSettings) -> Result<(), ConfigError> {
        settings.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), "budget settings saved");
        Ok(())
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
