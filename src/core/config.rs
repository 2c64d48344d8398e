use crate::core::currency::CurrencyTable;
use crate::core::ledger::DEFAULT_BUDGET;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Email used when `--user` is not given
    pub user: Option<String>,
    /// Budget for users without a stored snapshot
    #[serde(default = "default_budget")]
    pub default_budget: f64,
    #[serde(default)]
    pub currencies: CurrencyTable,
    pub data_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            user: None,
            default_budget: DEFAULT_BUDGET,
            currencies: CurrencyTable::default(),
            data_path: None,
        }
    }
}

impl AppConfig {
    /// Loads the default config file, or built-in defaults when it does not
    /// exist yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "expenseflow", "expenseflow")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("dev", "expenseflow", "expenseflow")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        if !(config.default_budget.is_finite() && config.default_budget > 0.0) {
            anyhow::bail!(
                "default_budget must be positive in {}",
                path.as_ref().display()
            );
        }
        debug!("Successfully loaded config");
        Ok(config)
    }
}
