use dotenv::dotenv;
use portfolio_core::{DeviceProfile, MenuBuildMode, SessionConfig, DEFAULT_WIDTH_BUDGET};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::fetch::CatalogueLocation;

pub const CATALOGUE_ENV: &str = "PORTFOLIO_CATALOGUE";
pub const PROFILE_ENV: &str = "PORTFOLIO_PROFILE";
pub const MENU_MODE_ENV: &str = "PORTFOLIO_MENU_MODE";
pub const WIDTH_BUDGET_ENV: &str = "PORTFOLIO_WIDTH_BUDGET";
pub const LOG_LEVEL_ENV: &str = "PORTFOLIO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PORTFOLIO_LOG_DIR";

const DEFAULT_CATALOGUE: &str = "portfolio.json";
const DEFAULT_LOG_DIR: &str = "./logs";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown device profile '{0}' (expected desktop, firefox or mobile)")]
    Profile(String),
    #[error("unknown menu mode '{0}' (expected replace or append)")]
    MenuMode(String),
    #[error("width budget must be a positive number, got '{0}'")]
    WidthBudget(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalogue: CatalogueLocation,
    pub profile: DeviceProfile,
    pub menu_mode: MenuBuildMode,
    pub width_budget: f64,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            menu_mode: self.menu_mode,
            width_budgets: [self.width_budget, self.width_budget],
            ..SessionConfig::for_profile(self.profile)
        }
    }

    /// Builds the configuration from any key lookup, environment or otherwise.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalogue = lookup(CATALOGUE_ENV).unwrap_or_else(|| DEFAULT_CATALOGUE.to_string());

        let profile = match lookup(PROFILE_ENV) {
            Some(raw) => DeviceProfile::parse(&raw).ok_or(ConfigError::Profile(raw))?,
            None => DeviceProfile::default(),
        };

        let menu_mode = match lookup(MENU_MODE_ENV) {
            Some(raw) => MenuBuildMode::parse(&raw).ok_or(ConfigError::MenuMode(raw))?,
            None => MenuBuildMode::default(),
        };

        let width_budget = match lookup(WIDTH_BUDGET_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|budget| budget.is_finite() && *budget > 0.0)
                .ok_or(ConfigError::WidthBudget(raw))?,
            None => DEFAULT_WIDTH_BUDGET,
        };

        Ok(Self {
            catalogue: CatalogueLocation::parse(&catalogue),
            profile,
            menu_mode,
            width_budget,
            log_dir: lookup(LOG_DIR_ENV).map_or_else(|| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from),
            log_level: lookup(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    // Load environment variables from .env file
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}
