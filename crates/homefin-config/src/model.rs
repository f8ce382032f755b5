use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences for the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency_value")]
    pub default_currency: String,
    /// Horizon for internally computed forecasts; the dashboard clips this
    /// for display.
    #[serde(default = "Config::default_forecast_horizon")]
    pub forecast_horizon_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for profiles.
    pub data_root: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for backups.
    pub backup_root: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_profile: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: Self::default_currency_value(),
            forecast_horizon_years: Self::default_forecast_horizon(),
            data_root: None,
            backup_root: None,
            last_opened_profile: None,
        }
    }
}

impl Config {
    pub fn default_currency_value() -> String {
        "EUR".into()
    }

    pub fn default_forecast_horizon() -> u32 {
        10
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }
        base_dir().join("profiles")
    }

    pub fn resolve_backup_root(&self) -> PathBuf {
        if let Some(path) = &self.backup_root {
            return path.clone();
        }
        base_dir().join("backups")
    }
}

fn base_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("homefin")
}
