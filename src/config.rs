use std::path::Path;

use serde::Deserialize;

use crate::aggregation::maintenance::MaintenanceRules;

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const MAX_TREND_WINDOW_DAYS: usize = 366;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub upload: UploadConfig,
    pub alerts: AlertsConfig,
    pub summary: SummaryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// File name extensions accepted without a matching content type (without the dot).
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    #[serde(default = "default_allowed_content_types")]
    pub allowed_content_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            allowed_content_types: default_allowed_content_types(),
        }
    }
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["csv".into()]
}

fn default_allowed_content_types() -> Vec<String> {
    vec![crate::upload::CSV_CONTENT_TYPE.into()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertsConfig {
    /// A day needs strictly more inputs than this to trigger a storage reclaim.
    #[serde(default = "default_storage_reclaim_min_inputs")]
    pub storage_reclaim_min_inputs: usize,
    /// A day's mean CPU must be strictly above this to trigger an index rebuild.
    #[serde(default = "default_index_rebuild_cpu_percent")]
    pub index_rebuild_cpu_percent: f64,
    #[serde(default = "default_backup_every_n_days")]
    pub backup_every_n_days: usize,
    #[serde(default = "default_max_alerts")]
    pub max_alerts: usize,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            storage_reclaim_min_inputs: default_storage_reclaim_min_inputs(),
            index_rebuild_cpu_percent: default_index_rebuild_cpu_percent(),
            backup_every_n_days: default_backup_every_n_days(),
            max_alerts: default_max_alerts(),
        }
    }
}

impl AlertsConfig {
    pub fn rules(&self) -> MaintenanceRules {
        MaintenanceRules {
            storage_reclaim_min_inputs: self.storage_reclaim_min_inputs,
            index_rebuild_cpu_percent: self.index_rebuild_cpu_percent,
            backup_every_n_days: self.backup_every_n_days,
            max_alerts: self.max_alerts,
        }
    }
}

fn default_storage_reclaim_min_inputs() -> usize {
    800
}

fn default_index_rebuild_cpu_percent() -> f64 {
    70.0
}

fn default_backup_every_n_days() -> usize {
    7
}

fn default_max_alerts() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Days per window when comparing recent daily averages with the preceding ones.
    #[serde(default = "default_trend_window_days")]
    pub trend_window_days: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            trend_window_days: default_trend_window_days(),
        }
    }
}

fn default_trend_window_days() -> usize {
    7
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl AppConfig {
    /// Loads `CONFIG_FILE` (or `config.toml`). Falls back to defaults only when no
    /// path was given and the default file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(Path::new(&path)),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.upload.allowed_extensions.is_empty()
                || !self.upload.allowed_content_types.is_empty(),
            "upload.allowed_extensions and upload.allowed_content_types must not both be empty"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.alerts.index_rebuild_cpu_percent),
            "alerts.index_rebuild_cpu_percent must be between 0 and 100, got {}",
            self.alerts.index_rebuild_cpu_percent
        );
        anyhow::ensure!(
            self.alerts.backup_every_n_days > 0,
            "alerts.backup_every_n_days must be > 0, got {}",
            self.alerts.backup_every_n_days
        );
        anyhow::ensure!(
            self.alerts.max_alerts > 0,
            "alerts.max_alerts must be > 0, got {}",
            self.alerts.max_alerts
        );
        anyhow::ensure!(
            (1..=MAX_TREND_WINDOW_DAYS).contains(&self.summary.trend_window_days),
            "summary.trend_window_days must be between 1 and {MAX_TREND_WINDOW_DAYS}, got {}",
            self.summary.trend_window_days
        );
        Ok(())
    }
}
