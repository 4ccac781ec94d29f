use getset::{CopyGetters, Getters};
use serde::*;
use service_inventory::ReportLimits;
use std::path::Path;

use crate::telemetry::TelemetryConfig;

#[derive(Default, Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct InventoryConfig {
    #[serde(default)]
    telemetry: TelemetryConfig,
    #[serde(default)]
    entity: EntityConfig,
    #[serde(default)]
    analytics: AnalyticsConfig,
}

impl InventoryConfig {
    pub fn load(config: &config::Config) -> anyhow::Result<Self> {
        Ok(config.clone().try_deserialize()?)
    }
}

#[derive(Default, Deserialize, Clone, Debug, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct EntityConfig {
    /// Deleting a file that is not stored reports NOT_EXISTS instead of OK.
    #[serde(default)]
    strict_file_delete: bool,
}

#[derive(Deserialize, Clone, Debug, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct AnalyticsConfig {
    #[serde(default = "AnalyticsConfig::default_files_limit")]
    files_limit: usize,
    #[serde(default = "AnalyticsConfig::default_disks_limit")]
    disks_limit: usize,
    #[serde(default = "AnalyticsConfig::default_close_files_limit")]
    close_files_limit: usize,
}

impl AnalyticsConfig {
    fn default_files_limit() -> usize {
        ReportLimits::default().files
    }
    fn default_disks_limit() -> usize {
        ReportLimits::default().disks
    }
    fn default_close_files_limit() -> usize {
        ReportLimits::default().close_files
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            files_limit: Self::default_files_limit(),
            disks_limit: Self::default_disks_limit(),
            close_files_limit: Self::default_close_files_limit(),
        }
    }
}

impl From<&AnalyticsConfig> for ReportLimits {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            files: config.files_limit,
            disks: config.disks_limit,
            close_files: config.close_files_limit,
        }
    }
}

/// Layer `config.yaml` in the working directory, then `path`, then `INVENTORY__` variables.
///
/// `INVENTORY__ANALYTICS__FILES_LIMIT=3` overrides `analytics.files_limit`.
pub fn build_config(path: Option<&Path>) -> anyhow::Result<config::Config> {
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    if let Some(path) = path {
        config = config.add_source(
            config::File::from(path)
                .format(config::FileFormat::Yaml)
                .required(true),
        );
    }
    config = config.add_source(
        config::Environment::with_prefix("INVENTORY")
            .separator("__")
            .try_parsing(true),
    );
    Ok(config.build()?)
}
