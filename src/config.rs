use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::core::bands::{BandError, BandTable, FabricToleranceBand, FabricType};

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid fabric band: {0}")]
    Band(#[from] BandError),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub evaluation: EvaluationSettings,
    #[serde(default)]
    pub fabrics: FabricSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationSettings {
    /// Used when a request carries no AI confidence and nothing can be compared
    #[serde(default = "default_confidence")]
    pub default_confidence: String,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            default_confidence: default_confidence(),
        }
    }
}

fn default_confidence() -> String { "Good".to_string() }

/// Raw band thresholds as written in configuration
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BandConfig {
    pub perfect_min: f64,
    pub perfect_max: f64,
    pub tight_threshold: f64,
    pub loose_threshold: f64,
}

impl BandConfig {
    fn into_band(self, fabric: FabricType) -> Result<FabricToleranceBand, BandError> {
        FabricToleranceBand::new(
            fabric,
            self.perfect_min,
            self.perfect_max,
            self.tight_threshold,
            self.loose_threshold,
        )
    }
}

/// Optional per-fabric overrides of the built-in bands
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FabricSettings {
    pub rigid: Option<BandConfig>,
    pub normal: Option<BandConfig>,
    pub stretchy: Option<BandConfig>,
}

impl FabricSettings {
    /// Build the validated band table, filling gaps with the built-in bands
    pub fn band_table(&self) -> Result<BandTable, BandError> {
        let resolve = |fabric: FabricType, raw: Option<BandConfig>| match raw {
            Some(raw) => raw.into_band(fabric),
            None => Ok(FabricToleranceBand::default_for(fabric)),
        };

        BandTable::new(
            resolve(FabricType::Rigid, self.rigid)?,
            resolve(FabricType::Normal, self.normal)?,
            resolve(FabricType::Stretchy, self.stretchy)?,
        )
    }
}

/// Environment source, e.g. SIZEFIT__SERVER__PORT -> server.port
fn environment() -> Environment {
    Environment::with_prefix("SIZEFIT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (SIZEFIT__SECTION__KEY)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validated fabric band table for this configuration
    pub fn band_table(&self) -> Result<BandTable, SettingsError> {
        Ok(self.fabrics.band_table()?)
    }
}
