use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::scoring::{SeverityWeightTable, SeverityWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub travel: TravelSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
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

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl ScoringSettings {
    /// Build the immutable weight table, rejecting negative or non-finite weights
    pub fn weight_table(&self) -> Result<SeverityWeightTable, ConfigError> {
        let w = &self.weights;
        for (name, row) in [
            ("critical", &w.critical),
            ("high", &w.high),
            ("moderate", &w.moderate),
            ("low", &w.low),
        ] {
            let values = [row.distance, row.capacity, row.specialization];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(ConfigError::Message(format!(
                    "scoring.weights.{} must be finite and non-negative, got {:?}",
                    name, row
                )));
            }
        }

        Ok(SeverityWeightTable {
            critical: w.critical,
            high: w.high,
            moderate: w.moderate,
            low: w.low,
        })
    }
}

/// Per-severity weights, defaulting to the standard table
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_critical_weights")]
    pub critical: SeverityWeights,
    #[serde(default = "default_high_weights")]
    pub high: SeverityWeights,
    #[serde(default = "default_moderate_weights")]
    pub moderate: SeverityWeights,
    #[serde(default = "default_low_weights")]
    pub low: SeverityWeights,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            critical: default_critical_weights(),
            high: default_high_weights(),
            moderate: default_moderate_weights(),
            low: default_low_weights(),
        }
    }
}

fn default_critical_weights() -> SeverityWeights { SeverityWeightTable::STANDARD.critical }
fn default_high_weights() -> SeverityWeights { SeverityWeightTable::STANDARD.high }
fn default_moderate_weights() -> SeverityWeights { SeverityWeightTable::STANDARD.moderate }
fn default_low_weights() -> SeverityWeights { SeverityWeightTable::STANDARD.low }

#[derive(Debug, Clone, Deserialize)]
pub struct TravelSettings {
    #[serde(default = "default_speed_kph")]
    pub default_speed_kph: f64,
    /// Fixed seed for the traffic sampler; entropy when unset
    pub rng_seed: Option<u64>,
}

impl Default for TravelSettings {
    fn default() -> Self {
        Self {
            default_speed_kph: default_speed_kph(),
            rng_seed: None,
        }
    }
}

fn default_speed_kph() -> f64 { 40.0 }

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ALLOCATOR__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ALLOCATOR__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ALLOCATOR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
