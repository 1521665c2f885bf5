use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Flight data provider; endpoint absent means synthetic offers only
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: MatchWeightsConfig,
    #[serde(default)]
    pub flight: FlightWeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchWeightsConfig {
    #[serde(default = "default_vibe_weight")]
    pub vibe: f64,
    #[serde(default = "default_room_weight")]
    pub room: f64,
    #[serde(default = "default_date_weight")]
    pub date: f64,
    #[serde(default = "default_region_weight")]
    pub region: f64,
    #[serde(default = "default_activity_weight")]
    pub activity: f64,
    #[serde(default = "default_party_rest_weight")]
    pub party_rest: f64,
}

impl Default for MatchWeightsConfig {
    fn default() -> Self {
        Self {
            vibe: default_vibe_weight(),
            room: default_room_weight(),
            date: default_date_weight(),
            region: default_region_weight(),
            activity: default_activity_weight(),
            party_rest: default_party_rest_weight(),
        }
    }
}

fn default_vibe_weight() -> f64 { 0.30 }
fn default_room_weight() -> f64 { 0.20 }
fn default_date_weight() -> f64 { 0.15 }
fn default_region_weight() -> f64 { 0.15 }
fn default_activity_weight() -> f64 { 0.10 }
fn default_party_rest_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct FlightWeightsConfig {
    #[serde(default = "default_price_weight")]
    pub price: f64,
    #[serde(default = "default_duration_weight")]
    pub duration: f64,
}

impl Default for FlightWeightsConfig {
    fn default() -> Self {
        Self {
            price: default_price_weight(),
            duration: default_duration_weight(),
        }
    }
}

fn default_price_weight() -> f64 { 0.60 }
fn default_duration_weight() -> f64 { 0.40 }

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

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SALTY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SALTY_)
            // e.g., SALTY_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SALTY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SALTY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
