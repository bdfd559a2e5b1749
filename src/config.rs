use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Route segment reserved by the layered hello routes
const RESERVED_ROUTE: &str = "hello";

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    #[validate(nested)]
    pub server: ServerSettings,
    #[validate(nested)]
    pub feature: FeatureSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(range(min = 1))]
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

/// Settings of the single-layer feature route
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct FeatureSettings {
    #[validate(length(min = 1, max = 64), custom(function = "validate_route_segment"))]
    pub name: String,
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self { name: default_feature_name() }
    }
}

fn default_feature_name() -> String { "greeting".to_string() }

/// Feature names become a bare path segment, so only `[A-Za-z0-9_-]` is allowed
fn validate_route_segment(name: &str) -> Result<(), ValidationError> {
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::new("route_segment_charset"));
    }
    if name.eq_ignore_ascii_case(RESERVED_ROUTE) {
        return Err(ValidationError::new("route_segment_reserved"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
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
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with HELLO_)
    /// 5. `PORT`, as set by container platforms
    pub fn load() -> Result<Self, SettingsError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        Self::from_config(with_overrides(builder)?.build()?)
    }

    /// Load configuration from a custom path
    ///
    /// Environment variables and `PORT` still override the file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let builder = Config::builder().add_source(File::from(path.as_ref()));

        Self::from_config(with_overrides(builder)?.build()?)
    }

    /// Deserialize and validate an already assembled configuration
    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("HELLO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Layer `HELLO__*` variables, then `PORT`, over the file sources
fn with_overrides(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        // e.g., HELLO__SERVER__PORT -> server.port
        .add_source(environment())
        .set_override_option("server.port", std::env::var("PORT").ok())
}
