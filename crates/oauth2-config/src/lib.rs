use hocon::HoconLoader;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scope: ScopeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scope handling applied when authorization requests are created.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScopeConfig {
    /// Used when a request carries no scope at all.
    #[serde(default)]
    pub default_scopes: Vec<String>,
    /// When non-empty, requests asking for anything else are rejected.
    #[serde(default)]
    pub allowed_scopes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json")]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: default_json(),
        }
    }
}

impl Config {
    /// Load configuration from HOCON file with environment variable substitution
    pub fn from_hocon() -> Result<Self, String> {
        Self::from_hocon_path("application.conf")
    }

    /// Load configuration from a specific HOCON file path
    pub fn from_hocon_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let mut config: Config = HoconLoader::new()
            .load_file(path)
            .map_err(|e| format!("Failed to load HOCON file: {}", e))?
            .resolve()
            .map_err(|e| format!("Failed to parse and resolve HOCON: {}", e))?;

        // HOCON doesn't support array substitution from env vars directly
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from `OAUTH2_`-prefixed environment variables only
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("OAUTH2")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("scope.default_scopes")
                    .with_list_parse_key("scope.allowed_scopes")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Defaults with the `OAUTH2_DEFAULT_SCOPES`, `OAUTH2_ALLOWED_SCOPES` and
    /// `OAUTH2_LOG_LEVEL` overrides applied; used when no HOCON file loads.
    pub fn from_env_defaults() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(scopes) = std::env::var("OAUTH2_DEFAULT_SCOPES") {
            self.scope.default_scopes = split_list(&scopes);
        }
        if let Ok(scopes) = std::env::var("OAUTH2_ALLOWED_SCOPES") {
            self.scope.allowed_scopes = split_list(&scopes);
        }
        if let Ok(level) = std::env::var("OAUTH2_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.logging.level = level.trim().to_string();
            }
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
