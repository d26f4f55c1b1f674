use config::{Config, ConfigBuilder, ConfigError, Environment, File, Map, builder::DefaultState};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Applied when a request does not ask for a limit; `None` returns everyone
    pub default_limit: Option<usize>,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: None,
            max_limit: default_max_limit(),
        }
    }
}

impl MatchingSettings {
    /// Resolve how many recommendations to return, if the list is to be cut at all
    pub fn effective_limit(&self, requested: Option<usize>) -> Option<usize> {
        requested
            .or(self.default_limit)
            .map(|limit| limit.min(self.max_limit))
    }
}

fn default_max_limit() -> usize { 100 }

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
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR_MATCH__)
    /// 5. `PORT`, if set
    pub fn load() -> Result<Self, ConfigError> {
        Self::layered(None, std::env::var("PORT").ok())
    }

    /// Build settings from the config files plus the given environment
    ///
    /// `env` replaces the process environment when set.
    fn layered(env: Option<Map<String, String>>, port: Option<String>) -> Result<Self, ConfigError> {
        let settings = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR_MATCH__SERVER__PORT -> server.port
            .add_source(environment().source(env))
            .build()?;

        apply_port_override(settings, port)?.try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5001_i64)?
        .set_default("matching.max_limit", default_max_limit() as i64)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn environment() -> Environment {
    Environment::with_prefix("MENTOR_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honour the conventional `PORT` variable used by hosting platforms
fn apply_port_override(settings: Config, port: Option<String>) -> Result<Config, ConfigError> {
    match port {
        Some(port) => Config::builder()
            .add_source(settings)
            .set_override("server.port", port)?
            .build(),
        None => Ok(settings),
    }
}
