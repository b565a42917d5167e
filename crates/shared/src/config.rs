//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend API configuration.
    pub api: ApiConfig,
    /// Default ledger keys used when a command does not name them.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the bookkeeping backend (e.g. `https://books.example.com`).
    pub base_url: String,
    /// Bearer token passed through on every request.
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default ledger keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Broker whose ledger is used by default.
    #[serde(default)]
    pub broker_id: Option<String>,
    /// Financial year used by default. When unset the year is resolved from
    /// the backend's list.
    #[serde(default)]
    pub financial_year_id: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "brokerbook=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `BROKERBOOK__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BROKERBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
