//! CLI configuration loaded from environment variables

use std::env;

/// Runtime configuration. Command-line flags override these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// tracing level: trace, debug, info, warn, error
    pub log_level: String,
    /// Default charge policy spec, e.g. `flat:2.50`
    pub service_charge: Option<String>,
    /// Print JSON instead of display strings
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            service_charge: None,
            json: false,
        }
    }
}

impl CliConfig {
    /// Load config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("BANKACCT_LOG_LEVEL").unwrap_or(defaults.log_level),
            service_charge: lookup("BANKACCT_SERVICE_CHARGE").filter(|s| !s.trim().is_empty()),
            json: lookup("BANKACCT_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.json),
        }
    }

    /// Parsed log level, falling back to INFO
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
