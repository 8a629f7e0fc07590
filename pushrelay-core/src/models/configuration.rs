//! Configuration data structures

use crate::error::ConfigError;
use crate::models::Application;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Upper bound for the outbound request timeout
const MAX_REQUEST_TIMEOUT_SECS: u32 = 300;

/// Logging level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "info")]
    #[default]
    Info,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "trace")]
    Trace,
}

/// Relay configuration, injected into the dispatcher at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Routing prefix every push URL starts with
    pub push_base_url: String,
    /// Root URL where the notification page posts back to
    pub deploy_base_url: String,
    /// Outbound request timeout in seconds (None = HTTP client default)
    pub request_timeout_seconds: Option<u32>,
    /// Logging verbosity level
    pub log_level: LogLevel,
    /// Applications known to the static registry
    pub applications: Vec<Application>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            push_base_url: "http://127.0.0.1:8080/push".to_string(),
            deploy_base_url: "http://127.0.0.1:8080/plugin".to_string(),
            request_timeout_seconds: None,
            log_level: LogLevel::Info,
            applications: Vec::new(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from file, falling back to defaults when it does not exist
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: RelayConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(RelayConfig::default())
        }
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("pushrelay").join("config.toml"))
    }

    /// Deploy base URL for an application, honouring its override
    pub fn deploy_base_url_for<'a>(&'a self, application: &'a Application) -> &'a str {
        application
            .deploy_base_url
            .as_deref()
            .unwrap_or(&self.deploy_base_url)
    }

    /// Validate configuration values. URLs are taken as given.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Some(timeout) = self.request_timeout_seconds {
            if timeout == 0 || timeout > MAX_REQUEST_TIMEOUT_SECS {
                errors.push(format!(
                    "request_timeout_seconds must be between 1 and {}",
                    MAX_REQUEST_TIMEOUT_SECS
                ));
            }
        }

        let mut seen = HashSet::new();
        for app in &self.applications {
            if app.domain.is_empty() {
                errors.push("application domain cannot be empty".to_string());
            } else if !seen.insert(app.domain.as_str()) {
                errors.push(format!("duplicate application domain: {}", app.domain));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}
