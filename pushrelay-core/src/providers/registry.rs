//! Application registry

use crate::error::ProviderError;
use crate::models::{Application, RelayConfig};
use std::collections::HashMap;

/// Resolves the application installed on a domain.
pub trait ApplicationRegistry: Send + Sync {
    fn get_application(&self, domain: &str) -> Result<Application, ProviderError>;
}

/// Registry backed by the `applications` list of the relay configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticApplicationRegistry {
    applications: HashMap<String, Application>,
}

impl StaticApplicationRegistry {
    pub fn new(applications: impl IntoIterator<Item = Application>) -> Self {
        Self {
            applications: applications
                .into_iter()
                .map(|app| (app.domain.clone(), app))
                .collect(),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.applications.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}

impl ApplicationRegistry for StaticApplicationRegistry {
    fn get_application(&self, domain: &str) -> Result<Application, ProviderError> {
        self.applications
            .get(domain)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("application for domain {}", domain)))
    }
}
