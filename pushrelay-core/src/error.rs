//! Error types shared by the relay

use thiserror::Error;

/// Failure to complete an outbound push request at the network level.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid push url: {0}")]
    InvalidUrl(String),

    #[error("push request timed out")]
    Timeout,

    #[error("push request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Failure reported by an external collaborator (chat platform, conversation store).
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
