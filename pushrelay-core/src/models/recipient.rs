//! Recipient descriptors

use serde::{Deserialize, Serialize};

/// Read-only application bundle owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Domain name the application is installed on
    pub domain: String,
    /// Overrides the relay-wide deploy base URL for this application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_base_url: Option<String>,
}

impl Application {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            deploy_base_url: None,
        }
    }

    pub fn with_deploy_base_url(mut self, url: impl Into<String>) -> Self {
        self.deploy_base_url = Some(url.into());
        self
    }
}

/// End-user mailbox addressed by a push URL.
///
/// `service_id`, `protocol` and `user_id` together identify a unique push
/// target. `back_page_url` comes from outside and is untrusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTarget {
    pub user_id: String,
    pub service_id: String,
    pub protocol: String,
    pub language: String,
    pub back_page_url: String,
    pub application: Application,
}

impl UserTarget {
    /// A target with an empty user or service id is treated like an absent one.
    pub fn is_addressable(&self) -> bool {
        !self.user_id.is_empty() && !self.service_id.is_empty()
    }
}

/// Operator (agent) reachable through a chat-platform conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub dialog_id: String,
    pub application: Application,
}

/// Kind of chat-platform conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationType {
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "private")]
    Private,
}

/// Conversation as returned by the conversation store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub dialog_id: String,
    pub conversation_type: ConversationType,
}

impl Conversation {
    pub fn group(dialog_id: impl Into<String>) -> Self {
        Self {
            dialog_id: dialog_id.into(),
            conversation_type: ConversationType::Group,
        }
    }
}
