//! Conversation lookup seam

use crate::error::ProviderError;
use crate::models::{Application, Conversation, ConversationType};
use async_trait::async_trait;

/// Persistence collaborator listing the conversations of an application.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn find_conversations(
        &self,
        application: &Application,
        conversation_type: ConversationType,
    ) -> Result<Vec<Conversation>, ProviderError>;
}
