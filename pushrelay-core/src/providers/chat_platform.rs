//! Chat-platform client seam: outbound messages to operators and group chats

use crate::error::ProviderError;
use crate::models::Application;
use async_trait::async_trait;

/// External chat-platform API client (e.g. the helpdesk's messenger).
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Send a text message to the conversation `dialog_id` of `application`.
    async fn send_message(
        &self,
        application: &Application,
        dialog_id: &str,
        text: &str,
    ) -> Result<(), ProviderError>;

    /// Send an image with a caption to the conversation `dialog_id` of `application`.
    async fn send_image(
        &self,
        application: &Application,
        dialog_id: &str,
        title: &str,
        image_url: &str,
    ) -> Result<(), ProviderError>;
}
