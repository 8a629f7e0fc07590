//! Message routing: end-users via push delivery, operators and chats via the chat platform

use crate::delivery::Dispatcher;
use crate::error::ProviderError;
use crate::models::{Application, ConversationType, Operator, UserTarget};
use crate::providers::{ChatPlatform, ConversationStore};
use crate::services::logging::OPERATIONAL_TARGET;
use std::sync::Arc;

/// Outcome of one conversation in a fan-out
#[derive(Debug)]
pub struct ChatDelivery {
    pub dialog_id: String,
    pub result: Result<(), ProviderError>,
}

impl ChatDelivery {
    pub fn is_delivered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Entry point selecting the delivery path for each kind of recipient.
#[derive(Clone)]
pub struct MessageRouter {
    dispatcher: Dispatcher,
    chat_platform: Arc<dyn ChatPlatform>,
    conversations: Arc<dyn ConversationStore>,
}

impl MessageRouter {
    pub fn new(
        dispatcher: Dispatcher,
        chat_platform: Arc<dyn ChatPlatform>,
        conversations: Arc<dyn ConversationStore>,
    ) -> Self {
        Self {
            dispatcher,
            chat_platform,
            conversations,
        }
    }

    /// Push `message` to an end-user. No-op for an absent target.
    pub async fn send_to_user(&self, target: Option<&UserTarget>, message: &str) {
        self.dispatcher.deliver_to_user(target, message).await;
    }

    /// Forward `message` to the operator's conversation. No-op for an absent operator.
    pub async fn send_to_operator(&self, operator: Option<&Operator>, message: &str) {
        let Some(operator) = operator else {
            return;
        };
        let result = self
            .chat_platform
            .send_message(&operator.application, &operator.dialog_id, message)
            .await;
        self.log_chat_failure(&operator.application, &operator.dialog_id, &result);
    }

    /// Forward an image to the operator's conversation. No-op for an absent operator.
    pub async fn send_image_to_operator(
        &self,
        operator: Option<&Operator>,
        title: &str,
        image_url: &str,
    ) {
        let Some(operator) = operator else {
            return;
        };
        let result = self
            .chat_platform
            .send_image(&operator.application, &operator.dialog_id, title, image_url)
            .await;
        self.log_chat_failure(&operator.application, &operator.dialog_id, &result);
    }

    /// Forward `message` to one conversation.
    pub async fn send_to_chat(&self, application: &Application, dialog_id: &str, message: &str) {
        let result = self
            .chat_platform
            .send_message(application, dialog_id, message)
            .await;
        self.log_chat_failure(application, dialog_id, &result);
    }

    /// Forward `message` to every group conversation of `application`, one after another.
    ///
    /// Each conversation's result is captured on its own; a failed send never
    /// stops the remaining ones. A failed lookup yields an empty report.
    pub async fn send_to_all_chats(
        &self,
        application: &Application,
        message: &str,
    ) -> Vec<ChatDelivery> {
        let chats = match self
            .conversations
            .find_conversations(application, ConversationType::Group)
            .await
        {
            Ok(chats) => chats,
            Err(e) => {
                tracing::error!(
                    target: OPERATIONAL_TARGET,
                    domain = %application.domain,
                    error = %e,
                    "Unable to list group conversations"
                );
                return Vec::new();
            }
        };

        let mut deliveries = Vec::with_capacity(chats.len());
        for chat in chats {
            let result = self
                .chat_platform
                .send_message(application, &chat.dialog_id, message)
                .await;
            self.log_chat_failure(application, &chat.dialog_id, &result);
            deliveries.push(ChatDelivery {
                dialog_id: chat.dialog_id,
                result,
            });
        }
        deliveries
    }

    fn log_chat_failure(
        &self,
        application: &Application,
        dialog_id: &str,
        result: &Result<(), ProviderError>,
    ) {
        if let Err(e) = result {
            tracing::error!(
                target: OPERATIONAL_TARGET,
                provider = self.chat_platform.name(),
                domain = %application.domain,
                dialog_id = dialog_id,
                error = %e,
                "chat platform delivery failed"
            );
        }
    }
}
