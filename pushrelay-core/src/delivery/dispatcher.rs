//! Push delivery to end-users
//!
//! A delivery builds the notification page, percent-encodes it as one opaque
//! query value, issues a single GET against the push URL and classifies the
//! response. Failures end in a log line on [`OPERATIONAL_TARGET`]; nothing is
//! retried and nothing is surfaced to the caller of [`Dispatcher::deliver_to_user`].

use crate::delivery::encoding::{encode, escape};
use crate::delivery::pretty::pretty_markup;
use crate::delivery::push_url::build_push_url;
use crate::delivery::template::{build_basic_page, build_input_url};
use crate::delivery::transport::{HttpPushTransport, PushTransport};
use crate::error::TransportError;
use crate::models::{RelayConfig, UserTarget};
use crate::services::logging::{DOCUMENT_TARGET, OPERATIONAL_TARGET};
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use uuid::Uuid;

/// Status code the push endpoint answers on acceptance
const ACCEPTED_STATUS: u16 = 200;

/// Result of one push attempt
#[derive(Debug)]
pub enum DeliveryOutcome {
    Delivered,
    Rejected { status: u16 },
    TransportFailure(TransportError),
}

impl DeliveryOutcome {
    fn from_response(response: Result<u16, TransportError>) -> Self {
        match response {
            Ok(ACCEPTED_STATUS) => DeliveryOutcome::Delivered,
            Ok(status) => DeliveryOutcome::Rejected { status },
            Err(e) => DeliveryOutcome::TransportFailure(e),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Delivers notification pages to end-user mailboxes.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<RelayConfig>,
    transport: Arc<dyn PushTransport>,
}

impl Dispatcher {
    pub fn new(config: RelayConfig, transport: Arc<dyn PushTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Dispatcher over HTTP, honouring the configured request timeout.
    pub fn with_http(config: RelayConfig) -> Result<Self, TransportError> {
        let timeout = config
            .request_timeout_seconds
            .map(|secs| Duration::from_secs(u64::from(secs)));
        let transport = HttpPushTransport::new(timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Build the notification page for `target`.
    pub fn build_document(&self, target: &UserTarget, message: &str) -> String {
        let application = &target.application;
        let deploy_base_url = self.config.deploy_base_url_for(application);
        let encoded_back_url = encode(&target.back_page_url);
        let input_url = build_input_url(
            deploy_base_url,
            &application.domain,
            &target.language,
            &encoded_back_url,
        );
        build_basic_page(
            message,
            &escape(&input_url),
            &encoded_back_url,
            &target.language,
        )
    }

    /// Full push URL for `target`, document included.
    pub fn build_push_url(&self, target: &UserTarget, message: &str) -> String {
        let document = self.build_document(target, message);
        self.push_url_for_document(target, &document)
    }

    fn push_url_for_document(&self, target: &UserTarget, document: &str) -> String {
        build_push_url(
            &self.config.push_base_url,
            &target.service_id,
            &target.user_id,
            &target.protocol,
            &encode(document),
        )
    }

    /// Perform one push attempt and report its outcome without logging it.
    pub async fn push(&self, target: &UserTarget, message: &str) -> DeliveryOutcome {
        self.attempt(Uuid::new_v4(), target, message).await
    }

    async fn attempt(
        &self,
        delivery_id: Uuid,
        target: &UserTarget,
        message: &str,
    ) -> DeliveryOutcome {
        let document = self.build_document(target, message);

        if tracing::enabled!(target: DOCUMENT_TARGET, Level::DEBUG) {
            tracing::debug!(
                target: DOCUMENT_TARGET,
                delivery_id = %delivery_id,
                "pushed document:\n{}",
                pretty_markup(&document)
            );
        }

        let push_url = self.push_url_for_document(target, &document);
        DeliveryOutcome::from_response(self.transport.get(&push_url).await)
    }

    /// Best-effort delivery. Absent or unaddressable targets are skipped silently;
    /// failures are logged and swallowed.
    pub async fn deliver_to_user(&self, target: Option<&UserTarget>, message: &str) {
        let Some(target) = target.filter(|t| t.is_addressable()) else {
            return;
        };

        let delivery_id = Uuid::new_v4();
        let outcome = self.attempt(delivery_id, target, message).await;
        log_outcome(delivery_id, target, &outcome);
    }
}

fn log_outcome(delivery_id: Uuid, target: &UserTarget, outcome: &DeliveryOutcome) {
    match outcome {
        DeliveryOutcome::Delivered => {}
        DeliveryOutcome::Rejected { status } => {
            tracing::error!(
                target: OPERATIONAL_TARGET,
                delivery_id = %delivery_id,
                user_id = %target.user_id,
                service_id = %target.service_id,
                protocol = %target.protocol,
                status = *status,
                "Unable to push message"
            );
        }
        DeliveryOutcome::TransportFailure(e) => {
            tracing::error!(
                target: OPERATIONAL_TARGET,
                delivery_id = %delivery_id,
                user_id = %target.user_id,
                service_id = %target.service_id,
                protocol = %target.protocol,
                error = %e,
                "Unable to push message"
            );
        }
    }
}
