//! Outbound push transport

use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Performs the single outbound request of a push delivery.
#[async_trait]
pub trait PushTransport: Send + Sync {
    /// Issue a GET against `url` and return the response status code.
    async fn get(&self, url: &str) -> Result<u16, TransportError>;
}

/// reqwest-backed transport. Only the status line is read from the response,
/// and no idle connection is kept: every push opens its own connection.
pub struct HttpPushTransport {
    client: Client,
}

impl HttpPushTransport {
    /// Create a transport; `None` keeps the client's default timeout behaviour.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder().pool_max_idle_per_host(0);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PushTransport for HttpPushTransport {
    async fn get(&self, url: &str) -> Result<u16, TransportError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
        let response = self.client.get(parsed).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                // The request URL carries the whole document
                TransportError::Request(e.without_url())
            }
        })?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_transport_error() {
        let transport = HttpPushTransport::new(None).unwrap();
        let err = transport.get("not a url?doc=x").await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = HttpPushTransport::new(Some(Duration::from_secs(5))).unwrap();
        let err = transport
            .get(&format!("http://127.0.0.1:{}/push", port))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }

    #[tokio::test]
    async fn test_request_error_omits_query() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = HttpPushTransport::new(Some(Duration::from_secs(5))).unwrap();
        let err = transport
            .get(&format!(
                "http://127.0.0.1:{}/push?user=u1&doc=SecretMessageBody",
                port
            ))
            .await
            .unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.starts_with("push request failed"));
        assert!(!rendered.contains("doc="));
        assert!(!rendered.contains("SecretMessageBody"));
    }
}
