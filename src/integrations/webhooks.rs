//! Outgoing webhooks stub.
//!
//! Connecting a webhook produces a signed ping payload and an
//! acknowledgment. The payload is built and signed exactly as a real
//! delivery would be, then acknowledged locally instead of sent.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::{IntegrationError, IntegrationResult};

/// Acknowledgment of a webhook connection.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    /// Unique ack id.
    pub id: Uuid,

    /// The connected URL.
    pub url: String,

    /// When the connection was acknowledged.
    pub connected_at: DateTime<Utc>,

    /// Hex SHA-256 signature of the ping payload, present when a signing
    /// secret is configured.
    pub signature: Option<String>,
}

/// The ping payload a real delivery would carry.
#[derive(Debug, Serialize)]
struct PingPayload<'a> {
    event: &'static str,
    url: &'a str,
    timestamp: i64,
    version: &'static str,
}

/// Accepts webhook connection requests.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Connect `url` and receive an acknowledgment.
    async fn connect(&self, url: &str) -> IntegrationResult<WebhookAck>;
}

/// The shipped sink: acknowledgment only.
#[derive(Debug, Clone, Default)]
pub struct StubWebhookSink {
    signing_secret: Option<String>,
}

impl StubWebhookSink {
    /// Create a sink, optionally signing ping payloads with `secret`.
    pub fn new(signing_secret: Option<String>) -> Self {
        Self { signing_secret }
    }

    /// Sign `payload` with the configured secret.
    fn sign(&self, payload: &str) -> Option<String> {
        self.signing_secret.as_ref().map(|secret| {
            let mut hasher = Sha256::new();
            hasher.update(secret.as_bytes());
            hasher.update(payload.as_bytes());
            hasher.finalize().iter().map(|byte| format!("{byte:02x}")).collect()
        })
    }
}

#[async_trait]
impl WebhookSink for StubWebhookSink {
    async fn connect(&self, url: &str) -> IntegrationResult<WebhookAck> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(IntegrationError::InvalidUrl(url.to_string()));
        }

        let payload = serde_json::to_string(&PingPayload {
            event: "webhook.connected",
            url,
            timestamp: Utc::now().timestamp(),
            version: crate::VERSION,
        })?;
        let signature = self.sign(&payload);

        let ack = WebhookAck {
            id: Uuid::new_v4(),
            url: url.to_string(),
            connected_at: Utc::now(),
            signature,
        };
        tracing::info!(ack = %ack.id, url, signed = ack.signature.is_some(), "webhook acknowledged");
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_acknowledges() {
        let sink = StubWebhookSink::new(None);
        let ack = sink.connect("https://hooks.example.com/compliance").await.unwrap();

        assert_eq!(ack.url, "https://hooks.example.com/compliance");
        assert!(ack.signature.is_none());
    }

    #[tokio::test]
    async fn test_connect_rejects_non_http_urls() {
        let sink = StubWebhookSink::new(None);

        assert!(matches!(
            sink.connect("ftp://example.com").await.unwrap_err(),
            IntegrationError::InvalidUrl(_)
        ));
        assert!(sink.connect("").await.is_err());
    }

    #[tokio::test]
    async fn test_secret_produces_signature() {
        let sink = StubWebhookSink::new(Some("s3cret".to_string()));
        let ack = sink.connect("https://hooks.example.com").await.unwrap();

        let signature = ack.signature.unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_is_deterministic_per_payload() {
        let sink = StubWebhookSink::new(Some("s3cret".to_string()));
        assert_eq!(sink.sign("payload"), sink.sign("payload"));
        assert_ne!(sink.sign("payload"), sink.sign("other"));
    }
}
