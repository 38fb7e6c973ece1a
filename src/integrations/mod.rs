//! External integrations module.
//!
//! Acknowledgment-only stubs for the surfaces a real deployment would wire
//! up: PDF export and outgoing webhooks. Nothing here performs I/O; every
//! call settles locally with an ack the presentation layer can surface.

pub mod export;
pub mod webhooks;

pub use export::{ExportAck, PdfExporter, StubPdfExporter};
pub use webhooks::{StubWebhookSink, WebhookAck, WebhookSink};

use thiserror::Error;

/// Result type for integration operations.
pub type IntegrationResult<T> = Result<T, IntegrationError>;

/// Errors that can occur during integration operations.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// No draft or report text is available to export.
    #[error("nothing to export: no document text available")]
    NothingToExport,

    /// The webhook URL is not usable.
    #[error("invalid webhook url: {0}")]
    InvalidUrl(String),

    /// Payload serialization failed.
    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}
