//! PDF export stub.
//!
//! Export acknowledges and does nothing else: no file is generated and no
//! bytes leave the process.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{IntegrationError, IntegrationResult};

/// Acknowledgment of an export request.
#[derive(Debug, Clone, Serialize)]
pub struct ExportAck {
    /// Unique ack id.
    pub id: Uuid,

    /// Document title as submitted.
    pub title: String,

    /// Size of the submitted text in bytes.
    pub bytes: usize,

    /// When the request was acknowledged.
    pub exported_at: DateTime<Utc>,

    /// User-facing acknowledgment message.
    pub message: String,
}

/// Accepts document text for PDF export.
#[async_trait]
pub trait PdfExporter: Send + Sync {
    /// Submit `text` under `title` and receive an acknowledgment.
    async fn export(&self, title: &str, text: &str) -> IntegrationResult<ExportAck>;
}

/// The shipped exporter: acknowledgment only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPdfExporter;

impl StubPdfExporter {
    /// Create the exporter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PdfExporter for StubPdfExporter {
    async fn export(&self, title: &str, text: &str) -> IntegrationResult<ExportAck> {
        if text.is_empty() {
            return Err(IntegrationError::NothingToExport);
        }

        let ack = ExportAck {
            id: Uuid::new_v4(),
            title: title.to_string(),
            bytes: text.len(),
            exported_at: Utc::now(),
            message: format!("\"{title}\" queued for PDF export"),
        };
        tracing::info!(ack = %ack.id, title, bytes = ack.bytes, "export acknowledged");
        Ok(ack)
    }
}
