#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]

//! # LexisComply
//!
//! Role-gated compliance document workspace: session management, page-level
//! access control, and simulated AI review/drafting workflows.
//!
//! Everything runs in memory and every "AI" result is pre-scripted, released
//! after a configurable simulated delay. What this crate actually provides
//! is the orchestration: a session store, a role-gated router, a generic
//! async task runner, and the two workflow state machines built on it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lexiscomply::{App, FileHandle, PageId};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let mut app = App::new()?;
//! app.login("priya.sharma@lexiscomply.ai", "admin123")?;
//! app.navigate(PageId::Review);
//! app.select_file(FileHandle::new("AML Policy Update.pdf", 1_204_224));
//! app.analyze();
//! # Ok(())
//! # }
//! ```

pub mod ai;
pub mod app;
pub mod catalog;
pub mod core;
pub mod integrations;
pub mod workflow;

pub use ai::{CounselEngine, Findings, Issue, IssueKind, ScriptedCounsel, Severity};
pub use catalog::{
    ComplianceRule, DashboardData, DocumentStatus, DocumentSummary, IdentityDirectory,
    IdentityRecord, Industry, ReferenceCatalog, StaticDirectory, Template,
};
pub use core::{
    is_allowed, visible_pages, AccessPolicy, AuthError, Config, Identity, PageId, Role, Router,
    SessionStore, TaskId, TaskRunner, TaskStatus,
};
pub use integrations::{
    ExportAck, IntegrationError, PdfExporter, StubPdfExporter, StubWebhookSink, WebhookAck,
    WebhookSink,
};
pub use workflow::{DraftStage, DraftingWorkflow, FileHandle, ReviewStage, ReviewWorkflow};

// Re-export commonly used types
pub use app::{App, AppSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "lexiscomply";
