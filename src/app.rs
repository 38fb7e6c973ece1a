//! Application state and lifecycle management.
//!
//! This module contains the central `App` struct that wires the session
//! store, router, workflows, catalogs, and integration stubs together, and
//! maps every presentation intent onto them. After each transition the
//! presentation layer reads a fresh [`AppSnapshot`]; it never touches
//! component state directly.

use std::sync::Arc;

use serde::Serialize;

use crate::ai::{CounselEngine, Findings, ScriptedCounsel};
use crate::catalog::{IdentityDirectory, ReferenceCatalog, StaticDirectory};
use crate::core::{
    visible_pages, AuthError, Config, Identity, PageId, Role, Router, SessionStore,
};
use crate::integrations::{
    ExportAck, IntegrationError, IntegrationResult, PdfExporter, StubPdfExporter, StubWebhookSink,
    WebhookAck, WebhookSink,
};
use crate::workflow::{DraftStage, DraftingWorkflow, FileHandle, ReviewStage, ReviewWorkflow};

/// Main application state.
///
/// The `App` struct is the single state container: one authenticated
/// session, one active page, and one instance of each workflow, all living
/// for the lifetime of the process.
pub struct App {
    /// Application configuration.
    config: Config,

    /// The authenticated session.
    session: SessionStore,

    /// Page selection and role gating.
    router: Router,

    /// Document review state machine.
    review: ReviewWorkflow,

    /// Document drafting state machine.
    drafting: DraftingWorkflow,

    /// Read-only reference data.
    catalog: Arc<ReferenceCatalog>,

    /// PDF export stub.
    exporter: Arc<dyn PdfExporter>,

    /// Webhook stub.
    webhooks: Arc<dyn WebhookSink>,
}

impl App {
    /// Create an application instance with the on-disk configuration and the
    /// built-in catalogs.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Ok(Self::from_parts(
            config,
            Arc::new(StaticDirectory::builtin()),
            Arc::new(ScriptedCounsel::new()),
        ))
    }

    /// Create an application instance from explicit parts.
    ///
    /// This is the seam tests use to inject their own identity table or
    /// engine.
    pub fn from_parts(
        config: Config,
        directory: Arc<dyn IdentityDirectory>,
        engine: Arc<dyn CounselEngine>,
    ) -> Self {
        let catalog = Arc::new(ReferenceCatalog::builtin());
        let review = ReviewWorkflow::new(Arc::clone(&engine), config.simulation.analysis_delay());
        let drafting = DraftingWorkflow::new(
            Arc::clone(&engine),
            Arc::clone(&catalog),
            config.simulation.drafting_delay(),
        );
        let webhooks = Arc::new(StubWebhookSink::new(config.webhooks.signing_secret.clone()));

        Self {
            session: SessionStore::new(directory),
            router: Router::new(config.access.policy),
            review,
            drafting,
            catalog,
            exporter: Arc::new(StubPdfExporter::new()),
            webhooks,
            config,
        }
    }

    // ------------------------------------------------------------------
    // Session intents
    // ------------------------------------------------------------------

    /// Authenticate and land on the dashboard.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = self.session.login(email, password)?;
        self.router.on_login();
        Ok(identity)
    }

    /// Clear the session and return to the login page. Idempotent.
    pub fn logout(&mut self) {
        self.session.logout();
        self.router.on_logout();
    }

    // ------------------------------------------------------------------
    // Navigation intents
    // ------------------------------------------------------------------

    /// Request a page; returns the now-active page.
    pub fn navigate(&mut self, page: PageId) -> PageId {
        self.router.navigate(self.session.current_role(), page)
    }

    /// The menu pages the current role may see. Empty while
    /// unauthenticated.
    pub fn visible_pages(&self) -> Vec<PageId> {
        self.session.current_role().map(visible_pages).unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Review intents
    // ------------------------------------------------------------------

    /// Select a document for review.
    pub fn select_file(&mut self, file: FileHandle) -> bool {
        self.review.select_file(file)
    }

    /// Start the simulated analysis of the selected document.
    pub fn analyze(&mut self) -> bool {
        self.review.analyze()
    }

    /// Discard the review and start over.
    pub fn reset_review(&mut self) -> bool {
        self.review.reset()
    }

    // ------------------------------------------------------------------
    // Drafting intents
    // ------------------------------------------------------------------

    /// Start (or restart) draft generation.
    pub fn generate_draft(
        &mut self,
        template_id: &str,
        industry_id: &str,
        requirements: &str,
    ) -> bool {
        self.drafting.generate(template_id, industry_id, requirements)
    }

    /// Overwrite the generated draft text in place.
    pub fn edit_draft(&mut self, text: impl Into<String>) -> bool {
        self.drafting.edit(text)
    }

    // ------------------------------------------------------------------
    // Integration intents
    // ------------------------------------------------------------------

    /// Export the current draft text as a PDF (acknowledgment only).
    pub async fn export_pdf(&self) -> IntegrationResult<ExportAck> {
        let text = self.drafting.text().ok_or(IntegrationError::NothingToExport)?;
        let title = self
            .drafting
            .selected_template()
            .and_then(|id| self.catalog.template(id))
            .map_or_else(|| "Draft Document".to_string(), |template| template.name.clone());
        self.exporter.export(&title, &text).await
    }

    /// Connect an outgoing webhook (acknowledgment only).
    pub async fn connect_webhook(&self, url: &str) -> IntegrationResult<WebhookAck> {
        self.webhooks.connect(url).await
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// The review workflow.
    pub fn review(&self) -> &ReviewWorkflow {
        &self.review
    }

    /// The drafting workflow.
    pub fn drafting(&self) -> &DraftingWorkflow {
        &self.drafting
    }

    /// The reference catalog.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A read-only snapshot of the full application state for the
    /// presentation layer.
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            page: self.router.current(),
            authenticated: self.session.is_authenticated(),
            user: self.session.identity().cloned(),
            menu: self.visible_pages(),
            review: ReviewSnapshot {
                stage: self.review.stage(),
                selected_file: self.review.selected_file().map(|file| file.name.clone()),
                findings: self.review.findings(),
            },
            draft: DraftSnapshot {
                stage: self.drafting.stage(),
                template: self.drafting.selected_template().map(str::to_string),
                text: self.drafting.text(),
                placeholders: self.drafting.placeholders(),
            },
        }
    }
}

/// Read-only view of the application state after a transition.
#[derive(Debug, Clone, Serialize)]
pub struct AppSnapshot {
    /// The active page.
    pub page: PageId,

    /// Whether a user is logged in.
    pub authenticated: bool,

    /// The authenticated identity, if any.
    pub user: Option<Identity>,

    /// Menu pages visible to the current role.
    pub menu: Vec<PageId>,

    /// Review workflow state.
    pub review: ReviewSnapshot,

    /// Drafting workflow state.
    pub draft: DraftSnapshot,
}

/// Review slice of a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSnapshot {
    /// Current stage.
    pub stage: ReviewStage,

    /// Name of the selected file, if any.
    pub selected_file: Option<String>,

    /// Findings once reviewed.
    pub findings: Option<Findings>,
}

/// Drafting slice of a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DraftSnapshot {
    /// Current stage.
    pub stage: DraftStage,

    /// Selected template id, if any.
    pub template: Option<String>,

    /// Current draft text, if any.
    pub text: Option<String>,

    /// Fill-ins still present in the draft text.
    pub placeholders: Vec<String>,
}

impl AppSnapshot {
    /// The current role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}
