//! The document drafting state machine.
//!
//! Stages: `Configuring -> Generating -> Drafted`. `Drafted` is
//! terminal-stable: the user edits the text in place or regenerates, which
//! restarts the cycle and discards both the prior result and any hand
//! edits.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::ai::CounselEngine;
use crate::catalog::ReferenceCatalog;
use crate::core::{TaskRunner, TaskStatus};

/// Stage of the drafting workflow, derived from the task lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DraftStage {
    /// Choosing a template and requirements.
    Configuring,

    /// Generation in flight.
    Generating,

    /// Draft text available and editable.
    Drafted,
}

/// Drives template selection through generation into an editable draft.
pub struct DraftingWorkflow {
    engine: Arc<dyn CounselEngine>,
    catalog: Arc<ReferenceCatalog>,
    drafting_delay: Duration,
    selected_template: Option<String>,
    requirements: String,
    /// Hand edits made after generation. The task result stays the seed
    /// value; this overlay wins once present.
    edited: Option<String>,
    task: TaskRunner<String>,
}

impl DraftingWorkflow {
    /// Create a workflow in `Configuring`.
    pub fn new(
        engine: Arc<dyn CounselEngine>,
        catalog: Arc<ReferenceCatalog>,
        drafting_delay: Duration,
    ) -> Self {
        Self {
            engine,
            catalog,
            drafting_delay,
            selected_template: None,
            requirements: String::new(),
            edited: None,
            task: TaskRunner::new(),
        }
    }

    /// Current stage.
    pub fn stage(&self) -> DraftStage {
        match self.task.status() {
            TaskStatus::Idle => DraftStage::Configuring,
            TaskStatus::Running => DraftStage::Generating,
            TaskStatus::Done => DraftStage::Drafted,
        }
    }

    /// Id of the selected template, if one was chosen.
    pub fn selected_template(&self) -> Option<&str> {
        self.selected_template.as_deref()
    }

    /// The free-form requirements text of the last generation request.
    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    /// The current draft text: hand edits if any, otherwise the generated
    /// seed. `None` until the first generation settles.
    pub fn text(&self) -> Option<String> {
        self.edited.clone().or_else(|| self.task.result())
    }

    /// Bracketed fill-ins still present in the current draft text.
    pub fn placeholders(&self) -> Vec<String> {
        self.text().map(|text| extract_placeholders(&text)).unwrap_or_default()
    }

    /// Start (or restart) generation.
    ///
    /// Precondition: `template_id` must resolve in the reference catalog;
    /// otherwise a guarded no-op. The industry id is interpolated but not
    /// validated - an unknown key falls back to the raw id. Refused while a
    /// generation is already in flight; valid again from `Drafted`, where it
    /// discards the prior result and any hand edits.
    pub fn generate(&mut self, template_id: &str, industry_id: &str, requirements: &str) -> bool {
        if self.stage() == DraftStage::Generating {
            tracing::debug!("generation already in flight");
            return false;
        }
        let Some(template) = self.catalog.template(template_id) else {
            tracing::debug!(template_id, "unknown template; generation refused");
            return false;
        };

        let template_name = template.name.clone();
        let industry_name = self
            .catalog
            .industry(industry_id)
            .map_or_else(|| industry_id.to_string(), |industry| industry.name.clone());

        tracing::info!(template = %template_name, industry = %industry_name, "draft generation started");
        self.selected_template = Some(template_id.to_string());
        self.requirements = requirements.to_string();
        self.edited = None;

        let engine = Arc::clone(&self.engine);
        let requirements = requirements.to_string();
        self.task.start(self.drafting_delay, move || {
            engine.draft(&template_name, &industry_name, &requirements)
        });
        true
    }

    /// Overwrite the draft text in place.
    ///
    /// Valid only once `Drafted`; the task status is untouched.
    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        if self.stage() != DraftStage::Drafted {
            tracing::debug!(stage = ?self.stage(), "draft edit refused");
            return false;
        }
        self.edited = Some(text.into());
        true
    }
}

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("placeholder pattern is valid"));

/// Bracketed `[...]` fill-ins in `text`, deduplicated, in order of first
/// appearance.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for capture in PLACEHOLDER.captures_iter(text) {
        let name = capture[1].to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ScriptedCounsel;

    const DELAY: Duration = Duration::from_millis(2500);

    fn workflow() -> DraftingWorkflow {
        DraftingWorkflow::new(
            Arc::new(ScriptedCounsel::new()),
            Arc::new(ReferenceCatalog::builtin()),
            DELAY,
        )
    }

    async fn settle() {
        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_generation_cycle() {
        let mut drafting = workflow();
        assert_eq!(drafting.stage(), DraftStage::Configuring);
        assert!(drafting.text().is_none());

        assert!(drafting.generate("gdpr-dpa", "tech", "Processor is a hosting provider."));
        assert_eq!(drafting.stage(), DraftStage::Generating);
        assert!(drafting.text().is_none());

        settle().await;
        assert_eq!(drafting.stage(), DraftStage::Drafted);
        let text = drafting.text().unwrap();
        assert!(text.contains("GDPR DATA PROCESSING AGREEMENT"));
        assert!(text.contains("Prepared for the Tech industry."));
        assert!(text.contains("Processor is a hosting provider."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_template_is_refused() {
        let mut drafting = workflow();
        assert!(!drafting.generate("", "finance", "anything"));
        assert!(!drafting.generate("no-such-template", "finance", "anything"));
        assert_eq!(drafting.stage(), DraftStage::Configuring);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_industry_falls_back_to_raw_id() {
        let mut drafting = workflow();
        drafting.generate("aml-kyc-policy", "maritime", "");
        settle().await;

        assert!(drafting.text().unwrap().contains("Prepared for the maritime industry."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_bypasses_the_task() {
        let mut drafting = workflow();
        drafting.generate("aml-kyc-policy", "finance", "");
        settle().await;

        assert!(drafting.edit("My own wording."));
        assert_eq!(drafting.text().unwrap(), "My own wording.");
        // The lifecycle did not move.
        assert_eq!(drafting.stage(), DraftStage::Drafted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_refused_before_drafted() {
        let mut drafting = workflow();
        assert!(!drafting.edit("too early"));

        drafting.generate("aml-kyc-policy", "finance", "");
        assert!(!drafting.edit("still generating"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_regenerate_discards_edits_and_result() {
        let mut drafting = workflow();
        drafting.generate("aml-kyc-policy", "finance", "first");
        settle().await;
        drafting.edit("hand-tuned text");

        assert!(drafting.generate("hipaa-baa", "healthcare", "second"));
        assert_eq!(drafting.stage(), DraftStage::Generating);
        assert!(drafting.text().is_none());

        settle().await;
        let text = drafting.text().unwrap();
        assert!(text.contains("HIPAA BUSINESS ASSOCIATE AGREEMENT"));
        assert!(!text.contains("hand-tuned text"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_refused_while_generating() {
        let mut drafting = workflow();
        drafting.generate("aml-kyc-policy", "finance", "first");
        assert!(!drafting.generate("hipaa-baa", "healthcare", "second"));

        settle().await;
        assert_eq!(drafting.selected_template(), Some("aml-kyc-policy"));
    }

    #[test]
    fn test_extract_placeholders() {
        let text = "between [Your Company Name] and [Recipient Name], laws of [Your State/Jurisdiction]; [Your Company Name] again";
        assert_eq!(
            extract_placeholders(text),
            vec!["Your Company Name", "Recipient Name", "Your State/Jurisdiction"]
        );
        assert!(extract_placeholders("no fill-ins here").is_empty());
    }
}
