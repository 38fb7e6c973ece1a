//! The document review state machine.
//!
//! Stages: `Empty -> FileSelected -> Analyzing -> Reviewed -> Empty`.
//! Invalid transitions are guarded no-ops, never errors: the mocked
//! analysis cannot fail and the workflow has no failure stage.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::ai::{CounselEngine, Findings};
use crate::core::{TaskRunner, TaskStatus};

/// The selected input artifact. File content is never read; the handle is
/// display metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHandle {
    /// File name as picked.
    pub name: String,

    /// Reported size in bytes.
    pub size_bytes: u64,
}

impl FileHandle {
    /// Create a handle.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self { name: name.into(), size_bytes }
    }
}

/// Stage of the review workflow, derived from the selected file and the
/// task lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewStage {
    /// No file selected.
    Empty,

    /// A file is selected; analysis has not started.
    FileSelected,

    /// Analysis in flight.
    Analyzing,

    /// Findings available.
    Reviewed,
}

/// Drives one document through the simulated compliance analysis.
pub struct ReviewWorkflow {
    engine: Arc<dyn CounselEngine>,
    analysis_delay: Duration,
    selected_file: Option<FileHandle>,
    task: TaskRunner<Findings>,
}

impl ReviewWorkflow {
    /// Create an empty workflow.
    pub fn new(engine: Arc<dyn CounselEngine>, analysis_delay: Duration) -> Self {
        Self { engine, analysis_delay, selected_file: None, task: TaskRunner::new() }
    }

    /// Current stage.
    pub fn stage(&self) -> ReviewStage {
        match (self.selected_file.is_some(), self.task.status()) {
            (_, TaskStatus::Running) => ReviewStage::Analyzing,
            (_, TaskStatus::Done) => ReviewStage::Reviewed,
            (true, TaskStatus::Idle) => ReviewStage::FileSelected,
            (false, TaskStatus::Idle) => ReviewStage::Empty,
        }
    }

    /// The selected file, if any.
    pub fn selected_file(&self) -> Option<&FileHandle> {
        self.selected_file.as_ref()
    }

    /// Analysis findings. `Some` only while `Reviewed`.
    pub fn findings(&self) -> Option<Findings> {
        self.task.result()
    }

    /// Select a file.
    ///
    /// Valid from `Empty` or `Reviewed`; selecting while `Reviewed` discards
    /// the prior findings. Refused while an analysis is in flight.
    pub fn select_file(&mut self, file: FileHandle) -> bool {
        match self.stage() {
            ReviewStage::Empty | ReviewStage::Reviewed => {
                self.task.reset();
                tracing::info!(file = %file.name, "file selected for review");
                self.selected_file = Some(file);
                true
            }
            stage => {
                tracing::debug!(?stage, "file selection refused");
                false
            }
        }
    }

    /// Start the simulated analysis.
    ///
    /// Valid only from `FileSelected`; a guarded no-op otherwise (including
    /// when no file is selected).
    pub fn analyze(&mut self) -> bool {
        if self.stage() != ReviewStage::FileSelected {
            tracing::debug!(stage = ?self.stage(), "analyze refused");
            return false;
        }
        let Some(file) = self.selected_file.clone() else {
            return false;
        };

        tracing::info!(file = %file.name, "analysis started");
        let engine = Arc::clone(&self.engine);
        self.task.start(self.analysis_delay, move || engine.analyze(&file.name));
        true
    }

    /// Discard the file and findings and return to `Empty`.
    ///
    /// Valid only from `Reviewed` ("review another document").
    pub fn reset(&mut self) -> bool {
        if self.stage() != ReviewStage::Reviewed {
            tracing::debug!(stage = ?self.stage(), "review reset refused");
            return false;
        }
        self.task.reset();
        self.selected_file = None;
        tracing::info!("review cleared");
        true
    }
}
