//! Simulated asynchronous work.
//!
//! Every long-running user action (document analysis, draft generation) runs
//! through a [`TaskRunner`]: a single-slot engine that executes a producer
//! once after a fixed latency and exposes the tri-state lifecycle
//! `Idle -> Running -> Done`. The latency is a `tokio::time::sleep`, so tests
//! under a paused runtime clock settle instantly.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

/// Identifier of one run of a task.
pub type TaskId = Uuid;

/// Lifecycle of a task slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// No work scheduled; no result held.
    #[default]
    Idle,

    /// Work is scheduled and will settle after its latency.
    Running,

    /// Work settled; the result is held.
    Done,
}

impl TaskStatus {
    /// Whether work is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Whether the task settled.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Shared task state. Invariant: `result` is `Some` iff `status == Done`.
#[derive(Debug)]
struct TaskCell<R> {
    status: TaskStatus,
    result: Option<R>,
    run_id: Option<TaskId>,
}

impl<R> Default for TaskCell<R> {
    fn default() -> Self {
        Self { status: TaskStatus::Idle, result: None, run_id: None }
    }
}

/// Owns one task slot and the only handle that may mutate it.
///
/// `start` is fire-and-forget: once a run begins it always settles and
/// applies its result, even if the page that started it is no longer active.
/// There is no cancellation.
#[derive(Debug)]
pub struct TaskRunner<R> {
    cell: Arc<Mutex<TaskCell<R>>>,
}

impl<R> Default for TaskRunner<R> {
    fn default() -> Self {
        Self { cell: Arc::new(Mutex::new(TaskCell::default())) }
    }
}

impl<R> TaskRunner<R> {
    /// Create an idle runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> TaskStatus {
        self.cell.lock().status
    }

    /// Id of the current or most recent run, if any.
    pub fn run_id(&self) -> Option<TaskId> {
        self.cell.lock().run_id
    }

    /// Return the slot to `Idle` and drop the held result.
    ///
    /// Refused while `Running`: a run in flight always settles, and nothing
    /// is queued behind it.
    pub fn reset(&self) -> bool {
        let mut cell = self.cell.lock();
        if cell.status.is_running() {
            tracing::warn!("task reset refused: run in flight");
            return false;
        }
        cell.status = TaskStatus::Idle;
        cell.result = None;
        cell.run_id = None;
        true
    }
}

impl<R: Send + 'static> TaskRunner<R> {
    /// Schedule `producer` to execute once after `latency`.
    ///
    /// If a run is already in flight this is a no-op returning the in-flight
    /// run id; the slot never holds overlapping runs. Otherwise the held
    /// result (if any) is dropped, the slot transitions to `Running`, and on
    /// settle the result is stored and the slot transitions to `Done` in one
    /// step.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&self, latency: Duration, producer: F) -> TaskId
    where
        F: FnOnce() -> R + Send + 'static,
    {
        let run_id = {
            let mut cell = self.cell.lock();
            if let (TaskStatus::Running, Some(id)) = (cell.status, cell.run_id) {
                tracing::debug!(run = %id, "task already running; start ignored");
                return id;
            }
            let id = Uuid::new_v4();
            cell.status = TaskStatus::Running;
            cell.result = None;
            cell.run_id = Some(id);
            id
        };

        tracing::debug!(run = %run_id, latency_ms = latency.as_millis() as u64, "task started");

        let cell = Arc::clone(&self.cell);
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let value = producer();

            let mut cell = cell.lock();
            cell.result = Some(value);
            cell.status = TaskStatus::Done;
            tracing::debug!(run = %run_id, "task settled");
        });

        run_id
    }
}

impl<R: Clone> TaskRunner<R> {
    /// The held result. `Some` iff the status is `Done`.
    pub fn result(&self) -> Option<R> {
        self.cell.lock().result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const LATENCY: Duration = Duration::from_millis(3000);

    /// A sleep just past the latency; under the paused test clock this
    /// fast-forwards through the scheduled run.
    async fn settle() {
        tokio::time::sleep(LATENCY + Duration::from_millis(10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle() {
        let runner: TaskRunner<u32> = TaskRunner::new();
        assert_eq!(runner.status(), TaskStatus::Idle);
        assert_eq!(runner.result(), None);

        runner.start(LATENCY, || 42);
        assert_eq!(runner.status(), TaskStatus::Running);
        assert_eq!(runner.result(), None);

        settle().await;
        assert_eq!(runner.status(), TaskStatus::Done);
        assert_eq!(runner.result(), Some(42));
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_held_iff_done() {
        let runner: TaskRunner<&'static str> = TaskRunner::new();

        assert!(runner.result().is_none());
        runner.start(LATENCY, || "ready");
        assert!(runner.result().is_none());

        settle().await;
        assert!(runner.status().is_done());
        assert!(runner.result().is_some());

        assert!(runner.reset());
        assert_eq!(runner.status(), TaskStatus::Idle);
        assert!(runner.result().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_overlapping_runs() {
        let runner: TaskRunner<usize> = TaskRunner::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let first = runner.start(LATENCY, move || counter.fetch_add(1, Ordering::SeqCst));

        // Second start while running is a no-op returning the same run.
        let counter = Arc::clone(&calls);
        let second = runner.start(LATENCY, move || counter.fetch_add(1, Ordering::SeqCst));
        assert_eq!(first, second);

        settle().await;
        settle().await;

        // The task settled exactly once.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(runner.status(), TaskStatus::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_refused_while_running() {
        let runner: TaskRunner<u32> = TaskRunner::new();
        runner.start(LATENCY, || 1);

        assert!(!runner.reset());
        assert_eq!(runner.status(), TaskStatus::Running);

        settle().await;
        assert!(runner.reset());
        assert_eq!(runner.status(), TaskStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_done_replaces_result() {
        let runner: TaskRunner<u32> = TaskRunner::new();

        runner.start(LATENCY, || 1);
        settle().await;
        assert_eq!(runner.result(), Some(1));

        let second = runner.start(LATENCY, || 2);
        assert_eq!(runner.status(), TaskStatus::Running);
        assert_eq!(runner.result(), None);
        assert_eq!(runner.run_id(), Some(second));

        settle().await;
        assert_eq!(runner.result(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_runners_do_not_interfere() {
        let a: TaskRunner<u32> = TaskRunner::new();
        let b: TaskRunner<&'static str> = TaskRunner::new();

        a.start(Duration::from_millis(3000), || 7);
        b.start(Duration::from_millis(2500), || "draft");

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert_eq!(a.status(), TaskStatus::Running);
        assert_eq!(b.status(), TaskStatus::Done);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(a.result(), Some(7));
        assert_eq!(b.result(), Some("draft"));
    }
}
