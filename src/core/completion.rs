//! Single-fire completion signal for a scheduled task.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use super::SchedulerError;

/// Outcome delivered through a [`Completion`].
pub type TaskOutcome<T> = Result<T, SchedulerError>;

/// Resolves once the scheduled task has executed.
///
/// Awaiting yields the payload passed to
/// [`crate::core::FrameBudgetScheduler::run_task_with`] (or `()` for
/// [`crate::core::FrameBudgetScheduler::run_task`]). A request that is still
/// waiting for an in-budget frame keeps the future pending; there is no
/// timeout.
#[derive(Debug)]
#[must_use = "a completion does nothing unless awaited or polled"]
pub struct Completion<T> {
    rx: oneshot::Receiver<TaskOutcome<T>>,
}

/// Sending half kept by the pending task. Consumed on resolution, so a
/// request can resolve at most once.
#[derive(Debug)]
pub(crate) struct Resolver<T> {
    tx: oneshot::Sender<TaskOutcome<T>>,
}

pub(crate) fn completion_pair<T>() -> (Resolver<T>, Completion<T>) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx }, Completion { rx })
}

impl<T> Resolver<T> {
    /// Resolve the completion. Returns `false` if the caller already dropped
    /// the [`Completion`].
    pub(crate) fn resolve(self, outcome: TaskOutcome<T>) -> bool {
        self.tx.send(outcome).is_ok()
    }
}

impl<T> Completion<T> {
    /// Check for the outcome without waiting.
    ///
    /// Returns `None` while the task is still pending. Once an outcome has
    /// been taken, later calls report [`SchedulerError::Abandoned`].
    pub fn try_take(&mut self) -> Option<TaskOutcome<T>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(SchedulerError::Abandoned)),
        }
    }

    /// Block the current thread until the outcome is available.
    ///
    /// Must not be called from within an async runtime, nor on the thread
    /// that drives the frame trigger.
    pub fn wait(self) -> TaskOutcome<T> {
        self.rx
            .blocking_recv()
            .unwrap_or(Err(SchedulerError::Abandoned))
    }
}

impl<T> Future for Completion<T> {
    type Output = TaskOutcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(SchedulerError::Abandoned)))
    }
}
