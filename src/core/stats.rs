//! Scheduler counters and snapshots.

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time statistics for a [`crate::core::FrameBudgetScheduler`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SchedulerStats {
    /// Total requests submitted.
    pub submitted_tasks: u64,
    /// Requests whose task ran and whose completion resolved successfully.
    pub completed_tasks: u64,
    /// Requests whose task panicked.
    pub panicked_tasks: u64,
    /// Frame callbacks that fired over budget and re-armed a new cycle.
    pub deferred_cycles: u64,
    /// Requests still waiting for an in-budget frame.
    pub pending_tasks: u64,
}

/// Internal counters for scheduler statistics (thread-safe).
#[derive(Debug, Default)]
pub(crate) struct SchedulerCounters {
    pub submitted_tasks: AtomicU64,
    pub completed_tasks: AtomicU64,
    pub panicked_tasks: AtomicU64,
    pub deferred_cycles: AtomicU64,
    pub abandoned_tasks: AtomicU64,
}

impl SchedulerCounters {
    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> SchedulerStats {
        let submitted = self.submitted_tasks.load(Ordering::Relaxed);
        let completed = self.completed_tasks.load(Ordering::Relaxed);
        let panicked = self.panicked_tasks.load(Ordering::Relaxed);
        let abandoned = self.abandoned_tasks.load(Ordering::Relaxed);
        SchedulerStats {
            submitted_tasks: submitted,
            completed_tasks: completed,
            panicked_tasks: panicked,
            deferred_cycles: self.deferred_cycles.load(Ordering::Relaxed),
            pending_tasks: submitted.saturating_sub(completed + panicked + abandoned),
        }
    }
}
