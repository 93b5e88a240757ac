//! Frame-budget task scheduler.
//!
//! A request is armed by reading the clock and registering a frame callback.
//! When the callback fires, the elapsed time since arming decides what
//! happens: strictly under budget, the task runs and the completion resolves;
//! otherwise the frame is treated as busy and the request re-arms with a fresh
//! cycle. A callback that fires late because the host was congested therefore
//! never counts as a free slot.
//!
//! ```text
//!            over budget (re-arm, new cycle start)
//!              +---------+
//!              v         |
//!  run_task -> PENDING --+--> DONE
//!                  under budget (run task, resolve)
//! ```
//!
//! The loop is unbounded: a host that never delivers an in-budget frame keeps
//! the request pending forever. There is no cancellation, but dropping every
//! handle to the scheduler abandons its pending requests.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::Ordering;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tracing::{debug, error, trace, warn};
use uuid::Uuid;

use super::completion::{completion_pair, Resolver};
use super::stats::SchedulerCounters;
use super::{Completion, FrameClock, FrameTrigger, SchedulerStats};

/// Default per-frame budget, modelling a ~60 Hz display (16.6 ms).
pub const DEFAULT_FRAME_BUDGET: Duration = Duration::from_micros(16_600);

/// Identifier attached to every request for log correlation.
pub type TaskId = Uuid;

type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

struct SchedulerInner<C, F> {
    clock: C,
    frames: F,
    budget: Duration,
    counters: SchedulerCounters,
}

/// Runs tasks only on frames that still have budget left.
///
/// Cloning is cheap; clones share the clock, the frame trigger and the
/// statistics counters. Requests are independent of each other: no ordering
/// or mutual exclusion is imposed between them.
///
/// # Example
///
/// ```
/// use frame_budget::core::FrameBudgetScheduler;
/// use frame_budget::runtime::{ManualClock, ManualFrames};
///
/// let scheduler = FrameBudgetScheduler::new(ManualClock::new(), ManualFrames::new());
/// let mut done = scheduler.run_task_with(|| println!("painted"), "payload");
///
/// assert!(done.try_take().is_none());
/// scheduler.frames().tick();
/// assert_eq!(done.try_take(), Some(Ok("payload")));
/// ```
pub struct FrameBudgetScheduler<C, F> {
    inner: Arc<SchedulerInner<C, F>>,
}

impl<C, F> Clone for FrameBudgetScheduler<C, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, F> fmt::Debug for FrameBudgetScheduler<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBudgetScheduler")
            .field("budget", &self.inner.budget)
            .field("stats", &self.inner.counters.snapshot())
            .finish_non_exhaustive()
    }
}

impl<C, F> FrameBudgetScheduler<C, F>
where
    C: FrameClock,
    F: FrameTrigger,
{
    /// Create a scheduler with the default 16.6 ms budget.
    pub fn new(clock: C, frames: F) -> Self {
        Self::with_budget(clock, frames, DEFAULT_FRAME_BUDGET)
    }

    /// Create a scheduler with a custom per-frame budget.
    pub fn with_budget(clock: C, frames: F, budget: Duration) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                clock,
                frames,
                budget,
                counters: SchedulerCounters::default(),
            }),
        }
    }

    /// Per-frame budget a callback must beat for the task to run.
    pub fn budget(&self) -> Duration {
        self.inner.budget
    }

    /// Clock this scheduler reads.
    pub fn clock(&self) -> &C {
        &self.inner.clock
    }

    /// Frame trigger this scheduler registers callbacks with.
    pub fn frames(&self) -> &F {
        &self.inner.frames
    }

    /// Snapshot of the scheduler counters.
    pub fn stats(&self) -> SchedulerStats {
        self.inner.counters.snapshot()
    }

    /// Schedule `task` on the first frame that fires within budget.
    ///
    /// The returned completion resolves with `()` after the task ran.
    pub fn run_task<G>(&self, task: G) -> Completion<()>
    where
        G: FnOnce() + Send + 'static,
    {
        self.run_task_with(task, ())
    }

    /// Schedule `task` and resolve the completion with `payload` once it ran.
    ///
    /// The payload is handed back unchanged; it is not produced by the task.
    /// If the task panics the completion resolves as
    /// [`crate::core::SchedulerError::TaskPanicked`] and the payload is dropped.
    pub fn run_task_with<G, T>(&self, task: G, payload: T) -> Completion<T>
    where
        G: FnOnce() + Send + 'static,
        T: Send + 'static,
    {
        let (resolver, completion) = completion_pair();
        let pending = PendingTask {
            id: Uuid::new_v4(),
            cycle: 0,
            task: Some(Box::new(task)),
            payload: Some(payload),
            resolver: Some(resolver),
            inner: Arc::downgrade(&self.inner),
        };
        self.inner
            .counters
            .submitted_tasks
            .fetch_add(1, Ordering::Relaxed);
        debug!(task_id = %pending.id, budget = ?self.inner.budget, "task submitted");
        pending.arm();
        completion
    }
}

/// A request in the PENDING state. Moves from one frame callback to the next
/// until it runs; the task, payload and resolver are taken exactly once.
///
/// Holds the scheduler weakly; the scheduler's frame trigger owns the callback
/// that owns this value.
struct PendingTask<C, F, T> {
    id: TaskId,
    cycle: u64,
    task: Option<BoxedTask>,
    payload: Option<T>,
    resolver: Option<Resolver<T>>,
    inner: Weak<SchedulerInner<C, F>>,
}

impl<C, F, T> PendingTask<C, F, T>
where
    C: FrameClock,
    F: FrameTrigger,
    T: Send + 'static,
{
    /// Start a new cycle: read the clock once and wait for the next frame.
    ///
    /// A request outliving its scheduler is dropped here, which abandons it.
    fn arm(mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        self.cycle += 1;
        let started_at = inner.clock.now();
        trace!(task_id = %self.id, cycle = self.cycle, "cycle armed");
        inner
            .frames
            .request_frame(Box::new(move || self.on_frame(started_at)));
    }

    fn on_frame(self, started_at: Duration) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let elapsed = inner.clock.now().saturating_sub(started_at);
        if elapsed < inner.budget {
            self.execute(&inner, elapsed);
            return;
        }

        inner.counters.deferred_cycles.fetch_add(1, Ordering::Relaxed);
        debug!(
            task_id = %self.id,
            cycle = self.cycle,
            elapsed = ?elapsed,
            budget = ?inner.budget,
            "frame over budget, deferring"
        );
        drop(inner);
        self.arm();
    }

    fn execute(mut self, inner: &SchedulerInner<C, F>, elapsed: Duration) {
        let (Some(task), Some(payload), Some(resolver)) =
            (self.task.take(), self.payload.take(), self.resolver.take())
        else {
            return;
        };

        let counters = &inner.counters;
        match panic::catch_unwind(AssertUnwindSafe(task)) {
            Ok(()) => {
                counters.completed_tasks.fetch_add(1, Ordering::Relaxed);
                debug!(task_id = %self.id, cycle = self.cycle, elapsed = ?elapsed, "task completed");
                if !resolver.resolve(Ok(payload)) {
                    trace!(task_id = %self.id, "completion dropped before resolution");
                }
            }
            Err(panic) => {
                counters.panicked_tasks.fetch_add(1, Ordering::Relaxed);
                let message = panic_message(panic.as_ref());
                error!(task_id = %self.id, cycle = self.cycle, %message, "task panicked");
                resolver.resolve(Err(super::SchedulerError::TaskPanicked(message)));
            }
        }
    }
}

impl<C, F, T> Drop for PendingTask<C, F, T> {
    fn drop(&mut self) {
        if self.resolver.is_some() {
            if let Some(inner) = self.inner.upgrade() {
                inner.counters.abandoned_tasks.fetch_add(1, Ordering::Relaxed);
            }
            warn!(task_id = %self.id, cycle = self.cycle, "frame callback dropped, task abandoned");
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
