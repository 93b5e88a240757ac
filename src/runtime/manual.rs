//! Hand-driven clock and frame trigger.
//!
//! Useful in tests and headless hosts where frames are produced by the caller
//! rather than a display. Nothing happens until [`ManualFrames::tick`] is
//! called.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::trace;

use super::queue::FrameQueue;
use crate::core::{FrameCallback, FrameClock, FrameTrigger};

/// Clock that only moves when told to. Resolution is one microsecond.
#[derive(Debug, Default)]
pub struct ManualClock {
    micros: AtomicU64,
}

impl ManualClock {
    /// Create a clock reading zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            micros: AtomicU64::new(0),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.micros.fetch_add(duration_micros(by), Ordering::SeqCst);
    }

    /// Set the clock to an absolute reading.
    pub fn set(&self, now: Duration) {
        self.micros.store(duration_micros(now), Ordering::SeqCst);
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_micros(self.micros.load(Ordering::SeqCst))
    }
}

fn duration_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Frame trigger whose frames are delivered by calling [`ManualFrames::tick`].
///
/// Callbacks registered while a tick is running wait for the following tick,
/// matching how a display delivers animation-frame callbacks.
#[derive(Default)]
pub struct ManualFrames {
    queue: FrameQueue,
}

impl ManualFrames {
    /// Create a trigger with no registered callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one frame: run every callback registered before this call.
    ///
    /// Returns the number of callbacks that ran.
    pub fn tick(&self) -> usize {
        let (frame, count) = self.queue.deliver();
        trace!(frame, callbacks = count, "manual frame delivered");
        count
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.queue.pending()
    }

    /// Number of frames delivered so far.
    pub fn frame_count(&self) -> u64 {
        self.queue.frame_count()
    }

    /// Drop every registered callback without running it.
    pub fn clear(&self) {
        let dropped = self.queue.clear();
        trace!(dropped, "manual frame callbacks cleared");
    }
}

impl std::fmt::Debug for ManualFrames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualFrames")
            .field("pending", &self.pending())
            .field("frames", &self.frame_count())
            .finish()
    }
}

impl FrameTrigger for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.push(callback);
    }
}
