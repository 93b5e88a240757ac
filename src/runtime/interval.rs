//! Tokio-driven frame trigger and clock.
//!
//! [`IntervalFrames`] stands in for a display: a background task ticks at a
//! fixed frame interval and runs the callbacks registered since the last tick.
//! Ticks that fall behind are delayed rather than bunched up, so a congested
//! runtime shows up as late frames, which the scheduler then treats as over
//! budget.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use super::queue::FrameQueue;
use crate::core::{FrameCallback, FrameClock, FrameTrigger, Spawn};

/// Default frame interval for a 60 Hz display.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

const MIN_FRAME_INTERVAL: Duration = Duration::from_micros(1);

/// Frame trigger ticked by a tokio interval.
///
/// The driver task stops on its own once the last handle to the trigger is
/// dropped; callbacks still registered at that point are dropped without
/// running.
pub struct IntervalFrames {
    queue: FrameQueue,
    frame_interval: Duration,
}

impl IntervalFrames {
    /// Create the trigger and spawn its driver on `spawner`.
    ///
    /// A zero interval is raised to one microsecond.
    pub fn start<S: Spawn>(frame_interval: Duration, spawner: &S) -> Arc<Self> {
        if frame_interval.is_zero() {
            warn!("zero frame interval requested, using 1us");
        }
        let frame_interval = frame_interval.max(MIN_FRAME_INTERVAL);
        let frames = Arc::new(Self {
            queue: FrameQueue::default(),
            frame_interval,
        });
        info!(frame_interval = ?frame_interval, "starting interval frame driver");
        spawner.spawn(drive(Arc::downgrade(&frames), frame_interval));
        frames
    }

    /// Interval between frame ticks.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.queue.pending()
    }

    /// Number of frames delivered so far.
    pub fn frame_count(&self) -> u64 {
        self.queue.frame_count()
    }
}

impl std::fmt::Debug for IntervalFrames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalFrames")
            .field("frame_interval", &self.frame_interval)
            .field("pending", &self.pending())
            .field("frames", &self.frame_count())
            .finish()
    }
}

impl FrameTrigger for IntervalFrames {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.push(callback);
    }
}

async fn drive(frames: Weak<IntervalFrames>, frame_interval: Duration) {
    let mut interval = tokio::time::interval(frame_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let Some(frames) = frames.upgrade() else {
            debug!("frame trigger dropped, stopping interval driver");
            break;
        };
        let (frame, count) = frames.queue.deliver();
        if count > 0 {
            trace!(frame, callbacks = count, "interval frame delivered");
        }
    }
}

/// Clock backed by [`tokio::time::Instant`], so it follows paused and
/// advanced time in tests.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    /// Create a clock whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
