//! Frame collaborators: the clock the scheduler reads and the trigger it
//! registers frame callbacks with.
//!
//! The scheduler only needs two operations from its host environment:
//! "read the current time" and "run this callback on the next frame". Any
//! implementation of [`FrameClock`] and [`FrameTrigger`] is sufficient, which
//! lets tests drive frames by hand (see [`crate::runtime::ManualFrames`]).

use std::sync::Arc;
use std::time::{Duration, Instant};

/// A one-shot callback registered for the next frame.
pub type FrameCallback = Box<dyn FnOnce() + Send + 'static>;

/// Monotonic time source.
pub trait FrameClock: Send + Sync + 'static {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

/// One-shot "next rendering frame" registration.
///
/// Implementations must not invoke `callback` from inside `request_frame`;
/// it runs on a later frame tick. The scheduler re-arms from within a
/// callback, so a synchronous trigger would nest calls without bound.
///
/// Dropping a registered callback without running it is allowed; the request
/// it belongs to then resolves as abandoned.
pub trait FrameTrigger: Send + Sync + 'static {
    /// Register `callback` to run on the next frame tick.
    fn request_frame(&self, callback: FrameCallback);
}

impl<C: FrameClock + ?Sized> FrameClock for Arc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<F: FrameTrigger + ?Sized> FrameTrigger for Arc<F> {
    fn request_frame(&self, callback: FrameCallback) {
        (**self).request_frame(callback);
    }
}

/// Wall clock backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
