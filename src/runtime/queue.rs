//! Callback queue shared by the frame triggers.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::core::FrameCallback;

/// Registered frame callbacks plus a delivered-frame counter.
///
/// The lock is released before callbacks run, so a callback may register for
/// the next frame without deadlocking.
#[derive(Default)]
pub(crate) struct FrameQueue {
    callbacks: Mutex<Vec<FrameCallback>>,
    frames: AtomicU64,
}

impl FrameQueue {
    pub fn push(&self, callback: FrameCallback) {
        self.callbacks.lock().push(callback);
    }

    /// Run every callback registered before this call. Returns the frame
    /// number and how many callbacks ran.
    pub fn deliver(&self) -> (u64, usize) {
        let due = std::mem::take(&mut *self.callbacks.lock());
        let frame = self.frames.fetch_add(1, Ordering::SeqCst) + 1;
        let count = due.len();
        for callback in due {
            callback();
        }
        (frame, count)
    }

    pub fn pending(&self) -> usize {
        self.callbacks.lock().len()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames.load(Ordering::SeqCst)
    }

    pub fn clear(&self) -> usize {
        let dropped = std::mem::take(&mut *self.callbacks.lock());
        dropped.len()
    }
}
