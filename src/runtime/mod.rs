//! Runtime adapters: frame triggers and clocks for the scheduler, a tokio
//! spawner, and the inline background worker.

pub mod manual;
mod queue;
#[cfg(feature = "tokio-runtime")]
pub mod interval;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_spawner;
#[cfg(not(target_arch = "wasm32"))]
pub mod worker;

pub use manual::{ManualClock, ManualFrames};
#[cfg(feature = "tokio-runtime")]
pub use interval::{IntervalFrames, TokioClock, DEFAULT_FRAME_INTERVAL};
#[cfg(feature = "tokio-runtime")]
pub use tokio_spawner::TokioSpawner;
#[cfg(not(target_arch = "wasm32"))]
pub use worker::{spawn_inline_worker, InlineWorker, WorkerError};
