//! Core scheduling abstractions: frame collaborators, the frame-budget
//! scheduler and its completion signal.

pub mod completion;
pub mod error;
pub mod frame;
pub mod scheduler;
pub mod spawn;
pub mod stats;

pub use completion::{Completion, TaskOutcome};
pub use error::{AppResult, SchedulerError};
pub use frame::{FrameCallback, FrameClock, FrameTrigger, SystemClock};
pub use scheduler::{FrameBudgetScheduler, TaskId, DEFAULT_FRAME_BUDGET};
pub use spawn::Spawn;
pub use stats::SchedulerStats;
