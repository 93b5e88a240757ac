//! Configuration models for the scheduler and its frame driver.

pub mod scheduler;

pub use scheduler::{SchedulerConfig, ENV_FRAME_BUDGET_MS, ENV_FRAME_INTERVAL_MS};
