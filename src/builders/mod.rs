//! Builders to construct schedulers from configuration.

pub mod scheduler_builder;

pub use scheduler_builder::build_scheduler;
#[cfg(feature = "tokio-runtime")]
pub use scheduler_builder::{build_tokio_scheduler, tokio_scheduler_from_env, TokioScheduler};
