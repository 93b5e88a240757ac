//! Error types for scheduler operations.

use thiserror::Error;

/// Errors produced by scheduler components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The task panicked while running inside its frame callback.
    #[error("task panicked: {0}")]
    TaskPanicked(String),
    /// The frame trigger dropped the pending callback before it fired.
    #[error("task abandoned before it could run")]
    Abandoned,
    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
