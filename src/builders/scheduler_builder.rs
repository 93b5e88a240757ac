//! Builders to construct frame-budget schedulers from configuration.

use crate::config::SchedulerConfig;
use crate::core::{FrameBudgetScheduler, FrameClock, FrameTrigger, SchedulerError};

#[cfg(feature = "tokio-runtime")]
use std::sync::Arc;

#[cfg(feature = "tokio-runtime")]
use crate::core::{AppResult, Spawn};
#[cfg(feature = "tokio-runtime")]
use crate::runtime::{IntervalFrames, TokioClock, TokioSpawner};

/// Build a scheduler from configuration and caller-supplied collaborators.
///
/// # Errors
///
/// Returns [`SchedulerError::InvalidConfig`] if `cfg` fails validation.
pub fn build_scheduler<C, F>(
    cfg: &SchedulerConfig,
    clock: C,
    frames: F,
) -> Result<FrameBudgetScheduler<C, F>, SchedulerError>
where
    C: FrameClock,
    F: FrameTrigger,
{
    cfg.validate().map_err(SchedulerError::InvalidConfig)?;
    tracing::debug!(
        frame_budget_ms = cfg.frame_budget_ms,
        "building frame-budget scheduler"
    );
    Ok(FrameBudgetScheduler::with_budget(
        clock,
        frames,
        cfg.frame_budget(),
    ))
}

/// Scheduler driven by a tokio interval.
#[cfg(feature = "tokio-runtime")]
pub type TokioScheduler = FrameBudgetScheduler<TokioClock, Arc<IntervalFrames>>;

/// Build a scheduler whose frames come from a tokio interval spawned on
/// `spawner`, ticking every `cfg.frame_interval_ms`.
///
/// # Errors
///
/// Returns [`SchedulerError::InvalidConfig`] if `cfg` fails validation.
#[cfg(feature = "tokio-runtime")]
pub fn build_tokio_scheduler<S: Spawn>(
    cfg: &SchedulerConfig,
    spawner: &S,
) -> Result<TokioScheduler, SchedulerError> {
    cfg.validate().map_err(SchedulerError::InvalidConfig)?;
    let frames = IntervalFrames::start(cfg.frame_interval(), spawner);
    build_scheduler(cfg, TokioClock::new(), frames)
}

/// Load configuration from the environment and build a tokio-driven
/// scheduler on the current runtime.
///
/// # Errors
///
/// Fails outside a tokio runtime, or if the environment holds invalid values.
#[cfg(feature = "tokio-runtime")]
pub fn tokio_scheduler_from_env() -> AppResult<TokioScheduler> {
    let cfg = SchedulerConfig::from_env()?;
    let spawner = TokioSpawner::current()
        .ok_or_else(|| anyhow::anyhow!("no tokio runtime is running"))?;
    Ok(build_tokio_scheduler(&cfg, &spawner)?)
}
