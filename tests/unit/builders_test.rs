//! Tests for builder modules

use std::time::Duration;

use frame_budget::builders::build_scheduler;
#[cfg(feature = "tokio-runtime")]
use frame_budget::builders::build_tokio_scheduler;
use frame_budget::config::SchedulerConfig;
use frame_budget::core::SchedulerError;
use frame_budget::runtime::{ManualClock, ManualFrames};
#[cfg(feature = "tokio-runtime")]
use frame_budget::runtime::TokioSpawner;

#[test]
fn test_build_scheduler_uses_configured_budget() {
    let config = SchedulerConfig {
        frame_budget_ms: 4.0,
        ..SchedulerConfig::default()
    };
    let scheduler = build_scheduler(&config, ManualClock::new(), ManualFrames::new()).unwrap();
    assert_eq!(scheduler.budget(), Duration::from_millis(4));

    let mut done = scheduler.run_task(|| {});
    scheduler.clock().advance(Duration::from_millis(5));
    scheduler.frames().tick();
    assert!(done.try_take().is_none());
    scheduler.clock().advance(Duration::from_millis(3));
    scheduler.frames().tick();
    assert_eq!(done.try_take(), Some(Ok(())));
}

#[test]
fn test_build_scheduler_rejects_invalid_config() {
    let config = SchedulerConfig {
        frame_budget_ms: -2.0,
        ..SchedulerConfig::default()
    };
    let err = build_scheduler(&config, ManualClock::new(), ManualFrames::new()).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidConfig(_)));
}

#[cfg(feature = "tokio-runtime")]
#[tokio::test(start_paused = true)]
async fn test_build_tokio_scheduler() {
    let spawner = TokioSpawner::current().expect("inside runtime");
    let config = SchedulerConfig {
        frame_interval_ms: 5.0,
        ..SchedulerConfig::default()
    };
    let scheduler = build_tokio_scheduler(&config, &spawner).unwrap();
    assert_eq!(scheduler.frames().frame_interval(), Duration::from_millis(5));

    let outcome = tokio::time::timeout(Duration::from_secs(1), scheduler.run_task_with(|| {}, 'x'))
        .await
        .expect("completion within timeout");
    assert_eq!(outcome, Ok('x'));
}
