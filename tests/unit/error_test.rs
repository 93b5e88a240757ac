//! Tests for error types

use frame_budget::core::SchedulerError;
use frame_budget::runtime::WorkerError;

#[test]
fn test_task_panicked_error() {
    let err = SchedulerError::TaskPanicked("boom".to_string());
    assert_eq!(format!("{}", err), "task panicked: boom");
}

#[test]
fn test_abandoned_error() {
    let err = SchedulerError::Abandoned;
    assert_eq!(format!("{}", err), "task abandoned before it could run");
}

#[test]
fn test_invalid_config_error() {
    let err = SchedulerError::InvalidConfig("frame_budget_ms must be positive".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: frame_budget_ms must be positive"
    );
}

#[test]
fn test_worker_errors() {
    assert_eq!(format!("{}", WorkerError::Closed), "worker closed");
    assert_eq!(
        format!("{}", WorkerError::Timeout),
        "timed out waiting for worker output"
    );
    assert_eq!(
        format!("{}", WorkerError::Spawn("no threads".into())),
        "failed to spawn worker thread: no threads"
    );
}

#[test]
fn test_scheduler_error_into_anyhow() {
    let err: anyhow::Error = SchedulerError::Abandoned.into();
    assert!(err.downcast_ref::<SchedulerError>().is_some());
}
