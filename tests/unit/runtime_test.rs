//! Tests for runtime adapters

use std::time::Duration;

use frame_budget::core::FrameBudgetScheduler;
#[cfg(feature = "tokio-runtime")]
use frame_budget::core::Spawn;
use frame_budget::runtime::{spawn_inline_worker, ManualClock, ManualFrames};
#[cfg(feature = "tokio-runtime")]
use frame_budget::runtime::TokioSpawner;

#[cfg(feature = "tokio-runtime")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[cfg(feature = "tokio-runtime")]
#[test]
fn test_tokio_spawner_outside_runtime() {
    assert!(TokioSpawner::current().is_none());
}

#[test]
fn test_worker_feeds_scheduler() {
    // Heavy work happens on the worker; only the cheap apply step is
    // scheduled on a frame.
    let worker = spawn_inline_worker("squares", |n: u64| n * n).unwrap();
    let scheduler = FrameBudgetScheduler::new(ManualClock::new(), ManualFrames::new());

    worker.post(12).unwrap();
    let squared = worker.recv_timeout(Duration::from_secs(5)).unwrap();

    let mut done = scheduler.run_task_with(|| {}, squared);
    scheduler.frames().tick();
    assert_eq!(done.try_take(), Some(Ok(144)));
    worker.terminate();
}
