//! # Frame Budget
//!
//! Frame-budget task scheduling plus a handful of small, independent helpers.
//!
//! The scheduler defers low-priority work across rendering frames so it never
//! eats into a frame that is already late. Each request reads the clock, waits
//! for the next frame, and runs only if that frame arrived within the budget
//! (16.6 ms by default). Otherwise it tries again on the following frame.
//!
//! ## Core Problem Solved
//!
//! Work scheduled naively on "the next frame" still runs when that frame is
//! delayed by a congested host, making a bad frame worse. Measuring elapsed
//! time at the frame boundary turns "a frame happened" into "a frame happened
//! *and had room*", so background work only claims idle time.
//!
//! ## Key Features
//!
//! - **Completion signal**: every request returns a [`core::Completion`] future
//!   that resolves with a caller-chosen payload once the task ran
//! - **Injectable collaborators**: the clock and the frame trigger are traits;
//!   [`runtime::ManualClock`] and [`runtime::ManualFrames`] drive everything
//!   by hand for tests and headless hosts
//! - **Tokio driver**: [`runtime::IntervalFrames`] ticks frames from a tokio
//!   interval
//! - **Fault reporting**: a panicking task resolves its completion as
//!   [`core::SchedulerError::TaskPanicked`] instead of leaving it pending
//! - **Inline workers**: [`runtime::spawn_inline_worker`] runs a closure on a
//!   dedicated background thread
//! - **Helpers**: class-name joining, prefix patterns, device detection, text
//!   downloads and query-parameter parsing in [`helpers`]
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use frame_budget::core::FrameBudgetScheduler;
//! use frame_budget::runtime::{ManualClock, ManualFrames};
//!
//! let scheduler = FrameBudgetScheduler::new(ManualClock::new(), ManualFrames::new());
//! let mut done = scheduler.run_task_with(|| { /* paint */ }, 7_u32);
//!
//! // The first frame arrives 20ms late: the task is deferred.
//! scheduler.clock().advance(Duration::from_millis(20));
//! scheduler.frames().tick();
//! assert!(done.try_take().is_none());
//!
//! // The next frame is on time: the task runs and the payload comes back.
//! scheduler.clock().advance(Duration::from_millis(2));
//! scheduler.frames().tick();
//! assert_eq!(done.try_take(), Some(Ok(7)));
//! ```
//!
//! With tokio, build a scheduler whose frames come from an interval:
//!
//! ```rust,ignore
//! use frame_budget::builders::build_tokio_scheduler;
//! use frame_budget::config::SchedulerConfig;
//! use frame_budget::runtime::TokioSpawner;
//!
//! let spawner = TokioSpawner::current().expect("inside a tokio runtime");
//! let scheduler = build_tokio_scheduler(&SchedulerConfig::default(), &spawner)?;
//! scheduler.run_task(|| rebuild_search_index()).await?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: collaborators, scheduler, completion.
pub mod core;
/// Configuration models for the scheduler and its frame driver.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Runtime adapters: frame triggers, clocks, spawners and inline workers.
pub mod runtime;
/// Small, independent environment helpers.
pub mod helpers;
/// Shared utilities.
pub mod util;

pub use crate::core::{Completion, FrameBudgetScheduler, SchedulerError};
