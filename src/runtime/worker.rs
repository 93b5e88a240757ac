//! Background worker spun up from an inline closure.
//!
//! The worker owns a dedicated OS thread. Messages posted to it are handed to
//! the closure one at a time, in order, and each return value is queued for
//! the owner to receive.
//!
//! # Design
//!
//! - **No polling**: the thread blocks on channel receive; callers block or
//!   time out on the output channel
//! - **Clean shutdown**: dropping the inbox sender ends the worker loop
//! - **Fault isolation**: a panicking handler closes the worker instead of
//!   taking the owner down

use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors reported by an [`InlineWorker`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    /// The worker thread could not be started.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(String),
    /// The worker has stopped; no more messages are accepted or produced.
    #[error("worker closed")]
    Closed,
    /// No output arrived within the requested timeout.
    #[error("timed out waiting for worker output")]
    Timeout,
}

/// Handle to a running background worker.
///
/// Dropping the handle terminates the worker and joins its thread.
pub struct InlineWorker<In, Out> {
    name: String,
    inbox: Option<Sender<In>>,
    outbox: Receiver<Out>,
    thread: Option<JoinHandle<()>>,
}

/// Start a worker thread named `name` that runs `handler` for every posted
/// message.
///
/// # Errors
///
/// Returns [`WorkerError::Spawn`] if the OS refuses to create the thread.
///
/// # Example
///
/// ```
/// use frame_budget::runtime::spawn_inline_worker;
///
/// let worker = spawn_inline_worker("doubler", |n: u32| n * 2).unwrap();
/// worker.post(21).unwrap();
/// assert_eq!(worker.recv(), Ok(42));
/// ```
pub fn spawn_inline_worker<In, Out, H>(
    name: impl Into<String>,
    mut handler: H,
) -> Result<InlineWorker<In, Out>, WorkerError>
where
    In: Send + 'static,
    Out: Send + 'static,
    H: FnMut(In) -> Out + Send + 'static,
{
    let name = name.into();
    let (inbox_tx, inbox_rx) = unbounded::<In>();
    let (outbox_tx, outbox_rx) = unbounded::<Out>();

    let thread_name = name.clone();
    let thread = thread::Builder::new()
        .name(format!("inline-worker-{name}"))
        .spawn(move || {
            debug!(worker = %thread_name, "worker thread started");
            while let Ok(message) = inbox_rx.recv() {
                match panic::catch_unwind(AssertUnwindSafe(|| handler(message))) {
                    Ok(output) => {
                        if outbox_tx.send(output).is_err() {
                            debug!(worker = %thread_name, "owner gone, exiting");
                            break;
                        }
                    }
                    Err(_) => {
                        error!(worker = %thread_name, "worker handler panicked, closing");
                        break;
                    }
                }
            }
            // Close the inbox before the outbox so a caller that sees the
            // outbox disconnect can no longer post.
            drop(inbox_rx);
            drop(outbox_tx);
            debug!(worker = %thread_name, "worker thread exiting");
        })
        .map_err(|e| WorkerError::Spawn(e.to_string()))?;

    info!(worker = %name, "inline worker started");
    Ok(InlineWorker {
        name,
        inbox: Some(inbox_tx),
        outbox: outbox_rx,
        thread: Some(thread),
    })
}

impl<In, Out> InlineWorker<In, Out> {
    /// Worker name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Send a message to the worker.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Closed`] once the worker has stopped.
    pub fn post(&self, message: In) -> Result<(), WorkerError> {
        let Some(inbox) = self.inbox.as_ref() else {
            return Err(WorkerError::Closed);
        };
        inbox.send(message).map_err(|_| WorkerError::Closed)
    }

    /// Block until the next output is available.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Closed`] if the worker stopped and every output
    /// has been received.
    pub fn recv(&self) -> Result<Out, WorkerError> {
        self.outbox.recv().map_err(|_| WorkerError::Closed)
    }

    /// Wait up to `timeout` for the next output.
    ///
    /// # Errors
    ///
    /// [`WorkerError::Timeout`] if nothing arrived in time,
    /// [`WorkerError::Closed`] if the worker stopped.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Out, WorkerError> {
        self.outbox.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => WorkerError::Timeout,
            RecvTimeoutError::Disconnected => WorkerError::Closed,
        })
    }

    /// Take the next output if one is ready.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Closed`] if the worker stopped and every output
    /// has been received.
    pub fn try_recv(&self) -> Result<Option<Out>, WorkerError> {
        match self.outbox.try_recv() {
            Ok(output) => Ok(Some(output)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Closed),
        }
    }

    /// Stop accepting messages, let the worker drain what it already has,
    /// and join its thread.
    pub fn terminate(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.inbox = None;
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!(worker = %self.name, "worker thread panicked during shutdown");
            } else {
                debug!(worker = %self.name, "worker joined");
            }
        }
    }
}

impl<In, Out> Drop for InlineWorker<In, Out> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<In, Out> std::fmt::Debug for InlineWorker<In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineWorker")
            .field("name", &self.name)
            .field("running", &self.thread.is_some())
            .finish_non_exhaustive()
    }
}
