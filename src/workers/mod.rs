//! # Order Worker Pool
//!
//! Fan-out/fan-in around the order list. [`OrderWorkerPool::dispatch`] spawns one
//! task per confirmed line; each task appends its line through an [`OrderSink`]
//! and posts a confirmation on a shared message channel.
//!
//! Every worker owns a clone of the message sender. Once the pool drops its own
//! sender in [`OrderWorkerPool::finish`], the channel closes exactly when the last
//! worker finishes, so draining it is the counting join. The whole drain runs under
//! a single timeout; workers still running when it elapses are aborted.

pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::clients::OrderSink;
use crate::model::OrderLine;
use crate::terminal::write_line;

/// How the join phase went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinReport {
    pub dispatched: usize,
    pub appended: usize,
    pub failed: usize,
}

// Decrements the in-flight counter however the worker ends, abort included.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter.clone())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct OrderWorkerPool<S: OrderSink> {
    sink: S,
    messages_tx: mpsc::Sender<String>,
    messages_rx: mpsc::Receiver<String>,
    handles: Vec<JoinHandle<bool>>,
    in_flight: Arc<AtomicUsize>,
}

impl<S: OrderSink> OrderWorkerPool<S> {
    pub fn new(sink: S, message_buffer: usize) -> Self {
        let (messages_tx, messages_rx) = mpsc::channel(message_buffer);
        Self {
            sink,
            messages_tx,
            messages_rx,
            handles: Vec::new(),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Workers spawned so far.
    pub fn dispatched(&self) -> usize {
        self.handles.len()
    }

    /// Workers that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Spawns a worker that appends `line` and reports back.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn dispatch(&mut self, line: OrderLine) {
        let worker = self.handles.len() + 1;
        let sink = self.sink.clone();
        let messages = self.messages_tx.clone();
        let guard = InFlight::enter(&self.in_flight);
        let span = info_span!("order_worker", worker, item = %line.name);

        let handle = tokio::spawn(
            async move {
                let _guard = guard;
                let name = line.name.clone();
                let quantity = line.quantity;
                match sink.append(line).await {
                    Ok(size) => {
                        debug!(size, "Line appended");
                        let _ = messages
                            .send(format!("Ditambahkan {} {} ke pesanan.", quantity, name))
                            .await;
                        true
                    }
                    Err(e) => {
                        error!(error = %e, "Append failed");
                        let _ = messages
                            .send(format!("Gagal menambahkan {} ke pesanan: {}", name, e))
                            .await;
                        false
                    }
                }
            }
            .instrument(span),
        );
        self.handles.push(handle);
    }

    /// Waits for every worker, printing confirmations as they arrive.
    ///
    /// Fails with [`PoolError::Timeout`] if the workers have not all finished
    /// within `timeout`; unfinished workers are aborted.
    pub async fn finish<W>(self, timeout: Duration, output: &mut W) -> Result<JoinReport, PoolError>
    where
        W: AsyncWrite + Unpin,
    {
        let Self {
            sink,
            messages_tx,
            mut messages_rx,
            handles,
            in_flight,
        } = self;
        drop(messages_tx);
        drop(sink);

        let dispatched = handles.len();
        let abort_handles: Vec<_> = handles.iter().map(|h| h.abort_handle()).collect();
        info!(dispatched, ?timeout, "Waiting for workers");

        let join = async {
            while let Some(message) = messages_rx.recv().await {
                write_line(output, &message).await?;
            }
            let mut report = JoinReport {
                dispatched,
                appended: 0,
                failed: 0,
            };
            for handle in handles {
                match handle.await {
                    Ok(true) => report.appended += 1,
                    Ok(false) => report.failed += 1,
                    Err(e) => {
                        error!(error = %e, "Worker task failed");
                        report.failed += 1;
                    }
                }
            }
            Ok::<_, PoolError>(report)
        };

        match tokio::time::timeout(timeout, join).await {
            Ok(result) => {
                if let Ok(report) = &result {
                    info!(appended = report.appended, failed = report.failed, "Workers joined");
                }
                result
            }
            Err(_) => {
                let pending = in_flight.load(Ordering::SeqCst);
                warn!(pending, ?timeout, "Join timed out, abandoning workers");
                for handle in abort_handles {
                    handle.abort();
                }
                Err(PoolError::Timeout(timeout))
            }
        }
    }
}
