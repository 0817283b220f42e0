//! Background population pipeline.
//!
//! One worker thread enumerates an external [`RecordSource`] exactly once,
//! appending each discovered record to a shared [`PendingBuffer`] under its
//! lock. A ticker thread raises a [`PipelineEvent::Tick`] at a fixed interval;
//! the consumer's event pump drains the buffered range into the
//! [`NodeStore`] and learns whether the projection went structurally stale.
//! When the worker finishes it raises [`PipelineEvent::Finished`]; the pump
//! performs one final unconditional drain and stops the ticker.
//!
//! # Threading
//!
//! Three actors touch this module: the worker (appends), the ticker (sends
//! ticks, never touches the buffer), and the consumer (drains). The buffer is
//! the only cross-thread state and is held under one mutex for the shortest
//! possible critical section. The consumer-owned `NodeStore` is never shared.
//!
//! # Cancellation
//!
//! Dropping the pipeline stops the ticker via an atomic flag and drops the
//! event channel; the worker is deliberately not joined. It keeps its own
//! `Arc` to the buffer, so late in-flight appends land in memory that
//! outlives the view and are discarded with the buffer.

pub mod buffer;

pub use buffer::PendingBuffer;

use crate::error::{Result, TreeListError};
use crate::store::NodeStore;
use crate::types::Record;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

/// Default period between drain ticks.
pub const DEFAULT_DRAIN_INTERVAL: Duration = Duration::from_secs(1);

/// Pipeline lifecycle state. Drains run on the consumer's own call stack
/// inside [`PopulationPipeline::pump`], so they are not a separate phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    /// No worker running, buffer empty.
    Idle,
    /// Worker enumerating the source; ticker armed.
    Running,
    /// Worker completed and the final drain has run.
    Finished,
}

/// Signals raised by the pipeline's threads, consumed by the event pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Periodic drain trigger.
    Tick,
    /// The worker finished its one-shot enumeration.
    Finished,
}

/// A producer of records for one population pass.
///
/// `enumerate` is called once on the worker thread. Implementations push each
/// complete record into the sink as it is discovered; returning (with either
/// result) is the terminal "done" signal. An error is logged by the worker
/// and otherwise treated like an empty enumeration.
pub trait RecordSource<R: Record>: Send + 'static {
    fn enumerate(&mut self, sink: &RecordSink<R>) -> Result<()>;
}

/// Write handle the worker uses to stage discovered records.
pub struct RecordSink<R> {
    buffer: Arc<Mutex<PendingBuffer<R>>>,
}

impl<R> RecordSink<R> {
    /// Stage one record. One short critical section per record, so a slow
    /// source never starves the drain side.
    pub fn push(&self, record: R) {
        lock_buffer(&self.buffer).append(record);
    }
}

// A poisoned buffer lock means a panic inside a push/drain critical section,
// which is the same defect class as index corruption: recover the guard and
// keep going rather than propagate.
fn lock_buffer<R>(buffer: &Mutex<PendingBuffer<R>>) -> MutexGuard<'_, PendingBuffer<R>> {
    buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Coordinates the worker, the ticker, and the consumer-side drain.
pub struct PopulationPipeline<R: Record> {
    buffer: Arc<Mutex<PendingBuffer<R>>>,
    event_tx: Sender<PipelineEvent>,
    events: Receiver<PipelineEvent>,
    ticker_stop: Arc<AtomicBool>,
    interval: Duration,
    phase: PipelinePhase,
}

impl<R: Record> PopulationPipeline<R> {
    pub fn new(interval: Duration) -> Self {
        let (event_tx, events) = unbounded();
        Self {
            buffer: Arc::new(Mutex::new(PendingBuffer::new())),
            event_tx,
            events,
            ticker_stop: Arc::new(AtomicBool::new(false)),
            interval,
            phase: PipelinePhase::Idle,
        }
    }

    pub fn phase(&self) -> PipelinePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == PipelinePhase::Finished
    }

    /// Start the one-shot population pass. Not re-entrant: a second call
    /// while a pass is outstanding returns [`TreeListError::PipelineActive`].
    pub fn start<S: RecordSource<R>>(&mut self, mut source: S) -> Result<()> {
        if self.phase != PipelinePhase::Idle {
            return Err(TreeListError::PipelineActive);
        }
        self.phase = PipelinePhase::Running;

        let sink = RecordSink {
            buffer: Arc::clone(&self.buffer),
        };
        let finished_tx = self.event_tx.clone();
        thread::spawn(move || {
            tracing::info!("population worker started");
            if let Err(e) = source.enumerate(&sink) {
                // One-shot scan, no retry: an unreadable source just means an
                // empty (or partial) store and a normal Finished transition.
                tracing::warn!("source enumeration failed: {e}");
            }
            let _ = finished_tx.send(PipelineEvent::Finished);
            tracing::info!("population worker finished");
        });

        let tick_tx = self.event_tx.clone();
        let stop = Arc::clone(&self.ticker_stop);
        let interval = self.interval;
        thread::spawn(move || {
            while !stop.load(Ordering::SeqCst) {
                thread::sleep(interval);
                if stop.load(Ordering::SeqCst) {
                    break;
                }
                if tick_tx.send(PipelineEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Ok(())
    }

    /// Process pending pipeline events, draining into `store` as required.
    /// Returns `true` if at least one record was migrated, i.e. the sorted/
    /// filtered projection is structurally stale.
    pub fn pump(&mut self, store: &mut NodeStore<R>) -> bool {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(PipelineEvent::Tick) => {
                    changed |= self.drain_into(store) > 0;
                }
                Ok(PipelineEvent::Finished) => {
                    // Final unconditional drain covers records appended after
                    // the last tick, then the ticker is released.
                    changed |= self.drain_into(store) > 0;
                    self.stop_ticker();
                    self.phase = PipelinePhase::Finished;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Migrate every buffered record in the watermark range into the store.
    /// Returns how many records were actually inserted (duplicate keys are
    /// rejected by the store and counted out).
    pub fn drain_into(&mut self, store: &mut NodeStore<R>) -> usize {
        let batch = lock_buffer(&self.buffer).drain_pending();
        let mut migrated = 0;
        for record in batch {
            if store.add(record) {
                migrated += 1;
            }
        }
        if migrated > 0 {
            tracing::debug!(migrated, "drained pending records into store");
        }
        migrated
    }

    fn stop_ticker(&self) {
        self.ticker_stop.store(true, Ordering::SeqCst);
    }
}

impl<R: Record> Drop for PopulationPipeline<R> {
    fn drop(&mut self) {
        // Cooperative teardown: stop rearming the ticker and walk away. Any
        // in-flight worker append targets the Arc'd buffer, which stays alive
        // until the worker's own reference drops.
        self.stop_ticker();
    }
}
