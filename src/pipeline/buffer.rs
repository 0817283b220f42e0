//! Staging buffer between the discovery worker and the node store.
//!
//! The worker appends newly discovered records here under the shared lock;
//! the drain step moves everything past the watermark into the store and
//! advances the watermark in the same critical section. `drained` only moves
//! under the lock appends take, so a record can never be migrated twice.

/// Append-only staging buffer with a drain watermark.
///
/// `appended` and `drained` are monotonic counters over the lifetime of the
/// buffer; `pending` holds only the records in `[drained, appended)`.
/// Invariant: `drained <= appended`.
#[derive(Debug)]
pub struct PendingBuffer<R> {
    pending: Vec<R>,
    appended: usize,
    drained: usize,
}

impl<R> Default for PendingBuffer<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PendingBuffer<R> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            appended: 0,
            drained: 0,
        }
    }

    pub fn append(&mut self, record: R) {
        self.pending.push(record);
        self.appended += 1;
    }

    /// Records appended but not yet drained.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Total records ever appended.
    pub fn appended(&self) -> usize {
        self.appended
    }

    /// Watermark: total records already migrated out.
    pub fn drained(&self) -> usize {
        self.drained
    }

    /// Take every pending record and advance the watermark. Draining twice
    /// without intervening appends yields an empty batch the second time.
    pub fn drain_pending(&mut self) -> Vec<R> {
        let batch = std::mem::take(&mut self.pending);
        self.drained += batch.len();
        debug_assert!(self.drained <= self.appended);
        batch
    }
}
