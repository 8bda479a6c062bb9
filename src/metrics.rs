//! Shared request and traffic counters.
//!
//! One `Metrics` instance lives for the lifetime of the server and is shared
//! by reference (`Arc`) with every connection. All updates and snapshots go
//! through a single mutex that is only held for the arithmetic, never across
//! I/O.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Point-in-time copy of the counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub requests: u64,
    pub bytes_received: u64,
    pub bytes_sent: u64,
}

#[derive(Debug, Default)]
pub struct Metrics {
    counters: Mutex<Snapshot>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.lock().requests += 1;
    }

    pub fn add_bytes_received(&self, n: usize) {
        self.lock().bytes_received += n as u64;
    }

    /// Counts one request and its `n` received bytes in a single update, so
    /// a snapshot never sees one without the other.
    pub fn record_received(&self, n: usize) {
        let mut counters = self.lock();
        counters.requests += 1;
        counters.bytes_received += n as u64;
    }

    pub fn add_bytes_sent(&self, n: usize) {
        self.lock().bytes_sent += n as u64;
    }

    pub fn snapshot(&self) -> Snapshot {
        *self.lock()
    }

    // Counters are plain integers, a panicking holder cannot leave them torn.
    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
