//! Operation counters for the cache (feature `metrics`).
//!
//! [`LfuMetrics`] is the recorder owned by the cache; counters on the
//! `&mut self` paths are plain `u64`, while the read-only accessors
//! (`peek_lfu`, `frequency`) record through `Cell`s. The public view is
//! [`LfuMetricsSnapshot`], obtained via
//! [`LfuCache::metrics_snapshot`](crate::policy::lfu::LfuCache::metrics_snapshot).
//!
//! These counters replace log emission in the hot path: the cache stays free
//! of global side effects and tests can assert on exact counts.

use std::cell::Cell;

/// Counter set recorded by the cache as operations execute.
#[derive(Debug, Default)]
pub(crate) struct LfuMetrics {
    pub(crate) get_hits: u64,
    pub(crate) get_misses: u64,
    pub(crate) put_new: u64,
    pub(crate) put_updates: u64,
    pub(crate) put_rejected: u64,
    pub(crate) evictions: u64,
    pub(crate) peek_lfu_calls: Cell<u64>,
    pub(crate) frequency_calls: Cell<u64>,
}

impl LfuMetrics {
    pub(crate) fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    pub(crate) fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    pub(crate) fn record_put_new(&mut self) {
        self.put_new += 1;
    }

    pub(crate) fn record_put_update(&mut self) {
        self.put_updates += 1;
    }

    /// A `put` dropped on the floor by a capacity-0 cache.
    pub(crate) fn record_put_rejected(&mut self) {
        self.put_rejected += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_peek_lfu(&self) {
        self.peek_lfu_calls.set(self.peek_lfu_calls.get() + 1);
    }

    pub(crate) fn record_frequency(&self) {
        self.frequency_calls.set(self.frequency_calls.get() + 1);
    }
}

/// Point-in-time view of the cache's operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LfuMetricsSnapshot {
    pub get_hits: u64,
    pub get_misses: u64,
    pub put_new: u64,
    pub put_updates: u64,
    pub put_rejected: u64,
    pub evictions: u64,
    pub peek_lfu_calls: u64,
    pub frequency_calls: u64,
    pub len: usize,
    pub capacity: usize,
}
