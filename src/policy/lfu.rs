//! # LFU cache with LRU tie-breaking
//!
//! Bounded key/value cache that evicts the least frequently used key when
//! full. Keys tied at the minimum frequency are evicted in least-recently-
//! used order. `get` and `put` are O(1) amortized.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────────┐
//!   │                         LfuCache<K, V>                            │
//!   │                                                                   │
//!   │   values: FxHashMap<K, V>        key → payload                    │
//!   │   freqs:  FxHashMap<K, u64>      key → use count                  │
//!   │   buckets: FxHashMap<u64, RecencyList<K>>                         │
//!   │                                                                   │
//!   │   min_freq = 1                                                    │
//!   │       │                                                           │
//!   │       ▼                                                           │
//!   │   freq=1: head ──► [k4] ◄──► [k2] ◄── tail   (evict tail first)   │
//!   │   freq=3: head ──► [k1] ◄── tail                                  │
//!   └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every access moves the key from its current bucket to the next-higher
//! one, placing it at the recent end; `min_freq` advances only when the
//! minimum bucket empties, and snaps back to 1 whenever a brand-new key is
//! inserted. Emptied buckets linger in the map; `min_freq` simply ignores
//! them.
//!
//! ## Operations
//!
//! | Method            | Complexity | Notes                                |
//! |-------------------|------------|--------------------------------------|
//! | `new(capacity)`   | O(1)       | capacity 0 disables the cache        |
//! | `put(k, v)`       | O(1)*      | update counts as a use; may evict    |
//! | `get(&k)`         | O(1)       | hit bumps the frequency              |
//! | `contains(&k)`    | O(1)       | no frequency change                  |
//! | `peek_lfu()`      | O(1)       | next victim, read-only               |
//! | `frequency(&k)`   | O(1)       | read-only                            |
//!
//! ## Eviction flow
//!
//! ```text
//!   put(new_key, v) with len == capacity
//!     1. pop the tail of buckets[min_freq]   (LRU among the ties)
//!     2. drop the victim from values and freqs
//!     3. insert new_key with freq = 1 at the recent end of bucket 1
//!     4. min_freq = 1
//! ```
//!
//! ## Example
//!
//! ```
//! use freqcache::policy::lfu::LfuCache;
//! use freqcache::traits::{CoreCache, LfuCacheTrait};
//!
//! let mut cache: LfuCache<u32, &str> = LfuCache::new(2);
//! cache.put(1, "one");
//! cache.put(2, "two");
//! cache.get(&1);
//!
//! // 2 is the only key at the minimum frequency
//! assert_eq!(cache.peek_lfu(), Some((&2, &"two")));
//! cache.put(3, "three");
//! assert!(!cache.contains(&2));
//! ```
//!
//! ## Thread safety
//!
//! `LfuCache` carries no internal synchronization. A `touch` spans several
//! map and bucket mutations that must be observed as a unit, so concurrent
//! callers must serialize whole operations behind a single lock
//! (`Arc<Mutex<LfuCache<_, _>>>` or equivalent).

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::recency_list::RecencyList;
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::{LfuMetrics, LfuMetricsSnapshot};
use crate::traits::{CoreCache, LfuCacheTrait};

/// LFU cache with LRU tie-breaking. See the module docs for the design.
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    capacity: usize,
    values: FxHashMap<K, V>,
    freqs: FxHashMap<K, u64>,
    buckets: FxHashMap<u64, RecencyList<K>>,
    /// Smallest frequency with a non-empty bucket; 0 while the cache is empty.
    min_freq: u64,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 is honored, not coerced: every `get` misses and every
    /// `put` is inert.
    pub fn new(capacity: usize) -> Self {
        LfuCache {
            capacity,
            values: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            freqs: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            buckets: FxHashMap::default(),
            min_freq: 0,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        }
    }

    /// Moves `key` from its current bucket to the next-higher one.
    ///
    /// Shared by `get` hits and `put` updates. Advances `min_freq` iff the
    /// old bucket held the minimum and just emptied.
    fn touch(&mut self, key: &K) {
        let freq_slot = self
            .freqs
            .get_mut(key)
            .expect("touched key missing from frequency map");
        let old_freq = *freq_slot;
        let new_freq = old_freq.saturating_add(1);
        *freq_slot = new_freq;

        let bucket = self
            .buckets
            .get_mut(&old_freq)
            .expect("touched key missing its frequency bucket");
        bucket.remove(key);
        let emptied = bucket.is_empty();

        self.buckets
            .entry(new_freq)
            .or_default()
            .push_recent(key.clone());

        if emptied && self.min_freq == old_freq {
            self.min_freq = new_freq;
        }
    }

    /// Evicts the least recently used key from the minimum-frequency bucket.
    fn evict_lfu(&mut self) -> Option<(K, V)> {
        let victim = self
            .buckets
            .get_mut(&self.min_freq)
            .and_then(RecencyList::pop_least_recent)?;
        self.freqs.remove(&victim);
        let value = self
            .values
            .remove(&victim)
            .expect("evicted key missing from value map");
        #[cfg(feature = "metrics")]
        self.metrics.record_eviction();
        Some((victim, value))
    }

    /// Validates the three-map bookkeeping and the `min_freq` marker.
    ///
    /// Checks that every cached key sits in exactly the bucket its frequency
    /// names, that the value and frequency maps agree and respect capacity,
    /// and that no non-empty bucket exists below `min_freq`. Intended for
    /// tests and fuzzing; O(n).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.values.len() != self.freqs.len() {
            return Err(InvariantError::new("value and frequency maps differ in size"));
        }
        if self.capacity == 0 && !self.values.is_empty() {
            return Err(InvariantError::new("capacity-0 cache holds entries"));
        }
        if self.values.len() > self.capacity {
            return Err(InvariantError::new("entry count exceeds capacity"));
        }

        let mut bucketed = 0usize;
        for (freq, bucket) in &self.buckets {
            bucket.check_invariants()?;
            bucketed += bucket.len();
            if !bucket.is_empty() && *freq < self.min_freq {
                return Err(InvariantError::new("non-empty bucket below min_freq"));
            }
        }
        if bucketed != self.values.len() {
            return Err(InvariantError::new("bucket membership count differs from len"));
        }

        for (key, freq) in &self.freqs {
            if !self.values.contains_key(key) {
                return Err(InvariantError::new("tracked key has no value"));
            }
            let in_place = self
                .buckets
                .get(freq)
                .map(|bucket| bucket.contains(key))
                .unwrap_or(false);
            if !in_place {
                return Err(InvariantError::new("key not in its frequency bucket"));
            }
        }

        if self.values.is_empty() {
            if self.min_freq != 0 {
                return Err(InvariantError::new("empty cache with nonzero min_freq"));
            }
        } else {
            let min_populated = self
                .buckets
                .get(&self.min_freq)
                .map(|bucket| !bucket.is_empty())
                .unwrap_or(false);
            if !min_populated {
                return Err(InvariantError::new("min_freq bucket is empty or absent"));
            }
        }

        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Snapshots the operation counters together with the current size.
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            put_new: self.metrics.put_new,
            put_updates: self.metrics.put_updates,
            put_rejected: self.metrics.put_rejected,
            evictions: self.metrics.evictions,
            peek_lfu_calls: self.metrics.peek_lfu_calls.get(),
            frequency_calls: self.metrics.frequency_calls.get(),
            len: self.values.len(),
            capacity: self.capacity,
        }
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.capacity == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_put_rejected();
            return None;
        }

        if let Some(slot) = self.values.get_mut(&key) {
            let old = std::mem::replace(slot, value);
            self.touch(&key);
            #[cfg(feature = "metrics")]
            self.metrics.record_put_update();
            return Some(old);
        }

        if self.values.len() >= self.capacity {
            self.evict_lfu();
        }

        self.values.insert(key.clone(), value);
        self.freqs.insert(key.clone(), 1);
        self.buckets.entry(1).or_default().push_recent(key);
        // A fresh key is always tied for the lowest possible frequency.
        self.min_freq = 1;
        #[cfg(feature = "metrics")]
        self.metrics.record_put_new();
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        if !self.values.contains_key(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        }
        self.touch(key);
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();
        self.values.get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn frequency(&self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_frequency();
        self.freqs.get(key).copied()
    }

    fn min_frequency(&self) -> Option<u64> {
        if self.min_freq == 0 {
            None
        } else {
            Some(self.min_freq)
        }
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lfu();
        let key = self
            .buckets
            .get(&self.min_freq)?
            .peek_least_recent()?;
        let value = self.values.get(key)?;
        Some((key, value))
    }
}
