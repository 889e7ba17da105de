//! Cache traits: the seam between callers and the eviction policy.
//!
//! [`CoreCache`] is the operation set every bounded cache exposes: `put`,
//! `get`, and O(1) introspection. [`LfuCacheTrait`] layers frequency-aware
//! introspection on top. Callers generic over these traits stay decoupled
//! from the concrete policy type:
//!
//! ```
//! use freqcache::traits::CoreCache;
//!
//! fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
//!     for (key, value) in data {
//!         cache.put(*key, value.clone());
//!     }
//! }
//!
//! let mut cache = freqcache::policy::lfu::LfuCache::new(16);
//! warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! There is deliberately no `remove` or `clear` here: entries leave the cache
//! only through eviction.

/// Core operations of a bounded in-memory cache.
pub trait CoreCache<K, V> {
    /// Inserts or updates `key`.
    ///
    /// Returns the replaced value when `key` was already cached. Updating an
    /// existing key counts as a use (its frequency is bumped). Inserting a
    /// new key into a full cache evicts first; with capacity 0 the call is
    /// inert. Never fails.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Fetches the value for `key`, counting the access.
    ///
    /// A miss returns `None` and mutates nothing.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is currently cached. Does not count as a use.
    fn contains(&self, key: &K) -> bool;

    /// Number of cached entries.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries; fixed at construction.
    fn capacity(&self) -> usize;
}

/// Frequency introspection for LFU caches.
///
/// All operations are read-only: observing a frequency must not change it.
///
/// ```
/// use freqcache::policy::lfu::LfuCache;
/// use freqcache::traits::{CoreCache, LfuCacheTrait};
///
/// let mut cache = LfuCache::new(4);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a");
///
/// assert_eq!(cache.frequency(&"a"), Some(2));
/// assert_eq!(cache.frequency(&"b"), Some(1));
/// assert_eq!(cache.min_frequency(), Some(1));
/// assert_eq!(cache.peek_lfu(), Some((&"b", &2)));
/// ```
pub trait LfuCacheTrait<K, V>: CoreCache<K, V> {
    /// Current use count for `key`, if cached.
    fn frequency(&self, key: &K) -> Option<u64>;

    /// Smallest frequency among cached keys; `None` when empty.
    fn min_frequency(&self) -> Option<u64>;

    /// The key that would be evicted next, with its value.
    ///
    /// This is the least recently touched key in the minimum-frequency
    /// bucket. `None` when the cache is empty.
    fn peek_lfu(&self) -> Option<(&K, &V)>;
}
