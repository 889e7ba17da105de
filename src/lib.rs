//! freqcache: a bounded in-memory cache with LFU eviction and LRU tie-breaking.
//!
//! The cache evicts the least frequently used key when full; keys tied at the
//! minimum frequency are evicted in least-recently-used order. `get` and `put`
//! are O(1) amortized.
//!
//! ```
//! use freqcache::policy::lfu::LfuCache;
//! use freqcache::traits::CoreCache;
//!
//! let mut cache: LfuCache<&str, u32> = LfuCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3); // "b" has the lowest frequency and is evicted
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! ```

pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod traits;
