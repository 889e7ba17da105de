#![no_main]

use freqcache::policy::lfu::LfuCache;
use freqcache::traits::{CoreCache, LfuCacheTrait};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on LfuCache
//
// Random interleavings of put, get, and the read-only accessors, with the
// structural invariant checker run after every step. The capacity comes
// from the input so degenerate caches (0 and 1) are explored too.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 9);
    let mut cache: LfuCache<u8, u16> = LfuCache::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let key = data[idx + 1] % 16;

        match op {
            0 => {
                cache.put(key, u16::from(data[idx]));
            }
            1 => {
                let _ = cache.get(&key);
            }
            2 => {
                let _ = cache.contains(&key);
            }
            3 => {
                if let Some(freq) = cache.frequency(&key) {
                    assert!(freq >= 1);
                }
            }
            4 => {
                let _ = cache.min_frequency();
            }
            5 => {
                let _ = cache.peek_lfu();
            }
            _ => unreachable!(),
        }

        if let Err(err) = cache.check_invariants() {
            panic!("invariant violated: {err}");
        }

        assert!(cache.len() <= capacity);
        if cache.is_empty() {
            assert_eq!(cache.min_frequency(), None);
            assert_eq!(cache.peek_lfu(), None);
        } else {
            assert!(cache.min_frequency().is_some());
            assert!(cache.peek_lfu().is_some());
        }

        idx += 2;
    }
});
