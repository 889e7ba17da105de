// ==============================================
// WORKLOAD TESTS (integration)
// ==============================================
//
// Seeded random operation streams checked two ways: against a naive O(n)
// reference model of the eviction policy, and against the structural
// invariant checker. Also exercises the documented external-lock sharing
// pattern.

use std::sync::Arc;

use freqcache::policy::lfu::LfuCache;
use freqcache::traits::{CoreCache, LfuCacheTrait};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==============================================
// Reference model
// ==============================================
//
// Linear-scan LFU with an explicit touch clock: evict the entry with the
// smallest (frequency, last_touch) pair. Slow but obviously correct.

struct ModelEntry {
    key: u32,
    value: u64,
    freq: u64,
    last_touch: u64,
}

struct ModelLfu {
    capacity: usize,
    clock: u64,
    entries: Vec<ModelEntry>,
}

impl ModelLfu {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            clock: 0,
            entries: Vec::new(),
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn get(&mut self, key: u32) -> Option<u64> {
        let clock = self.tick();
        let entry = self.entries.iter_mut().find(|entry| entry.key == key)?;
        entry.freq += 1;
        entry.last_touch = clock;
        Some(entry.value)
    }

    fn put(&mut self, key: u32, value: u64) {
        if self.capacity == 0 {
            return;
        }
        let clock = self.tick();
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
            entry.freq += 1;
            entry.last_touch = clock;
            return;
        }
        if self.entries.len() == self.capacity {
            let victim = self
                .entries
                .iter()
                .enumerate()
                .min_by_key(|(_, entry)| (entry.freq, entry.last_touch))
                .map(|(idx, _)| idx)
                .expect("full model has a victim");
            self.entries.remove(victim);
        }
        self.entries.push(ModelEntry {
            key,
            value,
            freq: 1,
            last_touch: clock,
        });
    }

    fn contains(&self, key: u32) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    fn frequency(&self, key: u32) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.freq)
    }
}

fn run_against_model(seed: u64, capacity: usize, universe: u32, operations: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cache: LfuCache<u32, u64> = LfuCache::new(capacity);
    let mut model = ModelLfu::new(capacity);

    for step in 0..operations {
        let key = rng.gen_range(0..universe);
        if rng.gen_bool(0.6) {
            let expected = model.get(key);
            assert_eq!(
                cache.get(&key).copied(),
                expected,
                "get({key}) diverged at step {step} (seed {seed})"
            );
        } else {
            let value = rng.gen::<u64>();
            model.put(key, value);
            cache.put(key, value);
        }

        assert_eq!(cache.len(), model.entries.len());
        cache
            .check_invariants()
            .unwrap_or_else(|err| panic!("step {step} (seed {seed}): {err}"));
    }

    for key in 0..universe {
        assert_eq!(cache.contains(&key), model.contains(key));
        assert_eq!(cache.frequency(&key), model.frequency(key));
    }
}

#[test]
fn matches_reference_model_small_universe() {
    // Small universe keeps the cache churning with frequent ties.
    run_against_model(42, 8, 16, 5_000);
}

#[test]
fn matches_reference_model_tight_capacity() {
    run_against_model(7, 2, 12, 5_000);
}

#[test]
fn matches_reference_model_roomy_cache() {
    // Universe fits entirely; no eviction should ever occur.
    run_against_model(1234, 32, 24, 3_000);
}

#[test]
fn matches_reference_model_across_seeds() {
    for seed in 0..10 {
        run_against_model(seed, 4, 10, 1_000);
    }
}

// ==============================================
// External serialization
// ==============================================
//
// The cache has no internal locks; shared use means one lock around whole
// operations. This is the supported pattern, exercised across threads.

#[test]
fn shared_behind_a_single_lock() {
    let cache = Arc::new(parking_lot::Mutex::new(LfuCache::<u64, u64>::new(64)));

    let handles: Vec<_> = (0..4u64)
        .map(|thread_id| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(thread_id);
                for i in 0..2_000u64 {
                    let key = rng.gen_range(0..256);
                    let mut guard = cache.lock();
                    if i % 3 == 0 {
                        guard.put(key, thread_id * 1_000_000 + i);
                    } else {
                        let _ = guard.get(&key);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    let guard = cache.lock();
    assert!(guard.len() <= guard.capacity());
    guard.check_invariants().expect("invariants after shared use");
}
