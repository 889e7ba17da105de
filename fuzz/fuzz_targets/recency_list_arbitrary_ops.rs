#![no_main]

use freqcache::ds::RecencyList;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on RecencyList
//
// Random pushes, removals, and pops over a small key space, with the link
// structure validated after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: RecencyList<u8> = RecencyList::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let key = data[idx + 1] % 16;

        match op {
            0 => {
                if !list.contains(&key) {
                    list.push_recent(key);
                }
            }
            1 => {
                let before = list.len();
                let removed = list.remove(&key);
                assert_eq!(list.len(), before - usize::from(removed));
            }
            2 => {
                if let Some(popped) = list.pop_least_recent() {
                    assert!(!list.contains(&popped));
                }
            }
            3 => {
                if let Some(stale) = list.peek_least_recent() {
                    assert!(list.contains(stale));
                }
            }
            4 => {
                list.clear();
                assert!(list.is_empty());
            }
            _ => unreachable!(),
        }

        if let Err(err) = list.check_invariants() {
            panic!("invariant violated: {err}");
        }

        assert_eq!(list.iter().count(), list.len());

        idx += 2;
    }
});
