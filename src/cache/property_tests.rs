//! Property-Based Tests for Cache Module
//!
//! Uses proptest with a manual clock so expiration is exercised without sleeping.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::cache::{CacheStore, DEFAULT_TTL_MS};
use crate::clock::{Clock, ManualClock};

// == Test Configuration ==
const START_MS: u64 = 1_700_000_000_000;

// == Strategies ==
/// Generates valid cache keys (non-empty)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,16}".prop_map(|s| s)
}

/// Generates cache values
fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}".prop_map(|s| s)
}

fn ttl_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String, ttl: i64 },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
    Advance { ms: u64 },
    Cleanup,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // A small key space so operations collide
    let key = "[a-d]";
    prop_oneof![
        (key, valid_value_strategy(), ttl_strategy())
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        key.prop_map(|key| CacheOp::Get { key }),
        key.prop_map(|key| CacheOp::Has { key }),
        key.prop_map(|key| CacheOp::Delete { key }),
        (0u64..5_000).prop_map(|ms| CacheOp::Advance { ms }),
        Just(CacheOp::Cleanup),
    ]
}

fn manual_store() -> (CacheStore<String, ManualClock>, ManualClock) {
    let clock = ManualClock::new(START_MS);
    (CacheStore::with_clock(DEFAULT_TTL_MS, clock.clone()), clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A live value survives up to its TTL and is gone one millisecond later.
    #[test]
    fn prop_ttl_respected(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        ttl in ttl_strategy()
    ) {
        let (mut store, clock) = manual_store();

        store.set(key.clone(), value.clone(), Some(ttl)).unwrap();
        prop_assert_eq!(store.get(&key), Some(value.clone()));

        clock.advance(ttl as u64);
        prop_assert_eq!(store.get(&key), Some(value));

        clock.advance(1);
        prop_assert!(store.get(&key).is_none());
    }

    // Omitting the TTL behaves exactly like passing the default.
    #[test]
    fn prop_default_ttl(key in valid_key_strategy(), elapsed in 299_990u64..300_010) {
        let (mut implicit, implicit_clock) = manual_store();
        let (mut explicit, explicit_clock) = manual_store();

        implicit.set(key.clone(), "v".to_string(), None).unwrap();
        explicit.set(key.clone(), "v".to_string(), Some(DEFAULT_TTL_MS as i64)).unwrap();

        implicit_clock.advance(elapsed);
        explicit_clock.advance(elapsed);
        prop_assert_eq!(implicit.has(&key), explicit.has(&key));
    }

    // The second write's value and TTL win.
    #[test]
    fn prop_overwrite_semantics(
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy(),
        ttl1 in ttl_strategy(),
        ttl2 in ttl_strategy(),
        gap in 0u64..5_000
    ) {
        let (mut store, clock) = manual_store();

        store.set(key.clone(), value1, Some(ttl1)).unwrap();
        clock.advance(gap);
        store.set(key.clone(), value2.clone(), Some(ttl2)).unwrap();

        prop_assert_eq!(store.get(&key), Some(value2.clone()));
        prop_assert_eq!(store.len(), 1);

        clock.advance(ttl2 as u64);
        prop_assert_eq!(store.get(&key), Some(value2));
        clock.advance(1);
        prop_assert!(store.get(&key).is_none());
    }

    // Delete reports existence exactly once.
    #[test]
    fn prop_delete_existence_signal(key in valid_key_strategy(), value in valid_value_strategy()) {
        let (mut store, _) = manual_store();

        store.set(key.clone(), value, None).unwrap();
        prop_assert!(store.delete(&key));
        prop_assert!(!store.delete(&key));
        prop_assert!(store.get(&key).is_none());
    }

    // `has` and `get` agree at every step, and the store matches a model.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let (mut store, clock) = manual_store();
        // key -> (value, created_at, ttl)
        let mut model: HashMap<String, (String, u64, u64)> = HashMap::new();

        for op in ops {
            let now = clock.now_ms();
            match op {
                CacheOp::Set { key, value, ttl } => {
                    store.set(key.clone(), value.clone(), Some(ttl)).unwrap();
                    model.insert(key, (value, now, ttl as u64));
                }
                CacheOp::Get { key } | CacheOp::Has { key } => {
                    let expected = match model.get(&key) {
                        Some((value, created, ttl)) if now - created <= *ttl => Some(value.clone()),
                        Some(_) => {
                            model.remove(&key);
                            None
                        }
                        None => None,
                    };
                    prop_assert_eq!(store.has(&key), expected.is_some());
                    prop_assert_eq!(store.get(&key), expected);
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(store.delete(&key), model.remove(&key).is_some());
                }
                CacheOp::Advance { ms } => clock.advance(ms),
                CacheOp::Cleanup => {
                    let before = model.len();
                    model.retain(|_, (_, created, ttl)| now - *created <= *ttl);
                    prop_assert_eq!(store.cleanup(), before - model.len());
                }
            }

            let stats = store.stats();
            prop_assert_eq!(stats.size, model.len());
            let expected_keys: HashSet<&String> = model.keys().collect();
            let actual_keys: HashSet<&String> = stats.keys.iter().collect();
            prop_assert_eq!(actual_keys, expected_keys);
        }
    }

    // Cleanup removes exactly the stale entries and leaves live ones intact.
    #[test]
    fn prop_cleanup_never_removes_live(
        entries in prop::collection::hash_map(valid_key_strategy(), ttl_strategy(), 1..30),
        elapsed in 0u64..10_000
    ) {
        let (mut store, clock) = manual_store();
        for (key, ttl) in &entries {
            store.set(key.clone(), format!("value_{}", key), Some(*ttl)).unwrap();
        }

        clock.advance(elapsed);
        let expected_live: HashSet<&String> = entries
            .iter()
            .filter(|(_, ttl)| elapsed <= **ttl as u64)
            .map(|(key, _)| key)
            .collect();

        let removed = store.cleanup();
        prop_assert_eq!(removed, entries.len() - expected_live.len());
        prop_assert_eq!(store.stats().live_size, expected_live.len());

        for key in expected_live {
            let ttl = entries[key] as u64;
            prop_assert_eq!(store.ttl_remaining_ms(key), Some(ttl - elapsed));
            prop_assert_eq!(store.get(key), Some(format!("value_{}", key)));
        }
    }

    // Clear empties the store unconditionally.
    #[test]
    fn prop_clear_empties(keys in prop::collection::vec(valid_key_strategy(), 0..30)) {
        let (mut store, _) = manual_store();
        for key in &keys {
            store.set(key.clone(), "v".to_string(), None).unwrap();
        }

        store.clear();
        prop_assert_eq!(store.stats().size, 0);
        for key in &keys {
            prop_assert!(store.get(key).is_none());
        }
    }
}
