//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache contract over arbitrary operation
//! sequences.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::TtlCache;

// == Test Configuration ==
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Generates valid cache keys (non-empty, namespaced like production keys)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,10}:[a-zA-Z0-9_]{1,32}".prop_map(|s| s)
}

/// Generates cache values
fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (valid_key_strategy(), valid_value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        valid_key_strategy().prop_map(|key| CacheOp::Get { key }),
        valid_key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any valid key-value pair, storing the pair and then retrieving it
    // before expiration returns the exact same value that was stored.
    #[test]
    fn prop_roundtrip_storage(key in valid_key_strategy(), value in valid_value_strategy()) {
        let mut store = TtlCache::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), value.clone(), None);

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // For any key, storing V1 and then V2 with the same key results in
    // get returning V2, and a single entry remaining.
    #[test]
    fn prop_overwrite_semantics(
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy()
    ) {
        let mut store = TtlCache::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), value1, None);
        store.set(key.clone(), value2.clone(), None);

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value2), "Overwrite should return new value");
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // For any key that exists in the cache, after a delete a subsequent get
    // returns nothing.
    #[test]
    fn prop_delete_removes_entry(key in valid_key_strategy(), value in valid_value_strategy()) {
        let mut store = TtlCache::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), value, None);
        prop_assert!(store.get(&key).is_some(), "Key should exist before delete");

        prop_assert!(store.delete(&key), "Delete should report an existing entry");
        prop_assert!(store.get(&key).is_none(), "Key should not exist after delete");
    }

    // For any sequence of operations with long TTLs, stats() reports exactly
    // the keys a reference map would hold.
    #[test]
    fn prop_stats_matches_reference(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = TtlCache::new(TEST_DEFAULT_TTL);
        let mut reference: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone(), None);
                    reference.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let expected = reference.get(&key).cloned();
                    prop_assert_eq!(store.get(&key), expected, "Get mismatch vs reference");
                }
                CacheOp::Delete { key } => {
                    let existed = reference.remove(&key).is_some();
                    prop_assert_eq!(store.delete(&key), existed, "Delete mismatch vs reference");
                }
            }
        }

        let stats = store.stats();
        let mut expected_keys: Vec<String> = reference.keys().cloned().collect();
        expected_keys.sort();

        prop_assert_eq!(stats.size, reference.len(), "Stats size mismatch");
        prop_assert_eq!(stats.keys, expected_keys, "Stats keys mismatch");
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // For any entry stored with a TTL, after the TTL has elapsed a get
    // returns nothing and stats() no longer lists the key.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in valid_key_strategy(),
        value in valid_value_strategy()
    ) {
        let mut store = TtlCache::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), value.clone(), Some(1));

        let result_before = store.get(&key);
        prop_assert_eq!(result_before, Some(value), "Entry should exist before TTL expires");

        std::thread::sleep(std::time::Duration::from_millis(1100));

        prop_assert!(store.get(&key).is_none(), "Entry should not be found after TTL expires");
        prop_assert!(store.stats().keys.is_empty(), "Stats should exclude the expired key");
    }
}
