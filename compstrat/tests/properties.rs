//! Property tests for the round-trip contract

use compstrat::{registry, Algorithm};
use proptest::prelude::*;
use serde_json::Value;

fn byte_strategies() -> impl Iterator<Item = Algorithm> {
    Algorithm::ALL
        .into_iter()
        .filter(|algorithm| *algorithm != Algorithm::MessagePack)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_byte_strategies_round_trip(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        for algorithm in byte_strategies() {
            let strategy = registry().get(algorithm);
            let compressed = strategy.compress(&data).unwrap();
            prop_assert_eq!(strategy.decompress(&compressed).unwrap(), data.clone(), "{}", algorithm);
        }
    }

    #[test]
    fn prop_repetitive_input_round_trips(
        unit in proptest::collection::vec(any::<u8>(), 1..16),
        repeats in 1usize..400,
    ) {
        let data = unit.repeat(repeats);
        for algorithm in byte_strategies() {
            let strategy = registry().get(algorithm);
            let compressed = strategy.compress(&data).unwrap();
            prop_assert_eq!(strategy.decompress(&compressed).unwrap(), data.clone(), "{}", algorithm);
        }
    }

    #[test]
    fn prop_json_objects_round_trip_semantically(
        entries in proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..16),
        flag in any::<bool>(),
    ) {
        let mut document = serde_json::Map::new();
        for (key, value) in entries {
            document.insert(key, Value::from(value));
        }
        document.insert("flag".to_string(), Value::Bool(flag));
        let original = serde_json::to_vec(&document).unwrap();

        let strategy = registry().get(Algorithm::MessagePack);
        let decompressed = strategy.decompress(&strategy.compress(&original).unwrap()).unwrap();
        let actual: Value = serde_json::from_slice(&decompressed).unwrap();
        prop_assert_eq!(actual, Value::Object(document));
    }

    #[test]
    fn prop_non_utf8_bytes_round_trip_exactly(tail in proptest::collection::vec(any::<u8>(), 0..512)) {
        // 0xC0 never occurs in UTF-8
        let mut data = vec![0xC0];
        data.extend(tail);

        let strategy = registry().get(Algorithm::MessagePack);
        let decompressed = strategy.decompress(&strategy.compress(&data).unwrap()).unwrap();
        prop_assert_eq!(decompressed, data);
    }
}
