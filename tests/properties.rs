//! Property-based tests for the huffman pipeline
//!
//! Uses proptest to check the invariants of the tree, the code table and the round trip
//! over arbitrary byte inputs.

use proptest::prelude::*;

use huffmania::{Codec, CodeTable, FrequencyTable, HuffOpts, HuffmanTree};

/// Non-empty inputs drawn from a small alphabet so codes get deep and ties are common.
fn skewed_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"aaaaabbbccd\0xyz".to_vec()), 1..400)
}

fn any_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..2000)
}

proptest! {
    #[test]
    fn prop_round_trip(data in any_bytes()) {
        let codec = Codec::new(&data, &HuffOpts::default()).unwrap();
        let mut encoded = codec.encode(&data).unwrap();
        prop_assert_eq!(codec.decode(&mut encoded).unwrap(), data);
    }

    #[test]
    fn prop_round_trip_skewed(data in skewed_bytes()) {
        let codec = Codec::new(&data, &HuffOpts::default()).unwrap();
        let mut encoded = codec.encode(&data).unwrap();
        prop_assert_eq!(codec.decode(&mut encoded).unwrap(), data);
    }

    #[test]
    fn prop_sentinel_round_trip(mut data in prop::collection::vec(1..=255_u8, 0..500)) {
        data.push(0);
        let opts = HuffOpts { sentinel: Some(0), ..HuffOpts::default() };
        let codec = Codec::new(&data, &opts).unwrap();
        let mut encoded = codec.encode(&data).unwrap();
        prop_assert_eq!(codec.decode(&mut encoded).unwrap(), data);
    }

    #[test]
    fn prop_prefix_free(data in any_bytes()) {
        let table = CodeTable::generate(&HuffmanTree::from_data(&data).unwrap()).unwrap();
        let codes: Vec<String> = (0..=255_u8).filter_map(|s| table.code(s)).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a.as_str()), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn prop_weight_conservation(data in any_bytes()) {
        let tree = HuffmanTree::from_data(&data).unwrap();
        for idx in tree.internal_nodes() {
            let (left, right) = tree.children(idx).unwrap();
            prop_assert_eq!(tree.weight(idx), tree.weight(left) + tree.weight(right));
        }
        prop_assert_eq!(tree.weight(tree.root()), data.len() as u64);
    }

    #[test]
    fn prop_deterministic(data in skewed_bytes()) {
        let first = Codec::new(&data, &HuffOpts::default()).unwrap();
        let second = Codec::new(&data, &HuffOpts::default()).unwrap();
        prop_assert_eq!(first.tree(), second.tree());
        prop_assert_eq!(first.encode(&data).unwrap(), second.encode(&data).unwrap());
    }

    #[test]
    fn prop_length_monotone_in_frequency(data in any_bytes()) {
        let freqs = FrequencyTable::from_data(&data);
        let table = CodeTable::generate(&HuffmanTree::build(&freqs).unwrap()).unwrap();
        let used: Vec<u8> = (0..=255_u8).filter(|&s| freqs.count(s) > 0).collect();
        for &a in &used {
            for &b in &used {
                if freqs.count(a) > freqs.count(b) {
                    prop_assert!(table.len(a) <= table.len(b));
                }
            }
        }
    }

    #[test]
    fn prop_only_seen_symbols_have_codes(data in skewed_bytes()) {
        let freqs = FrequencyTable::from_data(&data);
        let table = CodeTable::generate(&HuffmanTree::build(&freqs).unwrap()).unwrap();
        for symbol in 0..=255_u8 {
            prop_assert_eq!(table.has_code(symbol), freqs.count(symbol) > 0);
        }
    }
}
