use crate::avl_tree::AvlTree;
use crate::bit_trie::BitTrie;

use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

proptest! {
    #[test]
    fn avl_in_order_matches_sorted_input(keys in prop::collection::vec(any::<u64>(), 0..200)) {
        let mut tree = AvlTree::new();
        tree.insert_range(keys.iter().copied());

        let mut expected = keys.clone();
        expected.sort();
        let actual: Vec<u64> = tree.in_order().into_iter().copied().collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(tree.len(), keys.len());
    }

    #[test]
    fn avl_height_stays_logarithmic(keys in prop::collection::hash_set(any::<u64>(), 1..300)) {
        let mut tree = AvlTree::new();
        tree.insert_range(keys.iter().copied());

        // 1.44 * log2(n + 2) bounds the height of any AVL tree on n nodes
        let bound = (1.45 * ((keys.len() + 2) as f64).log2()).ceil() as u32;
        prop_assert!(tree.height() <= bound, "height {} over bound {}", tree.height(), bound);
    }

    #[test]
    fn avl_membership_matches_hash_set(
        keys in prop::collection::vec(0u64..500, 0..100),
        probes in prop::collection::vec(0u64..600, 0..100),
    ) {
        let mut tree = AvlTree::new();
        tree.insert_range(keys.iter().copied());
        let reference: HashSet<u64> = keys.iter().copied().collect();

        for probe in probes {
            prop_assert_eq!(tree.contains(&probe), reference.contains(&probe));
        }
    }

    #[test]
    fn avl_range_comparator_matches_interval_scan(
        keys in prop::collection::vec(0u64..200, 0..60),
        lo in 0u64..200,
        width in 0u64..50,
    ) {
        let hi = lo + width;
        let mut tree = AvlTree::new();
        tree.insert_range(keys.iter().copied());

        let found = tree.contains_by(|&v| {
            if v < lo {
                Ordering::Greater
            } else if v > hi {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        });
        prop_assert_eq!(found, keys.iter().any(|&k| (lo..=hi).contains(&k)));
    }

    #[test]
    fn trie_membership_matches_hash_set(
        keys in prop::collection::vec(0u64..(1 << 16), 1..80),
        probes in prop::collection::vec(0u64..(1 << 16), 0..80),
    ) {
        let mut trie = BitTrie::with_default_depth();
        let reference: HashSet<u64> = keys.iter().copied().collect();
        for &key in &keys {
            trie.insert(key);
        }

        for &key in &keys {
            prop_assert!(trie.contains(key));
        }
        for probe in probes {
            prop_assert_eq!(trie.contains(probe), reference.contains(&probe));
        }
    }

    #[test]
    fn trie_max_xor_matches_brute_force(
        keys in prop::collection::vec(0u64..(1 << 16), 1..80),
        queries in prop::collection::vec(0u64..(1 << 16), 1..40),
    ) {
        let mut trie = BitTrie::with_default_depth();
        for &key in &keys {
            trie.insert(key);
        }

        for query in queries {
            let expected = keys.iter().map(|&v| query ^ v).max();
            prop_assert_eq!(trie.max_xor(query), expected);
        }
    }

    #[test]
    fn trie_double_insert_changes_nothing(
        keys in prop::collection::vec(0u64..256, 1..40),
    ) {
        let mut once = BitTrie::new(8).unwrap();
        let mut twice = BitTrie::new(8).unwrap();
        for &key in &keys {
            once.insert(key);
            twice.insert(key);
            twice.insert(key);
        }
        for probe in 0..256u64 {
            prop_assert_eq!(once.contains(probe), twice.contains(probe));
        }
    }
}
