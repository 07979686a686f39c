#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use radix_set::{RadixTree, Trie};

#[derive(Arbitrary, Debug)]
enum SetMethod {
    Insert { key: Vec<u8> },
    Search { key: Vec<u8> },
    ContainsPrefix { prefix: Vec<u8> },
}

fuzz_target!(|methods: Vec<SetMethod>| {
    let mut tree = RadixTree::<u8>::new();
    let mut trie = Trie::<u8>::new();
    let mut bt_set = BTreeSet::<Vec<u8>>::new();

    for m in &methods {
        match m {
            SetMethod::Insert { key } => {
                let expected = bt_set.insert(key.clone());
                assert_eq!(tree.insert_k(key), expected, "Insert: {:?}", key);
                assert_eq!(trie.insert_k(key), expected, "Insert: {:?}", key);
            }
            SetMethod::Search { key } => {
                let expected = bt_set.contains(key);
                assert_eq!(tree.search_k(key), expected, "Search: {:?}", key);
                assert_eq!(trie.search_k(key), expected, "Search: {:?}", key);
            }
            SetMethod::ContainsPrefix { prefix } => {
                // The empty prefix is a prefix of everything, even of nothing.
                let expected = prefix.is_empty() || bt_set.iter().any(|k| k.starts_with(prefix));
                assert_eq!(tree.contains_prefix_k(prefix), expected, "Prefix: {:?}", prefix);
                assert_eq!(trie.starts_with_k(prefix), expected, "Prefix: {:?}", prefix);
            }
        }
    }

    assert_eq!(tree.len(), bt_set.len());
    if let Err(e) = tree.validate() {
        panic!("invalid tree after {} operations: {}\n{:?}", methods.len(), e, tree);
    }
    for k in bt_set.iter() {
        assert!(tree.search_k(k), "Expected key {:?}", k);
    }
});
