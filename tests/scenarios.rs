//! Fixed insertion sequences with known answers, run against both the compressed tree and the
//! plain trie.

use radix_set::{RadixTree, TreeStatsTrait, Trie};

fn both(keys: &[&str]) -> (RadixTree<char>, Trie<char>) {
    let tree: RadixTree<char> = keys.iter().copied().collect();
    let trie: Trie<char> = keys.iter().copied().collect();
    tree.validate().unwrap();
    (tree, trie)
}

#[test]
fn hello_world() {
    let (tree, trie) = both(&["hello", "world"]);
    for (search, prefix) in [
        (tree.search("hello"), tree.contains_prefix("hell")),
        (trie.search("hello"), trie.starts_with("hell")),
    ] {
        assert!(search);
        assert!(prefix);
    }

    assert!(tree.search("world"));
    assert!(!tree.search("hell"));
    assert!(!tree.search("hellop"));
    assert!(!tree.search("worl"));
    assert!(!tree.search("worlda"));
    assert!(tree.contains_prefix("he"));
    assert!(tree.contains_prefix("hello"));
    assert!(tree.contains_prefix("wor"));
    assert!(tree.contains_prefix("world"));
    assert!(!tree.contains_prefix("worldx"));
    assert!(!tree.contains_prefix("world!"));
    assert!(!tree.contains_prefix("hellow"));

    assert!(trie.search("world"));
    assert!(!trie.search("hell"));
    assert!(!trie.starts_with("worldx"));
}

#[test]
fn diverging_suffixes() {
    let (tree, trie) = both(&["ababba", "ababaa"]);
    assert!(tree.search("ababba"));
    assert!(tree.search("ababaa"));
    assert!(tree.contains_prefix("abab"));
    assert!(!tree.search("abab"));
    assert!(trie.search("ababaa"));
    assert!(!trie.search("abab"));
}

#[test]
fn mixed_first_symbols() {
    let (tree, trie) = both(&["ab", "ba", "aaabba"]);
    for key in ["ab", "ba", "aaabba"] {
        assert!(tree.search(key), "{key}");
        assert!(trie.search(key), "{key}");
    }
    assert!(tree.contains_prefix("a"));
    assert!(tree.contains_prefix("b"));
    assert!(!tree.search("a"));
    assert!(!tree.contains_prefix("c"));
    assert!(tree.contains_prefix("aaa"));
    assert!(!tree.contains_prefix("aab"));
}

#[test]
fn repeated_insert() {
    let mut once = RadixTree::<char>::new();
    once.insert("ab");
    let mut twice = RadixTree::<char>::new();
    assert!(twice.insert("ab"));
    assert!(!twice.insert("ab"));

    assert_eq!(once.get_tree_stats(), twice.get_tree_stats());
    assert_eq!(twice.len(), 1);
    assert!(twice.search("ab"));
    assert!(twice.contains_prefix("a"));
    twice.validate().unwrap();
}

#[test]
fn compression_saves_nodes() {
    let keys = ["interstellar", "internet", "interval", "internal", "intern"];
    let (tree, trie) = both(&keys);
    let tree_stats = tree.get_tree_stats();
    let trie_stats = trie.get_tree_stats();
    assert_eq!(tree_stats.num_terminals, trie_stats.num_terminals);
    assert!(tree_stats.num_nodes < trie_stats.num_nodes);
    assert!(tree_stats.mean_label_length() > 1.0);
    for key in keys {
        assert!(tree.search(key));
    }
    assert!(!tree.search("inter"));
    assert!(tree.contains_prefix("inter"));
}

#[test]
fn unicode_symbols() {
    let (tree, _) = both(&["日本語", "日本", "中文"]);
    assert!(tree.search("日本"));
    assert!(tree.search("日本語"));
    assert!(!tree.search("日"));
    assert!(tree.contains_prefix("日"));
    assert!(!tree.contains_prefix("本"));
}
