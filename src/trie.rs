//! Uncompressed trie: one edge per symbol.
//!
//! Answers the same questions as [`RadixTree`](crate::RadixTree) with a simpler structure and
//! more nodes. Useful as a baseline and as a reference model for the compressed tree.

use std::fmt;

use tracing::trace;

use crate::keys::vector_key::VectorKey;
use crate::keys::KeyTrait;
use crate::mapping::keyed_mapping::KeyedMapping;
use crate::mapping::NodeMapping;
use crate::stats::{update_tree_stats, TreeStats, TreeStatsTrait};
use crate::tree::path_str_rep;
use crate::Symbol;

struct TrieNode<S: Symbol> {
    terminal: bool,
    children: KeyedMapping<S, TrieNode<S>>,
}

impl<S: Symbol> TrieNode<S> {
    fn new() -> Self {
        Self {
            terminal: false,
            children: KeyedMapping::new(),
        }
    }
}

// One level per key symbol, so nested drops would recurse as deep as the longest key.
impl<S: Symbol> Drop for TrieNode<S> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<S>> = self.children.drain().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain());
        }
    }
}

/// A trie over symbols of type `S`.
///
/// Empty keys follow the same convention as [`RadixTree`](crate::RadixTree): inserting one
/// marks the root terminal and `starts_with` of the empty sequence is always `true`.
///
/// ```rust
/// use radix_set::Trie;
///
/// let mut trie = Trie::<char>::new();
/// trie.insert("hello");
/// assert!(trie.search("hello"));
/// assert!(trie.starts_with("he"));
/// assert!(!trie.starts_with("hellow"));
/// ```
pub struct Trie<S: Symbol> {
    root: TrieNode<S>,
    num_keys: usize,
}

impl<S: Symbol> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Trie<S> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            num_keys: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Adds `key`, returning `false` if it was already present.
    pub fn insert<K: Into<VectorKey<S>>>(&mut self, key: K) -> bool {
        let key: VectorKey<S> = key.into();
        self.insert_k(key.as_slice())
    }

    pub fn insert_k(&mut self, key: &[S]) -> bool {
        let mut cur_node = &mut self.root;
        for symbol in key {
            cur_node = cur_node.children.seek_or_add_child(symbol, TrieNode::new);
        }
        if cur_node.terminal {
            return false;
        }
        trace!(len = key.len(), "trie key added");
        cur_node.terminal = true;
        self.num_keys += 1;
        true
    }

    pub fn search<K: Into<VectorKey<S>>>(&self, key: K) -> bool {
        let key: VectorKey<S> = key.into();
        self.search_k(key.as_slice())
    }

    pub fn search_k(&self, key: &[S]) -> bool {
        self.seek(key).is_some_and(|node| node.terminal)
    }

    /// True iff some stored key starts with `prefix`.
    pub fn starts_with<K: Into<VectorKey<S>>>(&self, prefix: K) -> bool {
        let prefix: VectorKey<S> = prefix.into();
        self.starts_with_k(prefix.as_slice())
    }

    pub fn starts_with_k(&self, prefix: &[S]) -> bool {
        self.seek(prefix).is_some()
    }

    fn seek(&self, key: &[S]) -> Option<&TrieNode<S>> {
        let mut cur_node = &self.root;
        for symbol in key {
            cur_node = cur_node.children.seek_child(symbol)?;
        }
        Some(cur_node)
    }
}

impl<S: Symbol> TreeStatsTrait for Trie<S> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, height)) = stack.pop() {
            let label_len = if height == 0 { 0 } else { 1 };
            update_tree_stats(
                &mut stats,
                node.children.num_children(),
                node.terminal,
                label_len,
                height,
            );
            stack.extend(node.children.iter().map(|(_k, child)| (child, height + 1)));
        }
        stats
    }
}

/// Same layout as the radix tree's rendering, with every edge one symbol long.
impl<S: Symbol> fmt::Debug for Trie<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trie ({} keys){}",
            self.num_keys,
            if self.root.terminal { " *" } else { "" }
        )?;
        let mut stack: Vec<_> = self
            .root
            .children
            .iter()
            .rev()
            .map(|(k, c)| (k, c, 1))
            .collect();
        while let Some((symbol, node, depth)) = stack.pop() {
            writeln!(
                f,
                "{}{}{}",
                "  ".repeat(depth),
                path_str_rep(std::slice::from_ref(symbol)),
                if node.terminal { " *" } else { "" }
            )?;
            stack.extend(node.children.iter().rev().map(|(k, c)| (k, c, depth + 1)));
        }
        Ok(())
    }
}

impl<S: Symbol, K: Into<VectorKey<S>>> Extend<K> for Trie<S> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<S: Symbol, K: Into<VectorKey<S>>> FromIterator<K> for Trie<S> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
