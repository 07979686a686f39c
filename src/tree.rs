//! Compressed radix tree.
//!
//! This module contains [`RadixTree`], a PATRICIA-style set of symbol sequences in which every
//! edge carries a run of symbols. Edges are split at the longest common prefix as keys arrive,
//! so no two siblings ever share a leading symbol and every non-terminal inner node branches.

use std::fmt;

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::keys::vector_key::VectorKey;
use crate::keys::KeyTrait;
use crate::node::Node;
use crate::partials::vector_partial::VectorPartial;
use crate::partials::Partial;
use crate::stats::{update_tree_stats, TreeStats, TreeStatsTrait};
use crate::Symbol;

/// A compressed radix tree answering exact membership and prefix-existence queries.
///
/// ## Empty keys
///
/// The empty sequence is a legal key: inserting it marks the root terminal, `search` of the
/// empty sequence reports whether that happened, and `contains_prefix` of the empty sequence is
/// always `true`, even on an empty tree.
///
/// ## Examples
///
/// ```rust
/// use radix_set::RadixTree;
///
/// let mut tree = RadixTree::<char>::new();
/// tree.insert("ababba");
/// tree.insert("ababaa");
///
/// assert!(tree.search("ababaa"));
/// assert!(!tree.search("abab"));
/// assert!(tree.contains_prefix("abab"));
/// ```
///
/// Integer keys are stored as big-endian bytes:
///
/// ```rust
/// use radix_set::RadixTree;
///
/// let mut tree = RadixTree::<u8>::new();
/// tree.insert(500u32);
/// assert!(tree.search(500u32));
/// assert!(tree.contains_prefix(&[0u8, 0]));
/// ```
pub struct RadixTree<S: Symbol> {
    root: Node<S>,
    num_keys: usize,
}

/// Where a walk from the root stopped.
enum Walk<'a, S: Symbol> {
    /// The whole query was consumed exactly at this node.
    AtNode(&'a Node<S>),
    /// The query ran out part way along an edge label.
    InsideEdge,
    /// Some symbol of the query has no matching edge.
    Miss,
}

impl<S: Symbol> Default for RadixTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> RadixTree<S> {
    pub fn new() -> Self {
        Self {
            root: Node::new_root(),
            num_keys: 0,
        }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Adds `key` to the set. Returns `false` if it was already present, in which case the tree
    /// is left untouched.
    pub fn insert<K: Into<VectorKey<S>>>(&mut self, key: K) -> bool {
        let key: VectorKey<S> = key.into();
        self.insert_k(key.as_slice())
    }

    pub fn insert_k(&mut self, key: &[S]) -> bool {
        let added = Self::insert_iterate(&mut self.root, key);
        if added {
            self.num_keys += 1;
        }
        added
    }

    fn insert_iterate(cur_node: &mut Node<S>, key: &[S]) -> bool {
        let mut cur_node = cur_node;
        let mut depth = 0;
        loop {
            let key_suffix = &key[depth..];

            // Key ends exactly on this node.
            let Some(first) = key_suffix.first() else {
                if cur_node.terminal {
                    return false;
                }
                trace!(depth, "promoting node to terminal");
                cur_node.terminal = true;
                return true;
            };

            let matched = cur_node.seek_child(first).map(|child| {
                (
                    child.prefix.len(),
                    child.prefix.prefix_length_slice(key_suffix),
                )
            });

            // Nothing shares our leading symbol: hang the whole remaining suffix off a new edge.
            let Some((child_prefix_len, longest_common_prefix)) = matched else {
                trace!(depth, len = key_suffix.len(), "adding edge");
                cur_node.add_child(Node::new_leaf(VectorPartial::from_slice(key_suffix)));
                return true;
            };
            debug_assert!(longest_common_prefix > 0);

            let Some(child) = cur_node.seek_child_mut(first) else {
                unreachable!("child was just found");
            };

            // The edge is fully covered; carry on below it.
            if longest_common_prefix == child_prefix_len {
                trace!(depth, consumed = child_prefix_len, "descending");
                depth += longest_common_prefix;
                cur_node = child;
                continue;
            }

            // The key diverges from, or ends inside, the edge. Break the edge at the common
            // prefix: a new intermediate node takes its place and the old child moves beneath it
            // with the remainder of its label.
            let ends_here = longest_common_prefix == key_suffix.len();
            trace!(
                depth,
                at = longest_common_prefix,
                label_len = child_prefix_len,
                ends_here,
                "splitting edge"
            );
            let split =
                Node::new_inner(child.prefix.partial_before(longest_common_prefix), ends_here);
            let mut replaced = std::mem::replace(child, split);
            replaced.prefix = replaced.prefix.partial_after(longest_common_prefix);
            child.add_child(replaced);
            if !ends_here {
                child.add_child(Node::new_leaf(VectorPartial::from_slice(
                    &key_suffix[longest_common_prefix..],
                )));
            }
            return true;
        }
    }

    /// Exact membership.
    pub fn search<K: Into<VectorKey<S>>>(&self, key: K) -> bool {
        let key: VectorKey<S> = key.into();
        self.search_k(key.as_slice())
    }

    pub fn search_k(&self, key: &[S]) -> bool {
        matches!(self.walk(key), Walk::AtNode(node) if node.terminal)
    }

    /// True iff some stored key starts with `prefix`.
    pub fn contains_prefix<K: Into<VectorKey<S>>>(&self, prefix: K) -> bool {
        let prefix: VectorKey<S> = prefix.into();
        self.contains_prefix_k(prefix.as_slice())
    }

    pub fn contains_prefix_k(&self, prefix: &[S]) -> bool {
        // Every node below the root leads to at least one terminal, so landing anywhere
        // (including mid-edge) means some key continues from here.
        matches!(self.walk(prefix), Walk::AtNode(_) | Walk::InsideEdge)
    }

    fn walk(&self, key: &[S]) -> Walk<'_, S> {
        let mut cur_node = &self.root;
        let mut depth = 0;
        loop {
            let key_suffix = &key[depth..];
            let Some(first) = key_suffix.first() else {
                return Walk::AtNode(cur_node);
            };
            let Some(child) = cur_node.seek_child(first) else {
                return Walk::Miss;
            };

            let longest_common_prefix = child.prefix.prefix_length_slice(key_suffix);
            if longest_common_prefix == child.prefix.len() {
                depth += longest_common_prefix;
                cur_node = child;
                continue;
            }
            if longest_common_prefix == key_suffix.len() {
                return Walk::InsideEdge;
            }
            return Walk::Miss;
        }
    }

    /// Checks every structural invariant of the tree, returning the first violation found.
    pub fn validate(&self) -> Result<(), TreeError> {
        let result = self.validate_iterate();
        if let Err(e) = &result {
            debug!(error = %e, "radix tree failed validation");
        }
        result
    }

    fn validate_iterate(&self) -> Result<(), TreeError> {
        let mut path: Vec<S> = Vec::new();
        let mut counted = 0;
        // (node, is_root, path length above the node)
        let mut stack = vec![(&self.root, true, 0)];
        while let Some((node, is_root, above)) = stack.pop() {
            path.truncate(above);
            if !is_root && node.prefix.is_empty() {
                return Err(TreeError::EmptyLabel {
                    path: path_str_rep(&path),
                });
            }
            path.extend_from_slice(node.prefix.to_slice());

            if node.terminal {
                counted += 1;
            }
            if !is_root && !node.terminal {
                if node.is_leaf() {
                    return Err(TreeError::DeadEnd {
                        path: path_str_rep(&path),
                    });
                }
                if node.num_children() == 1 {
                    return Err(TreeError::PassThrough {
                        path: path_str_rep(&path),
                    });
                }
            }

            let mut previous: Option<&S> = None;
            for (filed, child) in node.iter() {
                let Some(actual) = child.prefix.first() else {
                    return Err(TreeError::EmptyLabel {
                        path: path_str_rep(&path),
                    });
                };
                if actual != filed {
                    return Err(TreeError::MisfiledChild {
                        path: path_str_rep(&path),
                        filed: format!("{:?}", filed),
                        actual: format!("{:?}", actual),
                    });
                }
                if previous == Some(actual) {
                    return Err(TreeError::SharedLeadingSymbol {
                        path: path_str_rep(&path),
                        symbol: format!("{:?}", actual),
                    });
                }
                previous = Some(actual);
                stack.push((child, false, path.len()));
            }
        }

        if counted != self.num_keys {
            return Err(TreeError::CountMismatch {
                counted,
                recorded: self.num_keys,
            });
        }
        Ok(())
    }
}

pub(crate) fn path_str_rep<S: Symbol>(symbols: &[S]) -> String {
    let s = symbols
        .iter()
        .map(|s| format!("{:?}", s))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", s)
}

impl<S: Symbol> TreeStatsTrait for RadixTree<S> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, height)) = stack.pop() {
            update_tree_stats(
                &mut stats,
                node.num_children(),
                node.terminal,
                node.prefix.len(),
                height,
            );
            stack.extend(node.iter().map(|(_k, child)| (child, height + 1)));
        }
        stats
    }
}

/// One line per node, indented by depth, terminal nodes marked with `*`.
impl<S: Symbol> fmt::Debug for RadixTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "RadixTree ({} keys){}",
            self.num_keys,
            if self.root.terminal { " *" } else { "" }
        )?;
        // Children are pushed in reverse so they print in symbol order.
        let mut stack: Vec<_> = self.root.iter().rev().map(|(_k, c)| (c, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            writeln!(
                f,
                "{}{}{}",
                "  ".repeat(depth),
                path_str_rep(node.prefix.to_slice()),
                if node.terminal { " *" } else { "" }
            )?;
            stack.extend(node.iter().rev().map(|(_k, c)| (c, depth + 1)));
        }
        Ok(())
    }
}

impl<S: Symbol, K: Into<VectorKey<S>>> Extend<K> for RadixTree<S> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<S: Symbol, K: Into<VectorKey<S>>> FromIterator<K> for RadixTree<S> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
