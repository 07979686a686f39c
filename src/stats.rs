//! Structural statistics for the radix tree and the trie.
//!
//! Handy for comparing how much the compressed tree saves over the plain trie on a given key
//! set, and for asserting structure in tests.

use std::collections::HashMap;

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

/// Totals for all nodes sharing one fanout.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NodeStats {
    pub fanout: usize,
    pub total_nodes: usize,
    pub total_children: usize,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TreeStats {
    /// Keyed by number of children. The root is included.
    pub node_stats: HashMap<usize, NodeStats>,
    pub num_nodes: usize,
    pub num_leaves: usize,
    pub num_inner_nodes: usize,
    /// Nodes at which a key ends; equals the number of stored keys.
    pub num_terminals: usize,
    /// Sum of edge label lengths, i.e. symbols actually stored.
    pub total_label_symbols: usize,
    /// Edges on the longest root-to-leaf path.
    pub max_height: usize,
}

impl TreeStats {
    pub fn mean_label_length(&self) -> f64 {
        let edges = self.num_nodes.saturating_sub(1);
        if edges == 0 {
            return 0.0;
        }
        self.total_label_symbols as f64 / edges as f64
    }
}

pub(crate) fn update_tree_stats(
    tree_stats: &mut TreeStats,
    num_children: usize,
    terminal: bool,
    label_len: usize,
    height: usize,
) {
    tree_stats.num_nodes += 1;
    tree_stats.total_label_symbols += label_len;
    if height > tree_stats.max_height {
        tree_stats.max_height = height;
    }
    if terminal {
        tree_stats.num_terminals += 1;
    }
    if num_children == 0 {
        tree_stats.num_leaves += 1;
    } else {
        tree_stats.num_inner_nodes += 1;
    }
    tree_stats
        .node_stats
        .entry(num_children)
        .and_modify(|e| {
            e.total_nodes += 1;
            e.total_children += num_children;
        })
        .or_insert(NodeStats {
            fanout: num_children,
            total_nodes: 1,
            total_children: num_children,
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_and_mean() {
        let mut stats = TreeStats::default();
        assert_eq!(stats.mean_label_length(), 0.0);
        update_tree_stats(&mut stats, 2, false, 0, 0);
        update_tree_stats(&mut stats, 0, true, 5, 1);
        update_tree_stats(&mut stats, 0, true, 3, 1);
        assert_eq!(stats.num_nodes, 3);
        assert_eq!(stats.num_leaves, 2);
        assert_eq!(stats.num_inner_nodes, 1);
        assert_eq!(stats.num_terminals, 2);
        assert_eq!(stats.max_height, 1);
        assert_eq!(stats.node_stats[&0].total_nodes, 2);
        assert_eq!(stats.node_stats[&2].total_children, 2);
        assert_eq!(stats.mean_label_length(), 4.0);
    }
}
