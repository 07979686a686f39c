//! Compressed radix tree (and its uncompressed trie sibling) for exact membership and
//! prefix-existence queries over a dynamic set of keys.
//!
//! ```rust
//! use radix_set::RadixTree;
//!
//! let mut tree = RadixTree::<char>::new();
//! tree.insert("hello");
//! tree.insert("world");
//!
//! assert!(tree.search("hello"));
//! assert!(!tree.search("hell"));
//! assert!(tree.contains_prefix("hell"));
//! assert!(!tree.contains_prefix("worldx"));
//! ```

use std::fmt::Debug;

pub mod error;
pub mod keys;
pub mod mapping;
mod node;
pub mod partials;
pub mod stats;
pub mod tree;
pub mod trie;

pub use error::TreeError;
pub use keys::vector_key::VectorKey;
pub use stats::{TreeStats, TreeStatsTrait};
pub use tree::RadixTree;
pub use trie::Trie;

/// The atomic unit of a key. Anything totally ordered and cloneable qualifies; `char` for text,
/// `u8` for bytes and integer keys.
pub trait Symbol: Ord + Clone + Debug {}
impl<T: Ord + Clone + Debug> Symbol for T {}
