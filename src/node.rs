use crate::mapping::keyed_mapping::KeyedMapping;
use crate::mapping::NodeMapping;
use crate::partials::vector_partial::VectorPartial;
use crate::partials::Partial;
use crate::Symbol;

/// A radix tree node. `prefix` is the label of the edge leading into this node (empty only at
/// the root); children are filed under the first symbol of their own prefix.
pub(crate) struct Node<S: Symbol> {
    pub(crate) prefix: VectorPartial<S>,
    pub(crate) terminal: bool,
    children: KeyedMapping<S, Node<S>>,
}

impl<S: Symbol> Node<S> {
    #[inline]
    pub(crate) fn new_root() -> Self {
        Self {
            prefix: VectorPartial::empty(),
            terminal: false,
            children: KeyedMapping::new(),
        }
    }

    /// A childless node ending a key.
    #[inline]
    pub(crate) fn new_leaf(prefix: VectorPartial<S>) -> Self {
        debug_assert!(!prefix.is_empty());
        Self {
            prefix,
            terminal: true,
            children: KeyedMapping::new(),
        }
    }

    /// A split point. The caller attaches its children.
    #[inline]
    pub(crate) fn new_inner(prefix: VectorPartial<S>, terminal: bool) -> Self {
        debug_assert!(!prefix.is_empty());
        Self {
            prefix,
            terminal,
            children: KeyedMapping::new(),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn num_children(&self) -> usize {
        self.children.num_children()
    }

    pub(crate) fn seek_child(&self, key: &S) -> Option<&Node<S>> {
        self.children.seek_child(key)
    }

    pub(crate) fn seek_child_mut(&mut self, key: &S) -> Option<&mut Node<S>> {
        self.children.seek_child_mut(key)
    }

    pub(crate) fn add_child(&mut self, node: Node<S>) {
        let Some(key) = node.prefix.first().cloned() else {
            unreachable!("child edge labels are never empty");
        };
        self.children.add_child(key, node);
    }

    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (&S, &Node<S>)> {
        self.children.iter()
    }
}

// Paths can be as long as the longest key, so tear subtrees down with an explicit stack rather
// than letting the nested mappings drop recursively.
impl<S: Symbol> Drop for Node<S> {
    fn drop(&mut self) {
        let mut stack: Vec<Node<S>> = self.children.drain().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain());
        }
    }
}
