pub mod keyed_mapping;

/// Child storage for a node, addressed by the first symbol of each child's edge label.
pub trait NodeMapping<S, N> {
    fn add_child(&mut self, key: S, node: N);
    fn seek_child(&self, key: &S) -> Option<&N>;
    fn seek_child_mut(&mut self, key: &S) -> Option<&mut N>;
    fn num_children(&self) -> usize;
}
