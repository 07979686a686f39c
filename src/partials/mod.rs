use crate::Symbol;

pub mod vector_partial;

/// An edge label: the run of symbols consumed when moving from a parent node to a child.
pub trait Partial<S: Symbol>: AsRef<[S]> {
    /// Returns a partial up to `length` symbols.
    fn partial_before(&self, length: usize) -> Self;
    /// Returns a partial from `start` onwards.
    fn partial_after(&self, start: usize) -> Self;
    /// Returns the length of the partial.
    fn len(&self) -> usize;
    /// Returns true if the partial is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the length of the common prefix between `self` and `slice`.
    fn prefix_length_slice(&self, slice: &[S]) -> usize {
        self.as_ref()
            .iter()
            .zip(slice)
            .take_while(|(a, b)| a == b)
            .count()
    }
    /// Returns the first symbol, if any. Children are dispatched on this.
    fn first(&self) -> Option<&S> {
        self.as_ref().first()
    }
}
