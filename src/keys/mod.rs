use crate::Symbol;

pub mod vector_key;

/// A caller-facing key: a sequence of symbols the tree can walk.
pub trait KeyTrait<S: Symbol>: Clone {
    fn partial_after(&self, pos: usize) -> &[S];
    fn as_slice(&self) -> &[S] {
        self.partial_after(0)
    }
}
