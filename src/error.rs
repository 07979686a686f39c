use thiserror::Error;

/// Structural problems reported by [`RadixTree::validate`](crate::RadixTree::validate).
///
/// Insertion maintains every one of these by construction, so seeing one means a bug in the
/// tree, not in the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("empty edge label below `{path}`")]
    EmptyLabel { path: String },
    #[error("children of `{path}` share leading symbol {symbol}")]
    SharedLeadingSymbol { path: String, symbol: String },
    #[error("child of `{path}` is filed under {filed} but its label starts with {actual}")]
    MisfiledChild {
        path: String,
        filed: String,
        actual: String,
    },
    #[error("leaf node `{path}` is not terminal")]
    DeadEnd { path: String },
    #[error("non-terminal node `{path}` has a single child and should have been merged")]
    PassThrough { path: String },
    #[error("tree counts {counted} keys but reports {recorded}")]
    CountMismatch { counted: usize, recorded: usize },
}
