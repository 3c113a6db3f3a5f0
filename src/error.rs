use std::result;
use thiserror::Error;

/// Errors surfaced by the tree operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The operation needs a root, first, or last element but the tree is empty.
    #[error("operation requires a non-empty tree")]
    EmptyStructure,
    /// An argument could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = result::Result<T, Error>;
