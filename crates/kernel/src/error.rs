//! Kernel error types.
//!
//! None of these interrupt a page render: the composer logs block errors and
//! skips the offending block. Ordering errors come back to the admin caller.

use thiserror::Error;

/// A stored block row that cannot be turned into a typed block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("block {id}: unknown presentation type '{value}'")]
    UnknownType { id: String, value: String },

    #[error("block {id}: unknown layout position '{value}'")]
    UnknownPosition { id: String, value: String },

    #[error("block {id}: unknown target page '{value}'")]
    UnknownTargetPage { id: String, value: String },
}

/// A reorder request that does not describe a permutation of one position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("block not found: {0}")]
    NotFound(String),

    #[error("block {id} is in position '{actual}', not '{expected}'")]
    WrongPosition {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("block {0} appears more than once in the requested order")]
    Duplicate(String),

    #[error("requested order lists {given} of {expected} blocks in the position")]
    Incomplete { given: usize, expected: usize },
}
