//! Error handling and result types for OrderedTree operations.
//!
//! Every failure in this crate is local and synchronous: a missing operand,
//! a rotation requested on a pair that is not parent/child, an iterator
//! advanced past its window, or a structural check that found a broken link.

use thiserror::Error;

/// Error type for ordered tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A required operand was absent (`None` value or an unallocated node id).
    #[error("Null argument: {0}")]
    NullArgument(String),
    /// Two nodes were expected to be parent and child but are not.
    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),
    /// The iterator has no further in-range element.
    #[error("No more elements available")]
    EndOfSequence,
    /// An ordering or balancing invariant does not hold.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
    /// Links between arena nodes are inconsistent.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
}

impl TreeError {
    /// Create a NullArgument error naming the missing operand
    pub fn null_argument(operation: &str, operand: &str) -> Self {
        Self::NullArgument(format!("{} requires {}", operation, operand))
    }

    /// Create an InvalidRelationship error for a child/parent pair
    pub fn invalid_relationship(child: u32, parent: u32) -> Self {
        Self::InvalidRelationship(format!(
            "node {} is neither the left nor the right child of node {}",
            child, parent
        ))
    }

    /// Create a DataIntegrity error with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrity(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument(_))
    }

    pub fn is_invalid_relationship(&self) -> bool {
        matches!(self, Self::InvalidRelationship(_))
    }

    pub fn is_end_of_sequence(&self) -> bool {
        matches!(self, Self::EndOfSequence)
    }
}

/// Public result type for tree operations that may fail
pub type TreeResult<T> = Result<T, TreeError>;

/// Result extension trait for attaching context to tree errors
pub trait TreeResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> TreeResult<T>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> TreeResult<T>;
}

impl<T> TreeResultExt<T> for Result<T, TreeError> {
    fn with_context(self, context: &str) -> TreeResult<T> {
        self.map_err(|e| match e {
            TreeError::NullArgument(msg) => {
                TreeError::NullArgument(format!("{}: {}", context, msg))
            }
            TreeError::InvalidRelationship(msg) => {
                TreeError::InvalidRelationship(format!("{}: {}", context, msg))
            }
            TreeError::EndOfSequence => TreeError::EndOfSequence,
            TreeError::DataIntegrity(msg) => TreeError::data_integrity(context, &msg),
            TreeError::CorruptedTree(msg) => TreeError::corrupted_tree(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> TreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
