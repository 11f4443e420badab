//! Error types for path parsing and navigation.

use thiserror::Error;

/// Errors raised while parsing a path or applying it to a tree.
///
/// Reads and deletes never fail because something is absent; these errors
/// describe paths that are malformed or that do not fit the shape of the
/// tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Malformed index or slice syntax.
    #[error("Invalid path segment '{segment}': {message}")]
    InvalidPath { segment: String, message: String },

    /// Attempt to overwrite or delete the node addressed by `$` in place.
    #[error("Cannot {action} the node addressed by '$'")]
    ProtectedRoot { action: &'static str },

    /// A segment applied to a node of the wrong shape.
    #[error("Segment '{segment}' cannot be applied to a {found}")]
    TypeMismatch { segment: String, found: &'static str },

    /// A slice used where a single branch must be chosen.
    #[error("Slice '{segment}' cannot select a single branch to descend into")]
    AmbiguousBranch { segment: String },

    /// A write whose value cannot be spread over the selected positions.
    #[error("Cannot assign to '{segment}': {message}")]
    InvalidBulkAssignment { segment: String, message: String },

    /// A single index outside the container.
    #[error("Index {index} out of range for {kind} of length {len}")]
    IndexOutOfRange {
        index: isize,
        len: usize,
        kind: &'static str,
    },

    /// A path longer than the configured limit.
    #[error("Path is {len} bytes long, limit is {max}")]
    PathTooLong { len: usize, max: usize },
}
