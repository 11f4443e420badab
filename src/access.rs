//! Read, write and delete entry points.
//!
//! These functions take a root node and a path string. Reads and deletes are
//! tolerant of absence and return `None`; writes are strict and fail on any
//! path that does not fit the tree.
//!
//! # Example
//!
//! ```
//! use pathdict::access::{delete, read, write};
//! use pathdict::document::node::Node;
//!
//! let mut root = Node::mapping();
//! write(&mut root, "user.tags", vec![Node::from("x")]).unwrap();
//! assert_eq!(read(&root, "user.tags[0]").unwrap(), Some(Node::from("x")));
//!
//! assert_eq!(delete(&mut root, "user.missing").unwrap(), None);
//! assert_eq!(read(&root, "nope.deeper").unwrap(), None);
//! ```

use crate::document::node::Node;
use crate::path::{navigator, Parser, Path, PathError};
use tracing::debug;

/// Returns a copy of the value at `path`, or `None` if nothing is there.
pub fn read(root: &Node, path: &str) -> Result<Option<Node>, PathError> {
    read_path(root, &Parser::parse(path)?)
}

pub fn read_path(root: &Node, path: &Path) -> Result<Option<Node>, PathError> {
    navigator::read(root, &path.segments)
}

/// Like [`read`], substituting `default` when nothing is there.
pub fn read_or(root: &Node, path: &str, default: impl Into<Node>) -> Result<Node, PathError> {
    Ok(read(root, path)?.unwrap_or_else(|| default.into()))
}

/// Stores `value` at `path`.
///
/// The value is moved into the tree, so the caller holds no alias to it. An
/// empty path replaces the whole root. Returns the replaced value, or a copy
/// of the stored value if the leaf did not exist.
///
/// # Errors
///
/// Fails on malformed paths, on segments that do not fit the shape of the
/// node they meet, on slices used as branches, and on values that cannot be
/// spread over a range.
pub fn write(root: &mut Node, path: &str, value: impl Into<Node>) -> Result<Node, PathError> {
    write_path(root, &Parser::parse(path)?, value.into())
}

pub fn write_path(root: &mut Node, path: &Path, value: Node) -> Result<Node, PathError> {
    if path.is_empty() {
        debug!("replacing root");
        return Ok(std::mem::replace(root, value));
    }
    navigator::write(root, &path.segments, value)
}

/// Removes the value at `path`, returning it if it existed.
pub fn delete(root: &mut Node, path: &str) -> Result<Option<Node>, PathError> {
    delete_path(root, &Parser::parse(path)?)
}

pub fn delete_path(root: &mut Node, path: &Path) -> Result<Option<Node>, PathError> {
    if path.is_empty() {
        return Err(PathError::ProtectedRoot { action: "delete" });
    }
    navigator::delete(root, &path.segments)
}

/// True when `path` holds a non-null value.
pub fn contains(root: &Node, path: &str) -> Result<bool, PathError> {
    Ok(read(root, path)?.is_some_and(|node| !node.is_null()))
}
