//! Owning facade over a tree.
//!
//! `PathTree` holds a root [`Node`] and addresses it with path strings. It is
//! the explicit replacement for attribute-style access: `tree.get("a.b")`,
//! `tree.set("a.b", 1)`, `tree.delete("a.b")`.
//!
//! # Example
//!
//! ```
//! use pathdict::document::tree::PathTree;
//! use pathdict::document::node::Node;
//!
//! let mut tree = PathTree::default();
//! tree.set("project.name", "pathdict").unwrap();
//! tree.set("project.tags", vec![Node::from("x"), Node::from("y")]).unwrap();
//!
//! assert_eq!(tree.get("project.tags[-1]").unwrap(), Some(Node::from("y")));
//! assert!(tree.contains("project.name").unwrap());
//!
//! // An empty path replaces the whole tree
//! tree.set("", Node::from(vec![Node::from(1)])).unwrap();
//! assert_eq!(tree.len(), 1);
//! ```

use super::node::Node;
use crate::access;
use crate::config::Config;
use crate::path::{Parser, Path, PathError};
use std::fmt;

/// A tree addressed by path strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTree {
    root: Node,
    /// Longest path accepted, in bytes
    max_path_len: Option<usize>,
}

impl PathTree {
    /// Creates a tree with no path length limit.
    pub fn new(root: Node) -> Self {
        Self {
            root,
            max_path_len: None,
        }
    }

    /// Creates a tree that applies the limits from `config`.
    pub fn with_config(root: Node, config: &Config) -> Self {
        Self {
            root,
            max_path_len: Some(config.max_path_len),
        }
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns a mutable reference to the root node.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Replaces the root, returning the previous one.
    pub fn replace_root(&mut self, root: Node) -> Node {
        std::mem::replace(&mut self.root, root)
    }

    fn parse(&self, path: &str) -> Result<Path, PathError> {
        if let Some(max) = self.max_path_len {
            if path.len() > max {
                return Err(PathError::PathTooLong {
                    len: path.len(),
                    max,
                });
            }
        }
        Parser::parse(path)
    }

    /// Returns a copy of the value at `path`, or `None` if nothing is there.
    pub fn get(&self, path: &str) -> Result<Option<Node>, PathError> {
        access::read_path(&self.root, &self.parse(path)?)
    }

    /// Returns the value at `path`, or `default` if nothing is there.
    pub fn get_or(&self, path: &str, default: impl Into<Node>) -> Result<Node, PathError> {
        Ok(self.get(path)?.unwrap_or_else(|| default.into()))
    }

    /// Stores `value` at `path`. An empty path replaces the whole tree.
    pub fn set(&mut self, path: &str, value: impl Into<Node>) -> Result<Node, PathError> {
        let path = self.parse(path)?;
        access::write_path(&mut self.root, &path, value.into())
    }

    /// Removes the value at `path`, returning it if it existed.
    pub fn delete(&mut self, path: &str) -> Result<Option<Node>, PathError> {
        let path = self.parse(path)?;
        access::delete_path(&mut self.root, &path)
    }

    /// True when `path` holds a non-null value.
    pub fn contains(&self, path: &str) -> Result<bool, PathError> {
        Ok(self.get(path)?.is_some_and(|node| !node.is_null()))
    }

    /// Number of entries or elements at the root; zero for a scalar root.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// True when the root is an empty container or null.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.root)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.root)
    }
}

impl Default for PathTree {
    /// An empty mapping.
    fn default() -> Self {
        PathTree::new(Node::mapping())
    }
}

impl From<Node> for PathTree {
    fn from(root: Node) -> Self {
        PathTree::new(root)
    }
}

impl fmt::Display for PathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
