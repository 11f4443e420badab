//! pathdict - address JSON/YAML-shaped trees by dotted path.
//!
//! A tree is made of [`Node`]s: ordered mappings, sequences and scalars. A
//! path such as `project.tags[1]` names one place in it, and the three
//! operations in [`access`] read, write or delete there.
//!
//! - Reads and deletes of something absent return `None`.
//! - Writes create missing intermediate mappings (`a.b.c` on `{}` builds
//!   `{"a": {"b": {"c": ...}}}`) and fail on anything ambiguous.
//! - Positional segments work on mappings too, selecting entries by key order.
//!
//! # Example
//!
//! ```
//! use pathdict::{read, write, delete, Node};
//! use serde_json::json;
//!
//! let mut root = Node::from(json!({"gid": "1", "name": "T", "tags": ["x", "y"]}));
//!
//! assert_eq!(read(&root, "tags[1]").unwrap(), Some(Node::from("y")));
//! write(&mut root, "tags[1]", "z").unwrap();
//! delete(&mut root, "gid").unwrap();
//!
//! assert_eq!(root, Node::from(json!({"name": "T", "tags": ["x", "z"]})));
//! ```

pub mod access;
pub mod config;
pub mod document;
pub mod file;
pub mod path;
pub mod rewrite;

pub use access::{contains, delete, read, read_or, write};
pub use document::node::{Node, Number, Scalar};
pub use document::tree::PathTree;
pub use path::{Path, PathError, Segment};
