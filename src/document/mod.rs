//! Tree data model.
//!
//! - [`node`] - The [`Node`](node::Node) variant type
//! - [`parser`] - Conversion from JSON/YAML text and `serde_json::Value`
//! - [`tree`] - [`PathTree`](tree::PathTree), an owning facade addressed by path strings

pub mod node;
pub mod parser;
pub mod tree;
