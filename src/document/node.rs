//! Tree node representation.
//!
//! This module provides the core data structures for the trees pathdict
//! addresses. Every value is a [`Node`]: an ordered mapping of string keys to
//! nodes, an ordered sequence of nodes, or a [`Scalar`] leaf. Mapping order is
//! insertion order and is meaningful, since positional path segments such as
//! `[1]` select entries by where they sit in that order.
//!
//! # Example
//!
//! ```
//! use pathdict::document::node::{Node, Scalar};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), Node::from("pathdict"));
//! map.insert("version".to_string(), Node::from(1));
//! let node = Node::Mapping(map);
//!
//! assert!(node.is_mapping());
//! assert_eq!(node.as_mapping().unwrap().len(), 2);
//! assert_eq!(Node::from(true), Node::Scalar(Scalar::Boolean(true)));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered key/value storage used by [`Node::Mapping`].
pub type Mapping = IndexMap<String, Node>;

/// Numbers are kept as integers when they have no fractional part on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

/// A terminal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
}

/// One unit of an addressed tree.
///
/// A node is always exactly one shape. Navigation matches on the shape at
/// every step; there is no implicit conversion between mappings and
/// sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Key/value pairs in insertion order
    Mapping(Mapping),
    /// Ordered values
    Sequence(Vec<Node>),
    /// A leaf value
    Scalar(Scalar),
}

impl Default for Node {
    fn default() -> Self {
        Node::null()
    }
}

impl Node {
    /// Creates an empty mapping.
    pub fn mapping() -> Self {
        Node::Mapping(Mapping::new())
    }

    /// Creates an empty sequence.
    pub fn sequence() -> Self {
        Node::Sequence(Vec::new())
    }

    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// Names the shape of this node, as used in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use pathdict::document::node::Node;
    ///
    /// assert_eq!(Node::mapping().kind(), "mapping");
    /// assert_eq!(Node::from(vec![Node::from(1)]).kind(), "sequence");
    /// assert_eq!(Node::from("x").kind(), "scalar");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(_) => "scalar",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Scalar(Scalar::Number(Number::Integer(i))) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Scalar(Scalar::Number(n)) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Scalar(Scalar::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Number of entries or elements; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Node::Mapping(entries) => entries.len(),
            Node::Sequence(items) => items.len(),
            Node::Scalar(_) => 0,
        }
    }

    /// True for empty containers and for null.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Mapping(entries) => entries.is_empty(),
            Node::Sequence(items) => items.is_empty(),
            Node::Scalar(scalar) => matches!(scalar, Scalar::Null),
        }
    }
}

/// Renders compact JSON.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<Mapping> for Node {
    fn from(entries: Mapping) -> Self {
        Node::Mapping(entries)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Scalar(Scalar::Number(Number::Integer(n)))
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::from(i64::from(n))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Scalar(Scalar::Number(Number::Float(n)))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Boolean(b))
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(format!("{}", Number::Integer(42)), "42");
        assert_eq!(format!("{}", Number::Float(42.5)), "42.5");
    }

    #[test]
    fn test_is_empty_covers_null() {
        assert!(Node::null().is_empty());
        assert!(Node::mapping().is_empty());
        assert!(!Node::from(0).is_empty());
        assert!(!Node::from("").is_empty());
    }

    #[test]
    fn test_display_is_compact_json() {
        let mut map = Mapping::new();
        map.insert("b".to_string(), Node::from(2));
        map.insert("a".to_string(), Node::from(vec![Node::from("x"), Node::null()]));
        assert_eq!(Node::Mapping(map).to_string(), r#"{"b":2,"a":["x",null]}"#);
    }

    #[test]
    fn test_deserialize_keeps_integers() {
        let node: Node = serde_json::from_str(r#"{"i": 3, "f": 3.5}"#).unwrap();
        let entries = node.as_mapping().unwrap();
        assert_eq!(entries["i"].as_i64(), Some(3));
        assert_eq!(entries["f"].as_f64(), Some(3.5));
        assert_eq!(entries["f"].as_i64(), None);
    }
}
