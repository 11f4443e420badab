//! Template rewriting with `$` placeholders.
//!
//! A template is a tree in which some string values are paths into a data
//! tree. Rewriting replaces each such placeholder with the value found at
//! that path, so a payload can be assembled from a template, and a response
//! field can be pulled out with a bare path template.
//!
//! # Example
//!
//! ```
//! use pathdict::document::node::Node;
//! use pathdict::rewrite::rewrite;
//! use serde_json::json;
//!
//! let data = Node::from(json!({"user": {"gid": "42", "name": "T"}}));
//! let template = Node::from(json!({
//!     "data": {"assignee": "$.user.gid", "notes": "plain text"}
//! }));
//!
//! let payload = rewrite(&template, &data).unwrap();
//! assert_eq!(
//!     payload,
//!     Node::from(json!({"data": {"assignee": "42", "notes": "plain text"}}))
//! );
//!
//! // A bare string template is a path itself
//! let name = rewrite(&Node::from("user.name"), &data).unwrap();
//! assert_eq!(name, Node::from("T"));
//! ```

use crate::access::read;
use crate::document::node::{Node, Scalar};
use crate::path::parser::ROOT_TOKEN;
use crate::path::PathError;
use tracing::debug;

/// Rewrites `template` against `data`.
///
/// A string template is read from `data` as a path (the empty string yields
/// all of `data`). Any other template is copied with every string value that
/// starts with `$` replaced by the value at that path. Keys are left as they
/// are. Placeholders whose path finds nothing become null.
pub fn rewrite(template: &Node, data: &Node) -> Result<Node, PathError> {
    match template {
        Node::Scalar(Scalar::String(path)) => lookup(data, path),
        other => substitute(other, data),
    }
}

/// True when `text` is a placeholder.
pub fn is_placeholder(text: &str) -> bool {
    text.starts_with(ROOT_TOKEN)
}

fn substitute(node: &Node, data: &Node) -> Result<Node, PathError> {
    match node {
        Node::Mapping(entries) => entries
            .iter()
            .map(|(key, value)| substitute(value, data).map(|value| (key.clone(), value)))
            .collect::<Result<_, PathError>>()
            .map(Node::Mapping),
        Node::Sequence(items) => items
            .iter()
            .map(|item| substitute(item, data))
            .collect::<Result<_, PathError>>()
            .map(Node::Sequence),
        Node::Scalar(Scalar::String(text)) if is_placeholder(text) => lookup(data, text),
        other => Ok(other.clone()),
    }
}

fn lookup(data: &Node, path: &str) -> Result<Node, PathError> {
    let value = read(data, path)?;
    debug!(path = path, found = value.is_some(), "substituted placeholder");
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_placeholder_becomes_null() {
        let data = Node::from(json!({"a": 1}));
        let template = Node::from(json!({"x": "$.missing.deep"}));
        assert_eq!(
            rewrite(&template, &data).unwrap(),
            Node::from(json!({"x": null}))
        );
    }

    #[test]
    fn test_placeholder_keys_are_not_substituted() {
        let data = Node::from(json!({"a": 1}));
        let template = Node::from(json!({"$.a": "$.a"}));
        assert_eq!(
            rewrite(&template, &data).unwrap(),
            Node::from(json!({"$.a": 1}))
        );
    }

    #[test]
    fn test_container_values_are_spliced_in() {
        let data = Node::from(json!({"tags": ["x", "y"], "meta": {"k": "v"}}));
        let template = Node::from(json!(["$.tags", {"m": "$.meta"}, 3, "$.tags[0]"]));
        assert_eq!(
            rewrite(&template, &data).unwrap(),
            Node::from(json!([["x", "y"], {"m": {"k": "v"}}, 3, "x"]))
        );
    }

    #[test]
    fn test_empty_string_template_returns_everything() {
        let data = Node::from(json!({"a": [1, 2]}));
        assert_eq!(rewrite(&Node::from(""), &data).unwrap(), data);
    }

    #[test]
    fn test_navigation_errors_propagate() {
        let data = Node::from(json!({"a": 1}));
        let template = Node::from(json!({"x": "$.a.b"}));
        assert!(matches!(
            rewrite(&template, &data),
            Err(PathError::TypeMismatch { .. })
        ));
    }
}
