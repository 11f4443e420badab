//! Conversion between text formats and [`Node`] trees.
//!
//! JSON goes through `serde_json::Value` so object order is kept. YAML goes
//! through `serde_yaml::Value`, which allows non-string scalar keys; those are
//! rendered to strings, and tags are dropped in favour of the tagged value.
//!
//! # Example
//!
//! ```
//! use pathdict::document::parser::{parse_json, parse_yaml};
//!
//! let from_json = parse_json(r#"{"name": "Alice", "tags": ["a", "b"]}"#).unwrap();
//! let from_yaml = parse_yaml("name: Alice\ntags: [a, b]\n").unwrap();
//! assert_eq!(from_json, from_yaml);
//! ```

use super::node::{Mapping, Node, Number, Scalar};
use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Parses a JSON document.
pub fn parse_json(json_str: &str) -> Result<Node> {
    let value: JsonValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(&value))
}

/// Parses a YAML document.
pub fn parse_yaml(yaml_str: &str) -> Result<Node> {
    let value: YamlValue = serde_yaml::from_str(yaml_str).context("Failed to parse YAML")?;
    parse_yaml_value(&value)
}

/// Converts a `serde_json::Value` into a [`Node`].
pub fn parse_value(value: &JsonValue) -> Node {
    match value {
        JsonValue::Object(map) => Node::Mapping(
            map.iter()
                .map(|(k, v)| (k.clone(), parse_value(v)))
                .collect(),
        ),
        JsonValue::Array(arr) => Node::Sequence(arr.iter().map(parse_value).collect()),
        JsonValue::String(s) => Node::from(s.as_str()),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Node::from(i),
            None => Node::from(n.as_f64().unwrap_or(0.0)),
        },
        JsonValue::Bool(b) => Node::from(*b),
        JsonValue::Null => Node::null(),
    }
}

/// Converts a [`Node`] into a `serde_json::Value`.
///
/// Non-finite floats have no JSON form and become null.
pub fn to_value(node: &Node) -> JsonValue {
    match node {
        Node::Mapping(entries) => JsonValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), to_value(v)))
                .collect(),
        ),
        Node::Sequence(items) => JsonValue::Array(items.iter().map(to_value).collect()),
        Node::Scalar(Scalar::String(s)) => JsonValue::String(s.clone()),
        Node::Scalar(Scalar::Number(Number::Integer(i))) => JsonValue::from(*i),
        Node::Scalar(Scalar::Number(Number::Float(f))) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Node::Scalar(Scalar::Boolean(b)) => JsonValue::Bool(*b),
        Node::Scalar(Scalar::Null) => JsonValue::Null,
    }
}

/// Converts a `serde_yaml::Value` into a [`Node`].
pub fn parse_yaml_value(value: &YamlValue) -> Result<Node> {
    Ok(match value {
        YamlValue::Mapping(map) => {
            let mut entries = Mapping::with_capacity(map.len());
            for (k, v) in map {
                entries.insert(yaml_key(k)?, parse_yaml_value(v)?);
            }
            Node::Mapping(entries)
        }
        YamlValue::Sequence(items) => Node::Sequence(
            items
                .iter()
                .map(parse_yaml_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::String(s) => Node::from(s.as_str()),
        YamlValue::Number(n) => match n.as_i64() {
            Some(i) => Node::from(i),
            None => Node::from(n.as_f64().unwrap_or(0.0)),
        },
        YamlValue::Bool(b) => Node::from(*b),
        YamlValue::Null => Node::null(),
        YamlValue::Tagged(tagged) => parse_yaml_value(&tagged.value)?,
    })
}

fn yaml_key(key: &YamlValue) -> Result<String> {
    Ok(match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Tagged(tagged) => yaml_key(&tagged.value)?,
        YamlValue::Mapping(_) | YamlValue::Sequence(_) => {
            bail!("Unsupported YAML key: mapping keys must be scalars")
        }
    })
}

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        parse_value(&value)
    }
}

impl From<&Node> for JsonValue {
    fn from(node: &Node) -> Self {
        to_value(node)
    }
}

impl From<Node> for JsonValue {
    fn from(node: Node) -> Self {
        to_value(&node)
    }
}
