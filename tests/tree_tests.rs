//! Integration tests for the owning `PathTree` facade.

use pathdict::config::Config;
use pathdict::{Node, PathError, PathTree};
use serde_json::json;

#[test]
fn test_default_tree_is_empty_mapping() {
    let tree = PathTree::default();
    assert!(tree.is_empty());
    assert_eq!(tree.root(), &Node::mapping());
}

#[test]
fn test_get_set_delete() {
    let mut tree = PathTree::from(Node::from(json!({"user": {"name": "Alice"}})));

    tree.set("user.roles", Node::from(json!(["admin"]))).unwrap();
    assert_eq!(tree.get("user.roles[0]").unwrap(), Some(Node::from("admin")));
    assert_eq!(tree.get_or("user.age", 0).unwrap(), Node::from(0));

    let removed = tree.delete("user.name").unwrap();
    assert_eq!(removed, Some(Node::from("Alice")));
    assert!(!tree.contains("user.name").unwrap());
    assert_eq!(
        tree.into_root(),
        Node::from(json!({"user": {"roles": ["admin"]}}))
    );
}

#[test]
fn test_set_empty_path_replaces_root() {
    let mut tree = PathTree::from(Node::from(json!({"a": 1})));
    let old = tree.set("", Node::from(json!({"b": 2}))).unwrap();
    assert_eq!(old, Node::from(json!({"a": 1})));
    assert_eq!(tree.get("b").unwrap(), Some(Node::from(2)));
}

#[test]
fn test_replace_root() {
    let mut tree = PathTree::default();
    let old = tree.replace_root(Node::from(json!([1, 2, 3])));
    assert_eq!(old, Node::mapping());
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_config_limits_path_length() {
    let config = Config {
        max_path_len: 3,
        ..Config::default()
    };
    let tree = PathTree::with_config(Node::from(json!({"abc": 1})), &config);
    assert_eq!(tree.get("abc").unwrap(), Some(Node::from(1)));
    assert_eq!(
        tree.get("abc.d"),
        Err(PathError::PathTooLong { len: 5, max: 3 })
    );
}

#[test]
fn test_root_mut_edits_in_place() {
    let mut tree = PathTree::default();
    tree.root_mut()
        .as_mapping_mut()
        .unwrap()
        .insert("k".to_string(), Node::from(true));
    assert_eq!(tree.get("k").unwrap(), Some(Node::from(true)));
}

#[test]
fn test_json_rendering_keeps_order() {
    let mut tree = PathTree::default();
    tree.set("z", 1).unwrap();
    tree.set("a", 2).unwrap();
    assert_eq!(tree.to_json_string().unwrap(), r#"{"z":1,"a":2}"#);
    assert_eq!(
        tree.to_json_pretty().unwrap(),
        "{\n  \"z\": 1,\n  \"a\": 2\n}"
    );
}
