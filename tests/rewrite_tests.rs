//! Integration tests for template rewriting.

use pathdict::rewrite::{is_placeholder, rewrite};
use pathdict::Node;
use serde_json::json;

fn task() -> Node {
    Node::from(json!({
        "gid": "1204",
        "name": "Write docs",
        "assignee": {"gid": "77", "name": "T"},
        "tags": [{"name": "docs"}, {"name": "urgent"}]
    }))
}

#[test]
fn test_builds_payload_from_response() {
    let template = Node::from(json!({
        "data": {
            "task": "$.gid",
            "owner": "$.assignee.gid",
            "labels": ["$.tags[0].name", "$.tags[-1].name"],
            "source": "api"
        }
    }));

    assert_eq!(
        rewrite(&template, &task()).unwrap(),
        Node::from(json!({
            "data": {
                "task": "1204",
                "owner": "77",
                "labels": ["docs", "urgent"],
                "source": "api"
            }
        }))
    );
}

#[test]
fn test_string_template_extracts_a_field() {
    assert_eq!(
        rewrite(&Node::from("assignee.name"), &task()).unwrap(),
        Node::from("T")
    );
    assert_eq!(
        rewrite(&Node::from("$.tags[1:]"), &task()).unwrap(),
        Node::from(json!([{"name": "urgent"}]))
    );
}

#[test]
fn test_template_is_not_modified() {
    let template = Node::from(json!({"x": "$.gid"}));
    let before = template.clone();
    rewrite(&template, &task()).unwrap();
    assert_eq!(template, before);
}

#[test]
fn test_non_string_scalars_pass_through() {
    let template = Node::from(json!({"n": 1, "b": false, "z": null, "f": 1.5}));
    assert_eq!(rewrite(&template, &task()).unwrap(), template);
}

#[test]
fn test_placeholder_detection() {
    assert!(is_placeholder("$"));
    assert!(is_placeholder("$.a"));
    assert!(!is_placeholder("a.$"));
    assert!(!is_placeholder(""));
}
