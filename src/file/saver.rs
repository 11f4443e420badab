//! Document saving.
//!
//! Serializes a `PathTree` in the format implied by the target file name and
//! writes it atomically, optionally keeping a `.bak` copy of the old file.

use super::{is_gzipped, Format};
use crate::config::Config;
use crate::document::node::Node;
use crate::document::tree::PathTree;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Creates a backup of the file by copying it to `<name>.bak`.
fn create_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Saves a tree to a file.
///
/// JSON output is pretty-printed with `config.indent_size` spaces unless
/// `config.pretty` is off. YAML output always uses the YAML block style.
///
/// # Errors
///
/// Fails when the backup, temporary file, compression, or final rename
/// fails. The target is left untouched in that case.
pub fn save_file<P: AsRef<Path>>(path: P, tree: &PathTree, config: &Config) -> Result<()> {
    let path = path.as_ref();

    // Create backup if requested and file exists
    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let mut text = serialize_node(tree.root(), Format::from_path(path), config)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }

    write_file_atomic(path, text.as_bytes(), is_gzipped(path))?;
    debug!(path = %path.display(), bytes = text.len(), "saved file");

    Ok(())
}

/// Serializes a node in the given format.
pub fn serialize_node(node: &Node, format: Format, config: &Config) -> Result<String> {
    match format {
        Format::Yaml => serde_yaml::to_string(node).context("Failed to serialize YAML"),
        Format::Json if config.pretty => serialize_json_pretty(node, config.indent_size),
        Format::Json => serde_json::to_string(node).context("Failed to serialize JSON"),
    }
}

fn serialize_json_pretty(node: &Node, indent_size: usize) -> Result<String> {
    let indent = " ".repeat(indent_size);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    node.serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buffer).context("Serialized JSON is not UTF-8")
}

/// Writes to a temporary sibling file, then renames it over the target.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    // Atomic rename
    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_json_indent() {
        let node = Node::from(json!({"a": [1]}));
        let config = Config {
            indent_size: 4,
            ..Config::default()
        };
        let text = serialize_node(&node, Format::Json, &config).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn test_serialize_json_compact() {
        let node = Node::from(json!({"a": [1, "x"]}));
        let config = Config {
            pretty: false,
            ..Config::default()
        };
        let text = serialize_node(&node, Format::Json, &config).unwrap();
        assert_eq!(text, r#"{"a":[1,"x"]}"#);
    }

    #[test]
    fn test_serialize_yaml() {
        let node = Node::from(json!({"name": "T", "tags": ["x"]}));
        let text = serialize_node(&node, Format::Yaml, &Config::default()).unwrap();
        assert_eq!(text, "name: T\ntags:\n- x\n");
    }
}
