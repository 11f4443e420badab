//! Document loading.
//!
//! Reads JSON or YAML from files or stdin and parses it into a `PathTree`.

use super::{is_gzipped, Format};
use crate::document::parser::{parse_json, parse_yaml};
use crate::document::tree::PathTree;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Loads and parses a document from the filesystem.
///
/// The format comes from the file name (see [`Format::from_path`]) and gzip
/// input is decompressed when the name ends in `.gz`.
///
/// # Examples
///
/// ```no_run
/// use pathdict::file::loader::load_file;
///
/// let tree = load_file("config.json").unwrap();
/// let name = tree.get("project.name").unwrap();
/// ```
///
/// # Errors
///
/// Fails when the file cannot be read or decompressed, or when its contents
/// do not parse in the detected format.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<PathTree> {
    let path_ref = path.as_ref();

    let content = if is_gzipped(path_ref) {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let format = Format::from_path(path_ref);
    debug!(path = %path_ref.display(), ?format, bytes = content.len(), "loaded file");
    load_from_str(&content, format)
}

/// Parses document text in the given format.
pub fn load_from_str(content: &str, format: Format) -> Result<PathTree> {
    let root = match format {
        Format::Json => parse_json(content)?,
        Format::Yaml => parse_yaml(content)?,
    };
    Ok(PathTree::new(root))
}

/// Reads a whole document from any reader, decompressing gzip input.
pub fn load_from_reader<R: Read>(mut reader: R, format: Format) -> Result<PathTree> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;

    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    load_from_str(&content, format)
}

/// Loads a document from standard input.
pub fn load_from_stdin(format: Format) -> Result<PathTree> {
    load_from_reader(std::io::stdin().lock(), format).context("Failed to load from stdin")
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = flate2::read::GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    let mut decoder = flate2::read::GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::Node;

    #[test]
    fn test_load_from_reader_plain() {
        let tree = load_from_reader(&b"[1, 2]"[..], Format::Json).unwrap();
        assert_eq!(tree.get("[1]").unwrap(), Some(Node::from(2)));
    }

    #[test]
    fn test_load_from_reader_gzip() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"a:\n  b: 3\n").unwrap();
        let bytes = encoder.finish().unwrap();

        let tree = load_from_reader(&bytes[..], Format::Yaml).unwrap();
        assert_eq!(tree.get("a.b").unwrap(), Some(Node::from(3)));
    }

    #[test]
    fn test_load_from_str_reports_format_errors() {
        assert!(load_from_str("{not json", Format::Json).is_err());
    }
}
