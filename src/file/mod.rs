//! File I/O for trees.
//!
//! This module loads JSON and YAML documents from disk or stdin into
//! `PathTree`s, and saves trees back with atomic writes and optional backups.
//! A trailing `.gz` on a file name means gzip compression.

pub mod loader;
pub mod saver;

use std::path::Path;

/// On-disk document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from a file name, ignoring a trailing `.gz`.
    ///
    /// Anything that is not `.yaml`/`.yml` is treated as JSON.
    ///
    /// # Example
    ///
    /// ```
    /// use pathdict::file::Format;
    ///
    /// assert_eq!(Format::from_path("config.yml.gz"), Format::Yaml);
    /// assert_eq!(Format::from_path("data.json"), Format::Json);
    /// assert_eq!(Format::from_path("notes"), Format::Json);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let name = path.as_ref().to_string_lossy();
        let base = name.strip_suffix(".gz").unwrap_or(&name);
        if base.ends_with(".yaml") || base.ends_with(".yml") {
            Format::Yaml
        } else {
            Format::Json
        }
    }
}

/// True when the file name ends in `.gz`.
pub fn is_gzipped<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}
