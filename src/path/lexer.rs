//! Path string tokenizer.
//!
//! Splits a path such as `items[2].tags[0:3]` into raw tokens
//! (`items`, `[2]`, `tags`, `[0:3]`) without interpreting them. A bracket
//! group shaped like an index or slice (integers, each optionally negative,
//! separated by `:`) always starts a token of its own, whether it follows a
//! key or stands alone. Anything else in brackets stays part of the key.
//! Tokens borrow from the input.

use regex::Regex;
use std::sync::LazyLock;

/// Separator between path components.
pub const SEPARATOR: char = '.';

static BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:-?[0-9]+(?::(?:-?[0-9]+)?)*|(?::(?:-?[0-9]+)?)+)\]").expect("valid regex")
});

/// Tokenizes a path string.
///
/// A blank path yields no tokens, which addresses the root.
///
/// # Example
///
/// ```
/// use pathdict::path::lexer::tokenize;
///
/// assert_eq!(tokenize("a[9][3].b"), vec!["a", "[9]", "[3]", "b"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .flat_map(split_brackets)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Cuts a component in front of every bracket group.
fn split_brackets(component: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for group in BRACKET_RE.find_iter(component) {
        tokens.push(&component[start..group.start()]);
        start = group.start();
    }
    tokens.push(&component[start..]);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keys() {
        assert_eq!(tokenize("user.name"), vec!["user", "name"]);
    }

    #[test]
    fn test_tokenize_root_prefix() {
        assert_eq!(tokenize("$.a.b"), vec!["$", "a", "b"]);
        assert_eq!(tokenize("$[0]"), vec!["$", "[0]"]);
    }

    #[test]
    fn test_tokenize_standalone_brackets() {
        assert_eq!(tokenize("[1]"), vec!["[1]"]);
        assert_eq!(tokenize("[0:2].x"), vec!["[0:2]", "x"]);
    }

    #[test]
    fn test_tokenize_negative_slice() {
        assert_eq!(tokenize("items[-3:-1]"), vec!["items", "[-3:-1]"]);
        assert_eq!(tokenize("items[::-1]"), vec!["items", "[::-1]"]);
    }

    #[test]
    fn test_tokenize_drops_empty_components() {
        assert_eq!(tokenize("a..b."), vec!["a", "b"]);
        assert_eq!(tokenize("a.[2]"), vec!["a", "[2]"]);
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn test_non_numeric_brackets_stay_attached() {
        assert_eq!(tokenize("a[x]"), vec!["a[x]"]);
        assert_eq!(tokenize("a[]"), vec!["a[]"]);
    }

    #[test]
    fn test_misplaced_minus_stays_attached() {
        assert_eq!(tokenize("a[1-2]"), vec!["a[1-2]"]);
        assert_eq!(tokenize("a[1:2-]"), vec!["a[1:2-]"]);
        assert_eq!(tokenize("a[1:-2]"), vec!["a", "[1:-2]"]);
    }

    #[test]
    fn test_text_after_a_group_joins_it() {
        assert_eq!(tokenize("a[1]b"), vec!["a", "[1]b"]);
    }
}
