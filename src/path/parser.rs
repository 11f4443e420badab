//! Segment resolver: turns raw tokens into typed [`Segment`]s.

use super::ast::{Path, Segment, Slice};
use super::error::PathError;
use super::lexer::tokenize;
use tracing::trace;

/// Root token.
pub const ROOT_TOKEN: &str = "$";

/// Parser for path strings.
pub struct Parser;

impl Parser {
    /// Parses a path string into a [`Path`].
    ///
    /// # Example
    ///
    /// ```
    /// use pathdict::path::{Parser, Segment};
    ///
    /// let path = Parser::parse("tags[1]").unwrap();
    /// assert_eq!(
    ///     path.segments,
    ///     vec![Segment::Key("tags".to_string()), Segment::Index(1)]
    /// );
    /// assert!(Parser::parse("").unwrap().is_empty());
    /// ```
    pub fn parse(path: &str) -> Result<Path, PathError> {
        let segments = tokenize(path)
            .into_iter()
            .map(Self::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        trace!(path = path, segments = segments.len(), "parsed path");
        Ok(Path::new(segments))
    }

    /// Classifies a single raw token.
    pub fn resolve(token: &str) -> Result<Segment, PathError> {
        if token == ROOT_TOKEN {
            return Ok(Segment::Root);
        }
        match token
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Some(content) => Self::resolve_bracket(token, content),
            None => Ok(Segment::Key(token.to_string())),
        }
    }

    /// Parses the inside of `[...]`: an index or a 2/3-part slice.
    fn resolve_bracket(token: &str, content: &str) -> Result<Segment, PathError> {
        let parts: Vec<&str> = content.split(':').collect();
        match parts.as_slice() {
            [index] => Ok(Segment::Index(Self::parse_number(token, index)?)),
            [start, stop] => Ok(Segment::Slice(Slice::new(
                Self::parse_bound(token, start)?,
                Self::parse_bound(token, stop)?,
                1,
            ))),
            [start, stop, step] => {
                let step = Self::parse_bound(token, step)?.unwrap_or(1);
                if step == 0 {
                    return Err(invalid(token, "slice step cannot be zero"));
                }
                Ok(Segment::Slice(Slice::new(
                    Self::parse_bound(token, start)?,
                    Self::parse_bound(token, stop)?,
                    step,
                )))
            }
            _ => Err(invalid(token, "expected at most two ':' separators")),
        }
    }

    fn parse_bound(token: &str, text: &str) -> Result<Option<isize>, PathError> {
        if text.is_empty() {
            Ok(None)
        } else {
            Self::parse_number(token, text).map(Some)
        }
    }

    fn parse_number(token: &str, text: &str) -> Result<isize, PathError> {
        text.parse::<isize>()
            .map_err(|_| invalid(token, &format!("invalid number '{}'", text)))
    }
}

fn invalid(token: &str, message: &str) -> PathError {
    PathError::InvalidPath {
        segment: token.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> Segment {
        Segment::Key(name.to_string())
    }

    #[test]
    fn test_parse_root() {
        let path = Parser::parse("$").unwrap();
        assert_eq!(path.segments, vec![Segment::Root]);
    }

    #[test]
    fn test_parse_nested_keys() {
        let path = Parser::parse("$.store.book").unwrap();
        assert_eq!(path.segments, vec![Segment::Root, key("store"), key("book")]);
    }

    #[test]
    fn test_parse_chained_indexes() {
        let path = Parser::parse("a[9][3]").unwrap();
        assert_eq!(
            path.segments,
            vec![key("a"), Segment::Index(9), Segment::Index(3)]
        );
    }

    #[test]
    fn test_parse_negative_index() {
        let path = Parser::parse("[-1]").unwrap();
        assert_eq!(path.segments, vec![Segment::Index(-1)]);
    }

    #[test]
    fn test_parse_slices() {
        assert_eq!(
            Parser::resolve("[1:3]").unwrap(),
            Segment::Slice(Slice::new(Some(1), Some(3), 1))
        );
        assert_eq!(
            Parser::resolve("[2:]").unwrap(),
            Segment::Slice(Slice::new(Some(2), None, 1))
        );
        assert_eq!(
            Parser::resolve("[:5]").unwrap(),
            Segment::Slice(Slice::new(None, Some(5), 1))
        );
        assert_eq!(
            Parser::resolve("[::-1]").unwrap(),
            Segment::Slice(Slice::new(None, None, -1))
        );
        assert_eq!(
            Parser::resolve("[1:4:]").unwrap(),
            Segment::Slice(Slice::new(Some(1), Some(4), 1))
        );
    }

    #[test]
    fn test_too_many_colons_fails() {
        let err = Parser::parse("a[1:2:3:4]").unwrap_err();
        assert!(matches!(err, PathError::InvalidPath { .. }));
    }

    #[test]
    fn test_zero_step_fails() {
        assert!(matches!(
            Parser::parse("[::0]"),
            Err(PathError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_non_numeric_index_fails() {
        assert!(matches!(
            Parser::parse("[x]"),
            Err(PathError::InvalidPath { .. })
        ));
        assert!(matches!(
            Parser::parse("[]"),
            Err(PathError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_bracket_inside_key_is_a_key() {
        let path = Parser::parse("a[x]").unwrap();
        assert_eq!(path.segments, vec![key("a[x]")]);
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["a.b.c", "$.tags[1]", "[0:2]", "items[-1].name", "x[::2]"] {
            let path = Parser::parse(text).unwrap();
            assert_eq!(path.to_string(), text);
            assert_eq!(Parser::parse(&path.to_string()).unwrap(), path);
        }
    }
}
