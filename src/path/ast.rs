//! Parsed path representation.

use std::fmt;

/// A positional range with Python slice semantics.
///
/// Missing bounds are unbounded. `step` is never zero once produced by the
/// parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl Slice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// Normalizes the bounds against a container of `len` items.
    ///
    /// Returns `(start, stop, step)` with negative bounds counted from the end
    /// and out-of-range bounds clamped, exactly as Python's `slice.indices`.
    pub fn bounds(&self, len: usize) -> (isize, isize, isize) {
        let len = len as isize;
        let step = self.step;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) if b < 0 => (b + len).max(lower),
            Some(b) => b.min(upper),
        };
        let (start_default, stop_default) = if step > 0 {
            (lower, upper)
        } else {
            (upper, lower)
        };
        (
            clamp(self.start, start_default),
            clamp(self.stop, stop_default),
            step,
        )
    }

    /// Positions selected in a container of `len` items, in selection order.
    ///
    /// # Example
    ///
    /// ```
    /// use pathdict::path::ast::Slice;
    ///
    /// assert_eq!(Slice::new(Some(1), None, 1).indices(4), vec![1, 2, 3]);
    /// assert_eq!(Slice::new(None, None, -2).indices(5), vec![4, 2, 0]);
    /// assert_eq!(Slice::new(Some(-2), Some(99), 1).indices(3), vec![1, 2]);
    /// ```
    pub fn indices(&self, len: usize) -> Vec<usize> {
        if self.step == 0 {
            return Vec::new();
        }
        let (start, stop, step) = self.bounds(len);
        let mut positions = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            positions.push(i as usize);
            // A step past isize's range cannot land inside the container
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        positions
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: Option<isize>| b.map(|b| b.to_string()).unwrap_or_default();
        write!(f, "[{}:{}", bound(self.start), bound(self.stop))?;
        if self.step != 1 {
            write!(f, ":{}", self.step)?;
        }
        write!(f, "]")
    }
}

/// A single step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// The node itself (`$`)
    Root,
    /// Mapping lookup by name
    Key(String),
    /// Single position (`[3]`, `[-1]`)
    Index(isize),
    /// Positional range (`[1:3]`, `[::2]`)
    Slice(Slice),
}

impl Segment {
    /// True for segments written in brackets.
    pub fn is_positional(&self) -> bool {
        matches!(self, Segment::Index(_) | Segment::Slice(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Root => write!(f, "$"),
            Segment::Key(name) => write!(f, "{}", name),
            Segment::Index(i) => write!(f, "[{}]", i),
            Segment::Slice(slice) => write!(f, "{}", slice),
        }
    }
}

/// A complete parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    /// Segments that make up the path.
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// An empty path addresses the root node as a whole.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

/// Renders the canonical path text, which parses back to the same segments
/// as long as no key contains `.` or a bracket group.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && !segment.is_positional() {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Path {
    type Err = super::error::PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::Parser::parse(s)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_bounds_match_python() {
        // [10, 20, 30, 40, 50][-3:] == [30, 40, 50]
        assert_eq!(Slice::new(Some(-3), None, 1).indices(5), vec![2, 3, 4]);
        // [..][::-1]
        assert_eq!(Slice::new(None, None, -1).indices(3), vec![2, 1, 0]);
        // [..][3:1] is empty
        assert!(Slice::new(Some(3), Some(1), 1).indices(5).is_empty());
        // [..][-100:2]
        assert_eq!(Slice::new(Some(-100), Some(2), 1).indices(5), vec![0, 1]);
        // [..][4:0:-2]
        assert_eq!(Slice::new(Some(4), Some(0), -2).indices(5), vec![4, 2]);
    }

    #[test]
    fn test_slice_on_empty_container() {
        assert!(Slice::new(None, None, 1).indices(0).is_empty());
        assert!(Slice::new(None, None, -1).indices(0).is_empty());
    }

    #[test]
    fn test_huge_steps_select_one_position() {
        assert_eq!(Slice::new(Some(1), None, isize::MAX).indices(3), vec![1]);
        assert_eq!(Slice::new(None, None, isize::MIN).indices(3), vec![2]);
    }

    #[test]
    fn test_zero_step_selects_nothing() {
        assert!(Slice::new(None, None, 0).indices(3).is_empty());
    }

    #[test]
    fn test_display() {
        let path = Path::new(vec![
            Segment::Root,
            Segment::Key("tags".to_string()),
            Segment::Index(-1),
            Segment::Key("name".to_string()),
            Segment::Slice(Slice::new(Some(1), None, 2)),
        ]);
        assert_eq!(path.to_string(), "$.tags[-1].name[1::2]");
        assert_eq!(Slice::new(None, Some(3), 1).to_string(), "[:3]");
    }
}
