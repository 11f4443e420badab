//! Path expressions and the engine that applies them to trees.
//!
//! A path names one place in a tree of mappings, sequences and scalars.
//!
//! # Supported Syntax
//!
//! - `name` - Mapping key; keys are separated by `.`
//! - `$` - The node itself (a no-op step, so `$.a.b` equals `a.b`)
//! - `[index]` - Sequence element, or the n-th entry of a mapping by key
//!   order (negative counts from the end)
//! - `[start:stop]`, `[start:stop:step]` - Range with Python slice rules
//! - empty path - The whole tree
//!
//! # Examples
//!
//! ```
//! // user.name         - the "name" key under "user"
//! // tags[1]           - the second element of "tags"
//! // items[-1].price   - "price" of the last item
//! // [0:2]             - the first two entries of the root mapping
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod navigator;
pub mod parser;

pub use ast::{Path, Segment, Slice};
pub use error::PathError;
pub use navigator::Mutation;
pub use parser::Parser;

/// Builds a path addressing a single position of the root.
///
/// # Example
///
/// ```
/// use pathdict::path::index_path;
///
/// assert_eq!(index_path(3), "$[3]");
/// assert_eq!(index_path(-1), "$[-1]");
/// ```
pub fn index_path(index: isize) -> String {
    Path::new(vec![Segment::Root, Segment::Index(index)]).to_string()
}

/// Builds a path addressing a range of the root.
///
/// # Example
///
/// ```
/// use pathdict::path::slice_path;
///
/// assert_eq!(slice_path(Some(1), Some(4), None), "$[1:4]");
/// assert_eq!(slice_path(None, None, Some(-1)), "$[::-1]");
/// ```
pub fn slice_path(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> String {
    let slice = Slice::new(start, stop, step.unwrap_or(1));
    Path::new(vec![Segment::Root, Segment::Slice(slice)]).to_string()
}
