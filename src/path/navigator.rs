//! Recursive path navigator.
//!
//! Each call consumes one segment and either acts on the current node (the
//! last segment, or "leaf") or descends into a child ("branch"). Reads borrow
//! the tree shared and hand back owned copies; writes and deletes borrow it
//! exclusively and share one descent routine.
//!
//! Absence is not an error for reads and deletes: they return `None`. Writes
//! create missing intermediate mappings and fail on anything ambiguous.

use super::ast::{Segment, Slice};
use super::error::PathError;
use crate::document::node::{Mapping, Node};
use tracing::{debug, trace};

/// A change applied at the end of a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Store the value, replacing whatever is there
    Write(Node),
    /// Remove the addressed value
    Delete,
}

impl Mutation {
    fn verb(&self) -> &'static str {
        match self {
            Mutation::Write(_) => "write",
            Mutation::Delete => "delete",
        }
    }
}

/// Reads the value at `segments`.
///
/// Positional segments on a mapping select entries by key order and yield a
/// new mapping holding just those entries.
pub fn read(node: &Node, segments: &[Segment]) -> Result<Option<Node>, PathError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(Some(node.clone()));
    };
    trace!(segment = %segment, remaining = rest.len(), kind = node.kind(), "read");

    match segment {
        Segment::Root => read(node, rest),
        Segment::Key(name) => {
            let Node::Mapping(entries) = node else {
                return Err(type_mismatch(segment, node));
            };
            match entries.get(name) {
                Some(child) => read(child, rest),
                None => Ok(None),
            }
        }
        Segment::Index(index) => match node {
            Node::Sequence(items) => {
                let pos = resolve_index(*index, items.len(), node.kind())?;
                read(&items[pos], rest)
            }
            Node::Mapping(entries) => {
                let pos = resolve_index(*index, entries.len(), node.kind())?;
                let Some((key, child)) = entries.get_index(pos) else {
                    return Err(out_of_range(*index, entries.len(), node.kind()));
                };
                if rest.is_empty() {
                    Ok(Some(single_entry(key.clone(), child.clone())))
                } else {
                    read(child, rest)
                }
            }
            Node::Scalar(_) => Err(type_mismatch(segment, node)),
        },
        Segment::Slice(slice) => {
            if !rest.is_empty() {
                return Err(branch_slice(segment, node));
            }
            match node {
                Node::Sequence(items) => Ok(Some(Node::Sequence(
                    slice
                        .indices(items.len())
                        .into_iter()
                        .map(|pos| items[pos].clone())
                        .collect(),
                ))),
                Node::Mapping(entries) => Ok(Some(Node::Mapping(
                    slice
                        .indices(entries.len())
                        .into_iter()
                        .filter_map(|pos| entries.get_index(pos))
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect(),
                ))),
                Node::Scalar(_) => Err(type_mismatch(segment, node)),
            }
        }
    }
}

/// Writes `value` at `segments`, creating missing mappings on the way.
///
/// Returns the value that was replaced, or a copy of `value` when the leaf
/// did not exist before.
pub fn write(node: &mut Node, segments: &[Segment], value: Node) -> Result<Node, PathError> {
    mutate(node, segments, Mutation::Write(value)).map(Option::unwrap_or_default)
}

/// Deletes the value at `segments`, returning it if it existed.
pub fn delete(node: &mut Node, segments: &[Segment]) -> Result<Option<Node>, PathError> {
    mutate(node, segments, Mutation::Delete)
}

/// Applies a mutation at the end of `segments`.
pub fn mutate(
    node: &mut Node,
    segments: &[Segment],
    mutation: Mutation,
) -> Result<Option<Node>, PathError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Err(PathError::ProtectedRoot {
            action: mutation.verb(),
        });
    };
    trace!(
        segment = %segment,
        remaining = rest.len(),
        kind = node.kind(),
        action = mutation.verb(),
        "mutate"
    );

    match segment {
        Segment::Root => mutate(node, rest, mutation),
        Segment::Key(name) => mutate_key(node, segment, name, rest, mutation),
        Segment::Index(index) => mutate_index(node, segment, *index, rest, mutation),
        Segment::Slice(slice) => mutate_slice(node, segment, slice, rest, mutation),
    }
}

fn mutate_key(
    node: &mut Node,
    segment: &Segment,
    name: &str,
    rest: &[Segment],
    mutation: Mutation,
) -> Result<Option<Node>, PathError> {
    let Node::Mapping(entries) = node else {
        return Err(type_mismatch(segment, node));
    };

    if rest.is_empty() {
        return Ok(match mutation {
            Mutation::Write(value) => match entries.get_mut(name) {
                Some(slot) => Some(std::mem::replace(slot, value)),
                None => {
                    entries.insert(name.to_string(), value.clone());
                    Some(value)
                }
            },
            Mutation::Delete => {
                let removed = entries.shift_remove(name);
                if removed.is_some() {
                    debug!(key = name, "deleted entry");
                }
                removed
            }
        });
    }

    let child = match &mutation {
        Mutation::Delete => match entries.get_mut(name) {
            Some(child) => child,
            None => return Ok(None),
        },
        Mutation::Write(_) => entries.entry(name.to_string()).or_insert_with(|| {
            debug!(key = name, "creating missing mapping");
            Node::mapping()
        }),
    };
    mutate(child, rest, mutation)
}

fn mutate_index(
    node: &mut Node,
    segment: &Segment,
    index: isize,
    rest: &[Segment],
    mutation: Mutation,
) -> Result<Option<Node>, PathError> {
    let kind = node.kind();
    match node {
        Node::Sequence(items) => {
            let pos = resolve_index(index, items.len(), kind)?;
            if !rest.is_empty() {
                return mutate(&mut items[pos], rest, mutation);
            }
            Ok(Some(match mutation {
                Mutation::Write(value) => std::mem::replace(&mut items[pos], value),
                Mutation::Delete => {
                    debug!(index = index, "deleted element");
                    items.remove(pos)
                }
            }))
        }
        Node::Mapping(entries) => {
            let len = entries.len();
            let pos = resolve_index(index, len, kind)?;
            if !rest.is_empty() {
                let (_, child) = entries
                    .get_index_mut(pos)
                    .ok_or_else(|| out_of_range(index, len, kind))?;
                return mutate(child, rest, mutation);
            }
            match mutation {
                Mutation::Write(value) => {
                    let (key, slot) = entries
                        .get_index_mut(pos)
                        .ok_or_else(|| out_of_range(index, len, kind))?;
                    let old = std::mem::replace(slot, value);
                    Ok(Some(single_entry(key.clone(), old)))
                }
                Mutation::Delete => {
                    let (key, old) = entries
                        .shift_remove_index(pos)
                        .ok_or_else(|| out_of_range(index, len, kind))?;
                    debug!(key = %key, "deleted entry");
                    Ok(Some(single_entry(key, old)))
                }
            }
        }
        Node::Scalar(_) => Err(type_mismatch(segment, node)),
    }
}

fn mutate_slice(
    node: &mut Node,
    segment: &Segment,
    slice: &Slice,
    rest: &[Segment],
    mutation: Mutation,
) -> Result<Option<Node>, PathError> {
    if !rest.is_empty() {
        return Err(branch_slice(segment, node));
    }
    match node {
        Node::Sequence(items) => match mutation {
            Mutation::Write(value) => assign_slice(items, segment, slice, value).map(Some),
            Mutation::Delete => {
                let positions = slice.indices(items.len());
                let removed: Vec<Node> = positions.iter().map(|&pos| items[pos].clone()).collect();
                let mut selected = vec![false; items.len()];
                for &pos in &positions {
                    selected[pos] = true;
                }
                let mut cursor = 0;
                items.retain(|_| {
                    let keep = !selected[cursor];
                    cursor += 1;
                    keep
                });
                debug!(count = removed.len(), "deleted elements");
                Ok(Some(Node::Sequence(removed)))
            }
        },
        Node::Mapping(entries) => match mutation {
            Mutation::Write(_) => Err(PathError::InvalidBulkAssignment {
                segment: segment.to_string(),
                message: "one value cannot be assigned to a range of keys".to_string(),
            }),
            Mutation::Delete => {
                let keys: Vec<String> = slice
                    .indices(entries.len())
                    .into_iter()
                    .filter_map(|pos| entries.get_index(pos).map(|(key, _)| key.clone()))
                    .collect();
                let removed: Mapping = keys
                    .iter()
                    .filter_map(|key| entries.shift_remove_entry(key))
                    .collect();
                debug!(count = removed.len(), "deleted entries");
                Ok(Some(Node::Mapping(removed)))
            }
        },
        Node::Scalar(_) => Err(type_mismatch(segment, node)),
    }
}

/// Slice assignment on a sequence.
///
/// A contiguous slice (step 1) is replaced by the value's elements, so the
/// sequence may grow or shrink. Any other step needs exactly one element per
/// selected position. Validation happens before anything is touched.
fn assign_slice(
    items: &mut Vec<Node>,
    segment: &Segment,
    slice: &Slice,
    value: Node,
) -> Result<Node, PathError> {
    let replacement = match value {
        Node::Sequence(replacement) => replacement,
        other => {
            return Err(PathError::InvalidBulkAssignment {
                segment: segment.to_string(),
                message: format!("expected a sequence, got a {}", other.kind()),
            })
        }
    };

    if slice.step == 1 {
        let (start, stop, _) = slice.bounds(items.len());
        let start = start as usize;
        let stop = (stop as usize).max(start);
        let old: Vec<Node> = items.splice(start..stop, replacement).collect();
        return Ok(Node::Sequence(old));
    }

    let positions = slice.indices(items.len());
    if positions.len() != replacement.len() {
        return Err(PathError::InvalidBulkAssignment {
            segment: segment.to_string(),
            message: format!(
                "cannot assign {} values to an extended slice of {}",
                replacement.len(),
                positions.len()
            ),
        });
    }
    let old = positions
        .iter()
        .zip(replacement)
        .map(|(&pos, new)| std::mem::replace(&mut items[pos], new))
        .collect();
    Ok(Node::Sequence(old))
}

/// Maps a possibly negative index onto `0..len`.
fn resolve_index(index: isize, len: usize, kind: &'static str) -> Result<usize, PathError> {
    let resolved = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if resolved >= 0 && (resolved as usize) < len {
        Ok(resolved as usize)
    } else {
        Err(out_of_range(index, len, kind))
    }
}

fn single_entry(key: String, value: Node) -> Node {
    let mut entries = Mapping::with_capacity(1);
    entries.insert(key, value);
    Node::Mapping(entries)
}

fn out_of_range(index: isize, len: usize, kind: &'static str) -> PathError {
    PathError::IndexOutOfRange { index, len, kind }
}

fn type_mismatch(segment: &Segment, node: &Node) -> PathError {
    PathError::TypeMismatch {
        segment: segment.to_string(),
        found: node.kind(),
    }
}

fn branch_slice(segment: &Segment, node: &Node) -> PathError {
    match node {
        Node::Scalar(_) => type_mismatch(segment, node),
        _ => PathError::AmbiguousBranch {
            segment: segment.to_string(),
        },
    }
}
