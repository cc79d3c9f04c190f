//! Recursive structural comparison of two JSON values.
//!
//! Values of different kinds produce one `changed` record and no recursion.
//! Objects are walked over the union of their keys. Arrays are compared
//! either by position or, when an identity field is available, by key —
//! the latter reports reordered elements as moves.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;
use treeline_types::{DiffRecord, MoveSide, Path, PathSeg, ValueKind};

use crate::key_detect::{detect_match_key, scalar_identity};

/// Arrays longer than this are always compared by position; key detection
/// and move tracking are skipped.
pub const MAX_KEYED_ARRAY_LEN: usize = 10_000;

/// Compare two JSON values, producing a flat list of path-addressed records.
///
/// Total for any pair of well-formed values: never panics, never errors.
/// Identical inputs produce an empty list.
pub fn diff_values(left: &Value, right: &Value) -> Vec<DiffRecord> {
    diff_values_with_key(left, right, None)
}

/// Compare two JSON values with an optional forced array match key.
///
/// A forced key bypasses [`detect_match_key`] for every array comparison in
/// the walk; the [`MAX_KEYED_ARRAY_LEN`] guard still applies. Elements that
/// do not carry the key with a string or number value are excluded from the
/// comparison, and with a forced key the per-side uniqueness check never
/// runs: if two elements on one side share a key value, the later element
/// wins deterministically.
pub fn diff_values_with_key(
    left: &Value,
    right: &Value,
    match_key: Option<&str>,
) -> Vec<DiffRecord> {
    let mut records = Vec::new();
    diff_at(left, right, &Path::root(), match_key, &mut records);
    records
}

fn diff_at(
    left: &Value,
    right: &Value,
    path: &Path,
    match_key: Option<&str>,
    out: &mut Vec<DiffRecord>,
) {
    let left_kind = ValueKind::of(left);
    let right_kind = ValueKind::of(right);

    // A kind mismatch is one change; the subtrees are not comparable.
    if left_kind != right_kind {
        out.push(changed(path, left, right));
        return;
    }

    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            // Union of keys: left keys first, then keys only on the right.
            for (key, left_child) in l {
                let child = path.child_key(key.clone());
                match r.get(key) {
                    Some(right_child) => {
                        diff_at(left_child, right_child, &child, match_key, out);
                    }
                    None => out.push(removed(child, left_child)),
                }
            }
            for (key, right_child) in r {
                if !l.contains_key(key) {
                    out.push(added(path.child_key(key.clone()), right_child));
                }
            }
        }
        (Value::Array(l), Value::Array(r)) => {
            diff_arrays(l, r, path, match_key, out);
        }
        _ => {
            if left != right {
                out.push(changed(path, left, right));
            }
        }
    }
}

fn diff_arrays(
    left: &[Value],
    right: &[Value],
    path: &Path,
    match_key: Option<&str>,
    out: &mut Vec<DiffRecord>,
) {
    if left.len() > MAX_KEYED_ARRAY_LEN || right.len() > MAX_KEYED_ARRAY_LEN {
        debug!(
            left_len = left.len(),
            right_len = right.len(),
            "array too large for keyed comparison, falling back to positional"
        );
        return diff_arrays_by_index(left, right, path, match_key, out);
    }

    let key = match match_key {
        Some(forced) => Some(forced),
        None => detect_match_key(left, right),
    };
    match key {
        Some(key) => diff_arrays_by_key(left, right, key, path, match_key, out),
        None => diff_arrays_by_index(left, right, path, match_key, out),
    }
}

fn diff_arrays_by_index(
    left: &[Value],
    right: &[Value],
    path: &Path,
    match_key: Option<&str>,
    out: &mut Vec<DiffRecord>,
) {
    let len = left.len().max(right.len());
    for i in 0..len {
        let child = path.child_index(i);
        match (left.get(i), right.get(i)) {
            (Some(l), Some(r)) => diff_at(l, r, &child, match_key, out),
            (Some(l), None) => out.push(removed(child, l)),
            (None, Some(r)) => out.push(added(child, r)),
            (None, None) => {}
        }
    }
}

fn diff_arrays_by_key(
    left: &[Value],
    right: &[Value],
    key: &str,
    path: &Path,
    match_key: Option<&str>,
    out: &mut Vec<DiffRecord>,
) {
    let left_by_key = index_by_key(left, key);
    let right_by_key = index_by_key(right, key);

    let skipped = left.len() + right.len() - left_by_key.len() - right_by_key.len();
    if skipped > 0 {
        // Elements without the key are invisible to a keyed comparison:
        // neither matched, added, nor removed.
        debug!(key, skipped, "elements without match key excluded from comparison");
    }

    // Left pass in array order: removals, moves, and matched-pair content.
    for (left_index, item) in left.iter().enumerate() {
        let Some(identity) = element_identity(item, key) else {
            continue;
        };
        // With duplicate key values only the winning (last) occurrence is
        // compared; earlier ones are ignored.
        if left_by_key.get(&identity).map(|entry| entry.0) != Some(left_index) {
            continue;
        }

        let Some(&(right_index, right_item)) = right_by_key.get(&identity) else {
            out.push(removed(path.child_index(left_index), item));
            continue;
        };

        let is_move = left_index != right_index;
        if is_move {
            out.push(DiffRecord::Moved {
                path: path.child_index(left_index),
                from_index: left_index,
                to_index: right_index,
                side: MoveSide::Left,
            });
            out.push(DiffRecord::Moved {
                path: path.child_index(right_index),
                from_index: left_index,
                to_index: right_index,
                side: MoveSide::Right,
            });
        }

        // Content recursion anchors at the left index; for a moved pair the
        // records are duplicated under the right index so a renderer of
        // either side finds them under its own numbering.
        let anchor = path.child_index(left_index);
        let start = out.len();
        diff_at(item, right_item, &anchor, match_key, out);
        if is_move {
            let produced: Vec<DiffRecord> = out[start..].to_vec();
            for record in produced {
                out.push(reindexed(record, path.len(), right_index));
            }
        }
    }

    // Right pass in array order: additions.
    for (right_index, item) in right.iter().enumerate() {
        let Some(identity) = element_identity(item, key) else {
            continue;
        };
        if right_by_key.get(&identity).map(|entry| entry.0) != Some(right_index) {
            continue;
        }
        if !left_by_key.contains_key(&identity) {
            out.push(added(path.child_index(right_index), item));
        }
    }
}

/// Index elements by the identity under `key`. Later occurrences of a
/// duplicated identity overwrite earlier ones.
fn index_by_key<'a>(items: &'a [Value], key: &str) -> HashMap<String, (usize, &'a Value)> {
    let mut map = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        if let Some(identity) = element_identity(item, key) {
            map.insert(identity, (index, item));
        }
    }
    map
}

fn element_identity(item: &Value, key: &str) -> Option<String> {
    item.as_object()
        .and_then(|obj| obj.get(key))
        .and_then(scalar_identity)
}

/// Re-address a record produced under a left-index anchor to the matched
/// element's right index, preserving the relative sub-path.
fn reindexed(record: DiffRecord, depth: usize, right_index: usize) -> DiffRecord {
    let mut segments = record.path().segments().to_vec();
    if let Some(segment) = segments.get_mut(depth) {
        *segment = PathSeg::Index(right_index);
    }
    record.with_path(Path::from(segments))
}

fn added(path: Path, value: &Value) -> DiffRecord {
    DiffRecord::Added {
        path,
        right_kind: ValueKind::of(value),
        right_value: value.clone(),
    }
}

fn removed(path: Path, value: &Value) -> DiffRecord {
    DiffRecord::Removed {
        path,
        left_kind: ValueKind::of(value),
        left_value: value.clone(),
    }
}

fn changed(path: &Path, left: &Value, right: &Value) -> DiffRecord {
    DiffRecord::Changed {
        path: path.clone(),
        left_kind: ValueKind::of(left),
        right_kind: ValueKind::of(right),
        left_value: left.clone(),
        right_value: right.clone(),
    }
}
