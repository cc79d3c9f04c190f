//! Array key detection: propose an identity field for matching elements.
//!
//! Given two arrays of objects, find a field whose value identifies each
//! element within its own array. A qualifying key lets the diff match
//! elements across the two arrays by identity instead of position, which is
//! what makes move detection possible.
//!
//! This is a heuristic. A repeated `id`, or an `id` holding a non-scalar
//! value, silently disqualifies that key; no diagnostic beyond a trace
//! event is produced.

use std::collections::HashSet;

use serde_json::Value;
use tracing::trace;

/// Identity-field candidates, in priority order.
pub const CANDIDATE_KEYS: [&str; 6] = ["id", "_id", "key", "name", "uuid", "slug"];

/// Propose an identity field for matching elements of `left` and `right`.
///
/// Returns the first key in [`CANDIDATE_KEYS`] order that is present and
/// unique (with a string or number value) independently within each array,
/// or `None` when the arrays are not mostly objects or no candidate
/// qualifies on both sides.
pub fn detect_match_key(left: &[Value], right: &[Value]) -> Option<&'static str> {
    let total = left.len() + right.len();
    let objects = left.iter().chain(right.iter()).filter(|v| v.is_object()).count();
    // At least half of the combined elements must be objects.
    if objects * 2 < total {
        return None;
    }

    let found = CANDIDATE_KEYS
        .iter()
        .copied()
        .find(|key| key_qualifies(left, key) && key_qualifies(right, key));
    if let Some(key) = found {
        trace!(key, "detected array match key");
    }
    found
}

/// A key qualifies within one array when every element having it holds a
/// distinct string or number value, and at least one element has it.
///
/// Every element with the key counts as a carrier, but only scalar values
/// enter the distinct set, so a key mixing scalar and non-scalar values is
/// disqualified rather than silently shrinking the comparison.
fn key_qualifies(items: &[Value], key: &str) -> bool {
    let mut carriers = 0usize;
    let mut distinct: HashSet<String> = HashSet::new();
    for item in items {
        let Some(value) = item.as_object().and_then(|obj| obj.get(key)) else {
            continue;
        };
        carriers += 1;
        if let Some(identity) = scalar_identity(value) {
            distinct.insert(identity);
        }
    }
    carriers > 0 && carriers == distinct.len()
}

/// The identity of a string or number value: its compact JSON text.
///
/// JSON text keeps `1` and `"1"` distinct while giving equal numbers equal
/// identities. Non-scalar values have no identity.
pub(crate) fn scalar_identity(value: &Value) -> Option<String> {
    match value {
        Value::String(_) | Value::Number(_) => Some(value.to_string()),
        _ => None,
    }
}
