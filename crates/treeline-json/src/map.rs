//! Path-indexed lookup over a diff record list.
//!
//! A tree renderer queries the map once per visible node: an exact lookup
//! decides the node's own highlight, and a prefix query marks collapsed
//! ancestors that contain a change somewhere below.

use std::collections::HashMap;

use treeline_types::{DiffKind, DiffRecord, Path};

/// Canonical-path-keyed index over a list of [`DiffRecord`]s.
///
/// A path usually carries exactly one record. The degenerate exception is a
/// moved array element that also differs at exactly its own item path; the
/// map keeps every record per path in emission order rather than dropping
/// one, and [`DiffMap::diff_kind`] answers with the last one.
#[derive(Clone, Debug, Default)]
pub struct DiffMap {
    entries: HashMap<String, Vec<DiffRecord>>,
}

impl DiffMap {
    /// Index a record list by canonical path.
    pub fn build(records: &[DiffRecord]) -> Self {
        let mut entries: HashMap<String, Vec<DiffRecord>> = HashMap::new();
        for record in records {
            entries
                .entry(record.path().canonical())
                .or_default()
                .push(record.clone());
        }
        Self { entries }
    }

    /// Returns `true` if no record was indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct paths carrying at least one record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Every record addressed to exactly `path`, in emission order.
    pub fn records_at(&self, path: &Path) -> &[DiffRecord] {
        self.entries
            .get(&path.canonical())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The kind of the last record addressed to exactly `path`, or `None`
    /// if no record targets it. Descendant diffs do not count; use
    /// [`DiffMap::path_has_diff`] for that.
    pub fn diff_kind(&self, path: &Path) -> Option<DiffKind> {
        self.entries
            .get(&path.canonical())
            .and_then(|records| records.last())
            .map(DiffRecord::kind)
    }

    /// Returns `true` if `path` itself or any of its descendants carries a
    /// record. A descendant key extends the canonical path with `.` (object
    /// member) or `[` (array element). O(k) in the number of indexed paths.
    pub fn path_has_diff(&self, path: &Path) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let canonical = path.canonical();
        // Everything descends from the root.
        if canonical.is_empty() {
            return true;
        }
        if self.entries.contains_key(&canonical) {
            return true;
        }
        let member_prefix = format!("{canonical}.");
        let element_prefix = format!("{canonical}[");
        self.entries
            .keys()
            .any(|key| key.starts_with(&member_prefix) || key.starts_with(&element_prefix))
    }
}
