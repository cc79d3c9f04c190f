//! Diff records: one atomic difference finding per record.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::ValueKind;
use crate::path::Path;

/// Which side of a comparison a move marker is addressed to.
///
/// A detected move produces two records with the same `(from, to)` index
/// pair: one addressed at the element's index in the left array, one at its
/// index in the right array, so a renderer showing either side finds the
/// marker under that side's own index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveSide {
    Left,
    Right,
}

/// The discriminant of a [`DiffRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Changed,
    Moved,
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
            Self::Moved => "moved",
        };
        write!(f, "{name}")
    }
}

/// One atomic difference between two JSON documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffRecord {
    /// The key or index exists only on the right side.
    Added {
        path: Path,
        right_value: Value,
        right_kind: ValueKind,
    },
    /// The key or index exists only on the left side.
    Removed {
        path: Path,
        left_value: Value,
        left_kind: ValueKind,
    },
    /// The same key or index exists on both sides with a different value or
    /// a different kind.
    Changed {
        path: Path,
        left_value: Value,
        right_value: Value,
        left_kind: ValueKind,
        right_kind: ValueKind,
    },
    /// A key-matched array element whose relative position differs between
    /// the two sides. Emitted once per [`MoveSide`].
    Moved {
        path: Path,
        from_index: usize,
        to_index: usize,
        side: MoveSide,
    },
}

impl DiffRecord {
    /// The root-relative path this record is addressed to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Added { path, .. }
            | Self::Removed { path, .. }
            | Self::Changed { path, .. }
            | Self::Moved { path, .. } => path,
        }
    }

    /// The record's discriminant.
    pub fn kind(&self) -> DiffKind {
        match self {
            Self::Added { .. } => DiffKind::Added,
            Self::Removed { .. } => DiffKind::Removed,
            Self::Changed { .. } => DiffKind::Changed,
            Self::Moved { .. } => DiffKind::Moved,
        }
    }

    /// The same record re-addressed to a different path.
    pub fn with_path(mut self, new_path: Path) -> Self {
        match &mut self {
            Self::Added { path, .. }
            | Self::Removed { path, .. }
            | Self::Changed { path, .. }
            | Self::Moved { path, .. } => *path = new_path,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn changed_at(path: Path) -> DiffRecord {
        DiffRecord::Changed {
            path,
            left_value: json!(1),
            right_value: json!(2),
            left_kind: ValueKind::Number,
            right_kind: ValueKind::Number,
        }
    }

    #[test]
    fn kind_matches_variant() {
        let rec = changed_at(Path::root().child_key("a"));
        assert_eq!(rec.kind(), DiffKind::Changed);

        let moved = DiffRecord::Moved {
            path: Path::root().child_index(0),
            from_index: 0,
            to_index: 1,
            side: MoveSide::Left,
        };
        assert_eq!(moved.kind(), DiffKind::Moved);
    }

    #[test]
    fn kinds_sort_in_declaration_order() {
        // Callers sort (path, kind) tuples when comparing record sets, so
        // DiffKind must stay totally ordered.
        let mut kinds = vec![
            DiffKind::Moved,
            DiffKind::Added,
            DiffKind::Changed,
            DiffKind::Removed,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                DiffKind::Added,
                DiffKind::Removed,
                DiffKind::Changed,
                DiffKind::Moved,
            ]
        );
    }

    #[test]
    fn with_path_replaces_only_the_path() {
        let rec = changed_at(Path::root().child_key("a"));
        let moved = rec.clone().with_path(Path::root().child_key("b"));
        assert_eq!(moved.path().canonical(), "b");
        assert_eq!(moved.kind(), rec.kind());
    }

    #[test]
    fn serializes_with_a_type_tag() {
        let rec = DiffRecord::Added {
            path: Path::root().child_key("c"),
            right_value: json!(3),
            right_kind: ValueKind::Number,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "added");
        assert_eq!(json["path"], json!(["c"]));
        assert_eq!(json["right_value"], json!(3));
        assert_eq!(json["right_kind"], "number");
    }
}
