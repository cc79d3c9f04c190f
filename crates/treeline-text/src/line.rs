//! Line diff: line-by-line comparison of two plain texts.
//!
//! Entries are emitted per line, never merged, because each line keeps its
//! 1-based source line number on the side(s) it came from. An `Equal` entry
//! consumes one line from each side, `Add` one from the right only,
//! `Remove` one from the left only.

use serde::{Deserialize, Serialize};
use tracing::debug;
use treeline_align::{align, AlignTag};

/// Texts with more lines than this on either side skip the O(lines²)
/// alignment; [`line_diff`] degrades to a full-replacement diff instead.
pub const MAX_DIFF_LINES: usize = 10_000;

/// One line of a line diff, with its source line number on each side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEntry {
    /// The edit classification of this line.
    pub tag: AlignTag,
    /// The line text, without its trailing newline.
    pub text: String,
    /// 1-based line number in the left text; `None` for added lines.
    pub left_line: Option<usize>,
    /// 1-based line number in the right text; `None` for removed lines.
    pub right_line: Option<usize>,
}

/// Aggregate counts over a [`LineDiff`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Lines present only on the right side.
    pub added: usize,
    /// Lines present only on the left side.
    pub removed: usize,
    /// Lines present on both sides.
    pub unchanged: usize,
}

/// The result of comparing two texts line by line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// Per-line entries in output order.
    pub entries: Vec<LineEntry>,
    /// Aggregate counts by entry tag.
    pub stats: DiffStats,
}

impl LineDiff {
    /// Returns `true` if no line was added or removed.
    pub fn is_unchanged(&self) -> bool {
        self.stats.added == 0 && self.stats.removed == 0
    }
}

/// Compare two texts line by line.
///
/// Texts are split on `\n`. Above [`MAX_DIFF_LINES`] lines on either side
/// the quadratic alignment is skipped and every left line is reported
/// removed, every right line added. The result is total and deterministic
/// for any pair of inputs.
pub fn line_diff(left: &str, right: &str) -> LineDiff {
    let a: Vec<&str> = left.split('\n').collect();
    let b: Vec<&str> = right.split('\n').collect();

    if left == right {
        return all_unchanged(&a);
    }

    if a.len() > MAX_DIFF_LINES || b.len() > MAX_DIFF_LINES {
        debug!(
            left_lines = a.len(),
            right_lines = b.len(),
            "texts too large for line alignment, degrading to full replacement"
        );
        return full_replacement(&a, &b);
    }

    let mut entries = Vec::new();
    let mut stats = DiffStats::default();
    let mut ai = 0;
    let mut bi = 0;

    for tag in align(&a, &b) {
        match tag {
            AlignTag::Equal => {
                entries.push(LineEntry {
                    tag,
                    text: a[ai].to_string(),
                    left_line: Some(ai + 1),
                    right_line: Some(bi + 1),
                });
                ai += 1;
                bi += 1;
                stats.unchanged += 1;
            }
            AlignTag::Add => {
                entries.push(LineEntry {
                    tag,
                    text: b[bi].to_string(),
                    left_line: None,
                    right_line: Some(bi + 1),
                });
                bi += 1;
                stats.added += 1;
            }
            AlignTag::Remove => {
                entries.push(LineEntry {
                    tag,
                    text: a[ai].to_string(),
                    left_line: Some(ai + 1),
                    right_line: None,
                });
                ai += 1;
                stats.removed += 1;
            }
        }
    }

    LineDiff { entries, stats }
}

fn all_unchanged(lines: &[&str]) -> LineDiff {
    let entries: Vec<LineEntry> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| LineEntry {
            tag: AlignTag::Equal,
            text: (*line).to_string(),
            left_line: Some(i + 1),
            right_line: Some(i + 1),
        })
        .collect();
    let stats = DiffStats {
        unchanged: entries.len(),
        ..DiffStats::default()
    };
    LineDiff { entries, stats }
}

fn full_replacement(a: &[&str], b: &[&str]) -> LineDiff {
    let mut entries = Vec::with_capacity(a.len() + b.len());
    for (i, line) in a.iter().enumerate() {
        entries.push(LineEntry {
            tag: AlignTag::Remove,
            text: (*line).to_string(),
            left_line: Some(i + 1),
            right_line: None,
        });
    }
    for (i, line) in b.iter().enumerate() {
        entries.push(LineEntry {
            tag: AlignTag::Add,
            text: (*line).to_string(),
            left_line: None,
            right_line: Some(i + 1),
        });
    }
    let stats = DiffStats {
        added: b.len(),
        removed: a.len(),
        unchanged: 0,
    };
    LineDiff { entries, stats }
}
