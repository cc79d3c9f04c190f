//! Scalar diff: character/word-level highlighting for changed strings.
//!
//! Used by tree renderers to highlight in-place edits inside a `changed`
//! record whose values are both strings. Short strings are aligned per
//! character; longer ones per word (runs of non-whitespace or whitespace);
//! very long ones are not diffed at all.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use treeline_align::{align, AlignTag};

/// Strings longer than this (in characters, either side) are not diffed;
/// [`char_diff`] returns `None` and the caller shows the value unhighlighted.
pub const MAX_DIFF_LEN: usize = 5_000;

/// Strings longer than this (in characters, either side) are aligned at
/// word granularity instead of per character.
pub const WORD_GRANULARITY_LEN: usize = 200;

/// Maximal runs of non-whitespace or whitespace.
static WORD_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+|\s+").expect("static word tokenizer pattern"));

/// A merged run of text with a single edit classification.
///
/// Consecutive tokens with the same tag are concatenated, so a segment list
/// is as short as the underlying alignment allows. Dropping `Add` segments
/// and concatenating the rest reconstructs the left string; dropping
/// `Remove` segments reconstructs the right one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The edit classification of this run.
    pub tag: AlignTag,
    /// The concatenated token text.
    pub text: String,
}

/// Compute an in-place edit highlight between two strings.
///
/// Returns `None` when either side exceeds [`MAX_DIFF_LEN`] characters,
/// which callers must treat as "show unhighlighted", not as an empty diff.
/// Identical strings yield a single `Equal` segment.
pub fn char_diff(left: &str, right: &str) -> Option<Vec<Segment>> {
    if left == right {
        return Some(vec![Segment {
            tag: AlignTag::Equal,
            text: left.to_string(),
        }]);
    }

    let left_len = left.chars().count();
    let right_len = right.chars().count();
    if left_len > MAX_DIFF_LEN || right_len > MAX_DIFF_LEN {
        debug!(left_len, right_len, "strings too large for scalar diff");
        return None;
    }

    let segments = if left_len > WORD_GRANULARITY_LEN || right_len > WORD_GRANULARITY_LEN {
        let a: Vec<&str> = tokenize(left);
        let b: Vec<&str> = tokenize(right);
        merge_tokens(&align(&a, &b), &a, &b, |run, token| run.push_str(token))
    } else {
        let a: Vec<char> = left.chars().collect();
        let b: Vec<char> = right.chars().collect();
        merge_tokens(&align(&a, &b), &a, &b, |run, token| run.push(*token))
    };

    Some(segments)
}

fn tokenize(s: &str) -> Vec<&str> {
    WORD_TOKENS.find_iter(s).map(|m| m.as_str()).collect()
}

/// Walk a tag stream with one cursor per side, concatenating consecutive
/// same-tag tokens into merged segments.
fn merge_tokens<T>(
    tags: &[AlignTag],
    a: &[T],
    b: &[T],
    append: impl Fn(&mut String, &T),
) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut ai = 0;
    let mut bi = 0;

    for &tag in tags {
        // Equal text is identical on both sides; take it from whichever
        // cursor the tag advances.
        let token = match tag {
            AlignTag::Equal => {
                let token = &a[ai];
                ai += 1;
                bi += 1;
                token
            }
            AlignTag::Add => {
                let token = &b[bi];
                bi += 1;
                token
            }
            AlignTag::Remove => {
                let token = &a[ai];
                ai += 1;
                token
            }
        };

        match segments.last_mut() {
            Some(last) if last.tag == tag => append(&mut last.text, token),
            _ => {
                let mut text = String::new();
                append(&mut text, token);
                segments.push(Segment { tag, text });
            }
        }
    }

    segments
}
