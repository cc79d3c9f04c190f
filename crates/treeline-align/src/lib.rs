//! Generic sequence alignment for the Treeline diff engine.
//!
//! One longest-common-subsequence primitive shared by every diff flavor:
//! characters and words in `treeline-text`'s scalar diff, and lines in its
//! line diff. The output is a forward stream of per-token [`AlignTag`]s;
//! callers walk the stream with a cursor per side to recover token values,
//! line numbers, or merged runs as they see fit.
//!
//! The alignment is O(m·n) in time and space and performs no size bounding
//! of its own. Callers are responsible for guarding input sizes before
//! invoking it.

use serde::{Deserialize, Serialize};

/// The edit classification of one aligned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignTag {
    /// The token is present on both sides; consumes one token from each.
    Equal,
    /// The token is present only on the right side (`b`).
    Add,
    /// The token is present only on the left side (`a`).
    Remove,
}

/// Align two token sequences, producing one tag per consumed token.
///
/// Walking the result in order while keeping a cursor per input
/// reconstructs both sequences: dropping `Add` tags yields `a`, dropping
/// `Remove` tags yields `b`.
///
/// Tie-breaking during backtrack is fixed: when both directions preserve
/// the LCS length, the token from `b` is consumed first (an `Add` tag is
/// emitted). Renderers rely on this for stable output across re-runs, so
/// any valid LCS is not good enough here.
pub fn align<T: PartialEq>(a: &[T], b: &[T]) -> Vec<AlignTag> {
    let m = a.len();
    let n = b.len();
    let width = n + 1;

    // LCS prefix-length table, flattened row-major. u16 is wide enough for
    // the size-guarded inputs the callers hand us.
    let mut table = vec![0u16; (m + 1) * width];
    for i in 1..=m {
        for j in 1..=n {
            table[i * width + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * width + (j - 1)] + 1
            } else {
                table[(i - 1) * width + j].max(table[i * width + (j - 1)])
            };
        }
    }

    // Backtrack from (m, n), then reverse into forward order.
    let mut tags = Vec::with_capacity(m + n);
    let mut i = m;
    let mut j = n;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            tags.push(AlignTag::Equal);
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i * width + (j - 1)] >= table[(i - 1) * width + j]) {
            tags.push(AlignTag::Add);
            j -= 1;
        } else {
            tags.push(AlignTag::Remove);
            i -= 1;
        }
    }
    tags.reverse();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Walk the tag stream, collecting the tokens each side consumed.
    fn reconstruct<T: Clone>(tags: &[AlignTag], a: &[T], b: &[T]) -> (Vec<T>, Vec<T>) {
        let mut from_a = Vec::new();
        let mut from_b = Vec::new();
        let mut ai = 0;
        let mut bi = 0;
        for tag in tags {
            match tag {
                AlignTag::Equal => {
                    from_a.push(a[ai].clone());
                    from_b.push(b[bi].clone());
                    ai += 1;
                    bi += 1;
                }
                AlignTag::Add => {
                    from_b.push(b[bi].clone());
                    bi += 1;
                }
                AlignTag::Remove => {
                    from_a.push(a[ai].clone());
                    ai += 1;
                }
            }
        }
        assert_eq!(ai, a.len(), "alignment must consume all of a");
        assert_eq!(bi, b.len(), "alignment must consume all of b");
        (from_a, from_b)
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn identical_sequences_are_all_equal() {
        let a = chars("abc");
        let tags = align(&a, &a);
        assert_eq!(tags, vec![AlignTag::Equal; 3]);
    }

    #[test]
    fn empty_left_is_all_adds() {
        let tags = align(&[], &chars("xy"));
        assert_eq!(tags, vec![AlignTag::Add, AlignTag::Add]);
    }

    #[test]
    fn empty_right_is_all_removes() {
        let tags = align(&chars("xy"), &[]);
        assert_eq!(tags, vec![AlignTag::Remove, AlignTag::Remove]);
    }

    #[test]
    fn both_empty_is_empty() {
        let tags = align::<char>(&[], &[]);
        assert!(tags.is_empty());
    }

    #[test]
    fn disjoint_sequences_remove_then_add() {
        // No common token anywhere, so every backtrack step ties. The
        // add-first backtrack consumes all of b first, which in forward
        // order puts the removals before the additions.
        let tags = align(&chars("ab"), &chars("xy"));
        assert_eq!(
            tags,
            vec![
                AlignTag::Remove,
                AlignTag::Remove,
                AlignTag::Add,
                AlignTag::Add,
            ]
        );
    }

    #[test]
    fn tie_break_prefers_consuming_from_b() {
        // "ab" vs "ba" has two equally long subsequences ("a" and "b");
        // the fixed tie-break must pick this exact script every time.
        let tags = align(&chars("ab"), &chars("ba"));
        assert_eq!(
            tags,
            vec![AlignTag::Remove, AlignTag::Equal, AlignTag::Add]
        );
    }

    #[test]
    fn single_insertion_in_the_middle() {
        let tags = align(&chars("ac"), &chars("abc"));
        assert_eq!(
            tags,
            vec![AlignTag::Equal, AlignTag::Add, AlignTag::Equal]
        );
    }

    #[test]
    fn single_removal_in_the_middle() {
        let tags = align(&chars("abc"), &chars("ac"));
        assert_eq!(
            tags,
            vec![AlignTag::Equal, AlignTag::Remove, AlignTag::Equal]
        );
    }

    #[test]
    fn alignment_is_deterministic() {
        let a = chars("kitten");
        let b = chars("sitting");
        let first = align(&a, &b);
        for _ in 0..10 {
            assert_eq!(align(&a, &b), first);
        }
    }

    proptest! {
        #[test]
        fn reconstruction_laws_hold(
            a in proptest::collection::vec(0u8..6, 0..40),
            b in proptest::collection::vec(0u8..6, 0..40),
        ) {
            let tags = align(&a, &b);
            let (from_a, from_b) = reconstruct(&tags, &a, &b);
            prop_assert_eq!(from_a, a);
            prop_assert_eq!(from_b, b);
        }

        #[test]
        fn equal_count_is_lcs_length_at_least_common_prefix(
            prefix in proptest::collection::vec(0u8..6, 0..20),
            a_tail in proptest::collection::vec(0u8..6, 0..20),
            b_tail in proptest::collection::vec(0u8..6, 0..20),
        ) {
            // A shared prefix is a common subsequence, so the LCS (and the
            // number of Equal tags) can never be shorter than it.
            let a: Vec<u8> = prefix.iter().chain(&a_tail).copied().collect();
            let b: Vec<u8> = prefix.iter().chain(&b_tail).copied().collect();
            let equals = align(&a, &b)
                .iter()
                .filter(|t| matches!(t, AlignTag::Equal))
                .count();
            prop_assert!(equals >= prefix.len());
        }
    }
}
