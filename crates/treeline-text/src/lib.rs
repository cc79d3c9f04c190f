//! Text diffs for the Treeline diff engine.
//!
//! Two independent entry points over the shared alignment primitive:
//!
//! - [`char_diff`] — character- or word-level highlighting for a changed
//!   string value, used inline by tree renderers
//! - [`line_diff`] — line-by-line comparison of two plain texts with
//!   per-side line numbers and aggregate stats
//!
//! # Key Types
//!
//! - [`Segment`] — A merged run of equal/added/removed text
//! - [`LineDiff`] / [`LineEntry`] / [`DiffStats`] — Line diff output

pub mod line;
pub mod scalar;

pub use line::{line_diff, DiffStats, LineDiff, LineEntry, MAX_DIFF_LINES};
pub use scalar::{char_diff, Segment, MAX_DIFF_LEN, WORD_GRANULARITY_LEN};
