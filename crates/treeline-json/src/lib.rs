//! Structural JSON diff for the Treeline diff engine.
//!
//! Compares two parsed JSON documents and produces a flat list of
//! path-addressed [`DiffRecord`]s. Arrays of keyed objects are matched by a
//! heuristically detected identity field so reordered elements show up as
//! moves instead of add/remove pairs. A [`DiffMap`] indexes the record list
//! for O(1) per-node queries by a tree renderer.
//!
//! # Key Types
//!
//! - [`diff_values`] / [`diff_values_with_key`] — Entry points
//! - [`detect_match_key`] — Array identity-field heuristic
//! - [`DiffMap`] — Canonical-path-keyed lookup over a record list

pub mod diff;
pub mod key_detect;
pub mod map;

pub use diff::{diff_values, diff_values_with_key, MAX_KEYED_ARRAY_LEN};
pub use key_detect::{detect_match_key, CANDIDATE_KEYS};
pub use map::DiffMap;

pub use treeline_types::{DiffKind, DiffRecord, MoveSide, Path, PathSeg, ValueKind};
