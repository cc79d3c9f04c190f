//! Foundation types for the Treeline diff engine.
//!
//! This crate provides the path, classification, and record types shared by
//! every other Treeline crate. The diff engines in `treeline-json` and
//! `treeline-text` produce these types; renderers consume them.
//!
//! # Key Types
//!
//! - [`Path`] / [`PathSeg`] — Root-relative address of a node inside a JSON
//!   document, with a single canonical string form
//! - [`ValueKind`] — Runtime classification of a `serde_json::Value`
//! - [`DiffRecord`] — One atomic difference finding (added/removed/changed/moved)
//! - [`DiffKind`] / [`MoveSide`] — Record discriminants

pub mod error;
pub mod kind;
pub mod path;
pub mod record;

pub use error::PathError;
pub use kind::ValueKind;
pub use path::{Path, PathSeg};
pub use record::{DiffKind, DiffRecord, MoveSide};
