//! Root-relative node addresses and their canonical string form.
//!
//! A [`Path`] is an ordered list of object keys and array indices leading
//! from the document root to one node. The diff engine emits paths as
//! segment lists; the diff map keys on the canonical string. Both sides go
//! through [`Path::canonical`] so the two forms can never diverge.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// One step of a [`Path`]: an object key or an array index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSeg {
    /// An object member key.
    Key(String),
    /// A zero-based array index.
    Index(usize),
}

impl From<&str> for PathSeg {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSeg {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSeg {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A root-relative address of one node in a JSON document.
///
/// The empty path addresses the root itself; there is no leading root
/// marker. Canonical form joins keys with `.` and renders indices as `[i]`
/// with no preceding dot, e.g. `users[3].name`. Keys are rendered verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSeg>);

impl Path {
    /// The empty path addressing the document root.
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The ordered segments.
    pub fn segments(&self) -> &[PathSeg] {
        &self.0
    }

    /// Consume the path, yielding its segments.
    pub fn into_segments(self) -> Vec<PathSeg> {
        self.0
    }

    /// Append an object key in place.
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.0.push(PathSeg::Key(key.into()));
    }

    /// Append an array index in place.
    pub fn push_index(&mut self, index: usize) {
        self.0.push(PathSeg::Index(index));
    }

    /// A new path extending this one by an object key.
    pub fn child_key(&self, key: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push_key(key);
        child
    }

    /// A new path extending this one by an array index.
    pub fn child_index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }

    /// The canonical string form of this path.
    ///
    /// This is the single canonicalization function shared by record
    /// emission and map lookup. The root canonicalizes to the empty string.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        for seg in &self.0 {
            match seg {
                PathSeg::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                PathSeg::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }
        out
    }

    /// Parse a canonical path string back into segments.
    ///
    /// Inverse of [`Path::canonical`] for keys that contain no `.`, `[` or
    /// `]` characters. The empty string parses to the root path.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        let mut rest = s;
        // A key needs a '.' separator except at the very start.
        let mut expect_sep = false;

        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix('[') {
                let end = tail
                    .find(']')
                    .ok_or_else(|| PathError::UnclosedIndex(s.to_string()))?;
                let index = tail[..end]
                    .parse::<usize>()
                    .map_err(|_| PathError::InvalidIndex(tail[..end].to_string()))?;
                segments.push(PathSeg::Index(index));
                rest = &tail[end + 1..];
                expect_sep = true;
            } else {
                if expect_sep {
                    rest = rest
                        .strip_prefix('.')
                        .ok_or_else(|| PathError::MissingSeparator(s.to_string()))?;
                }
                let end = rest.find(['.', '[']).unwrap_or(rest.len());
                if end == 0 {
                    return Err(PathError::EmptyKey(s.to_string()));
                }
                segments.push(PathSeg::Key(rest[..end].to_string()));
                rest = &rest[end..];
                expect_sep = true;
            }
        }

        Ok(Self(segments))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl From<Vec<PathSeg>> for Path {
    fn from(segments: Vec<PathSeg>) -> Self {
        Self(segments)
    }
}

impl FromIterator<PathSeg> for Path {
    fn from_iter<I: IntoIterator<Item = PathSeg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
