//! The abbreviation dictionary consulted by the masking rules.

use crate::error::{CoreError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Immutable set of literal abbreviations, trailing period included
/// (e.g. `"др."`, `"см."`).
///
/// Loaded once at startup and shared by every masking call for the life of
/// the process; it is never mutated afterwards, so a shared reference can be
/// used freely across threads. Entries iterate in sorted order so masking
/// output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationSet {
    entries: BTreeSet<String>,
}

impl AbbreviationSet {
    /// Load the set from a line-delimited UTF-8 file.
    ///
    /// Each line is trimmed; blank lines are ignored. A read failure is a
    /// fatal configuration error: the caller must not continue with an
    /// undefined abbreviation set.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CoreError::AbbreviationSource {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_lines(content.lines());
        debug!(count = set.len(), path = %path.display(), "loaded abbreviation list");
        Ok(set)
    }

    /// Build the set from already-loaded lines, trimming each entry and
    /// skipping blanks.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// The abbreviation list bundled with the crate, covering common Russian
    /// news-text abbreviations.
    pub fn bundled_ru() -> Self {
        Self::from_lines(include_str!("../data/abbreviations_ru.txt").lines())
    }

    /// Whether the exact literal entry is present.
    pub fn contains(&self, abbreviation: &str) -> bool {
        self.entries.contains(abbreviation)
    }

    /// Iterate entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<String> for AbbreviationSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
