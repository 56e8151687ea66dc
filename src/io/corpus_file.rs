//! Corpus source: parses a frequency-dictionary export into corpus entries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::index::CorpusEntry;
use crate::types::{KeyrankError, KeyrankResult};

/// A corpus file with one `rank word frequency` row per line,
/// whitespace-separated, ordered most frequent first.
pub struct CorpusFile {
    path: PathBuf,
}

impl CorpusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the file, preserving line order. Words are lowercased on load
    /// so index lookups run against pre-lowercased entries. Rows that do
    /// not parse are skipped with a warning; a file yielding no rows at all
    /// is [`KeyrankError::EmptyCorpus`].
    pub fn load_entries(&self) -> KeyrankResult<Vec<CorpusEntry>> {
        let text = fs::read_to_string(&self.path).map_err(|source| KeyrankError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_row(line) {
                Some(entry) => entries.push(entry),
                None => log::warn!(
                    "{}:{}: skipping malformed corpus row",
                    self.path.display(),
                    line_no + 1
                ),
            }
        }

        if entries.is_empty() {
            return Err(KeyrankError::EmptyCorpus);
        }
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_row(line: &str) -> Option<CorpusEntry> {
    let mut cols = line.split_whitespace();
    let rank = cols.next()?.parse().ok()?;
    let word = cols.next()?.to_lowercase();
    let frequency = cols.next()?.parse().ok()?;
    Some(CorpusEntry {
        rank,
        word,
        frequency,
    })
}
