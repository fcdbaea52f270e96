//! Sorting and filtering for file entries.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::fs::entry::Entry;

/// The field by which entries are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort alphabetically by name (case-insensitive).
    Name,
    /// Sort by file size in bytes.
    Size,
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest / A–Z first.
    Ascending,
    /// Largest / Z–A first.
    Descending,
}

/// Sorts a list of file entries by the given field and direction.
///
/// Directories always precede files, regardless of field and direction;
/// the comparator only orders entries within the directory and file
/// partitions. The sort is stable, so entries equal under the comparator
/// keep their scan order, and sorting an already-sorted list changes
/// nothing. Returns a **new** `Vec<Entry>` — the input slice is never
/// mutated.
pub fn sort_entries(
    entries: &[Entry],
    field: SortField,
    direction: SortDirection,
) -> Vec<Entry> {
    let mut sorted: Vec<Entry> = entries.to_vec();

    sorted.sort_by(|a, b| {
        let dir_cmp = b.is_dir().cmp(&a.is_dir());
        if dir_cmp != std::cmp::Ordering::Equal {
            return dir_cmp;
        }

        let ord = match field {
            SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortField::Size => a.size().cmp(&b.size()),
        };

        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    sorted
}

/// Filters entries whose name contains `query`, case-insensitively.
///
/// An empty query matches everything. Returns a new `Vec` — the input
/// is never mutated.
pub fn filter_by_name(entries: &[Entry], query: &str) -> Vec<Entry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|e| e.name().to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Filters out hidden entries when `show_hidden` is `false`.
pub fn filter_hidden(entries: &[Entry], show_hidden: bool) -> Vec<Entry> {
    if show_hidden {
        return entries.to_vec();
    }
    entries.iter().filter(|e| !e.is_hidden()).cloned().collect()
}

/// A file entry paired with its fuzzy match score.
#[derive(Debug, Clone)]
pub struct FuzzyMatch {
    entry: Entry,
    score: i64,
}

impl FuzzyMatch {
    /// The matching file entry.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Match score — higher values indicate a better match.
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Performs fuzzy matching of `query` against each entry's file name.
///
/// Returns a `Vec<FuzzyMatch>` sorted by score (highest first).
/// When `query` is empty every entry is returned with a score of `0`.
pub fn fuzzy_filter(entries: &[Entry], query: &str) -> Vec<FuzzyMatch> {
    if query.is_empty() {
        return entries
            .iter()
            .map(|e| FuzzyMatch {
                entry: e.clone(),
                score: 0,
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default();

    let mut matches: Vec<FuzzyMatch> = entries
        .iter()
        .filter_map(|e| {
            matcher.fuzzy_match(e.name(), query).map(|score| FuzzyMatch {
                entry: e.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
