//! Size + extension duplicate detection.
//!
//! The fingerprint is deliberately cheap: two files match when they have
//! the same byte size and the same lowercased extension. Content is
//! never read, so distinct files can be misreported as duplicates — this
//! approximation is part of the detector's contract and is asserted as
//! such in the tests. Callers wanting certainty must compare content
//! themselves before deleting.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;
use crate::store::FileStore;

/// A file flagged as a duplicate, paired with the first file observed
/// with the same fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMatch {
    /// The later file, a candidate for deletion.
    pub duplicate: Entry,
    /// The first file seen with this fingerprint; kept.
    pub original: Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Fingerprint {
    size: u64,
    extension: String,
}

/// Scans the immediate children of `dir` for duplicate files.
///
/// Directories are skipped. Files are bucketed by `(size, extension)`;
/// within a bucket the first file in listing order is the original and
/// every later file is reported as a duplicate of it. An empty report
/// means no fingerprint collided — it is not an error.
///
/// # Errors
///
/// Fails when `dir` itself cannot be listed: a duplicate scan is
/// directory-scoped and has no meaningful partial result. A child that
/// vanishes between listing and stat is skipped.
pub async fn find_duplicates(
    store: &dyn FileStore,
    dir: &Path,
) -> CoreResult<Vec<DuplicateMatch>> {
    let names = store.list_directory(dir).await?;

    let mut originals: HashMap<Fingerprint, Entry> = HashMap::new();
    let mut matches = Vec::new();

    for name in names {
        let path = dir.join(&name);
        let stat = match store.stat(&path).await {
            Ok(stat) => stat,
            Err(CoreError::NotFound(_)) => continue,
            Err(e) => return Err(e),
        };
        if stat.is_directory {
            continue;
        }

        let entry = Entry::new(path, &stat);
        let key = Fingerprint {
            size: entry.size(),
            extension: entry.extension(),
        };
        match originals.get(&key) {
            Some(original) => matches.push(DuplicateMatch {
                duplicate: entry,
                original: original.clone(),
            }),
            None => {
                originals.insert(key, entry);
            }
        }
    }

    Ok(matches)
}

/// Returns the bytes that would be reclaimed by deleting every reported
/// duplicate.
pub fn wasted_bytes(matches: &[DuplicateMatch]) -> u64 {
    matches.iter().map(|m| m.duplicate.size()).sum()
}

/// Drops the report row whose duplicate is at `path`.
///
/// Used to update a report optimistically after a successful single
/// delete, instead of re-scanning the directory. Rows whose *original*
/// is at `path` are kept — the report is recomputed on the next scan
/// anyway.
pub fn remove_match(matches: Vec<DuplicateMatch>, path: &Path) -> Vec<DuplicateMatch> {
    matches
        .into_iter()
        .filter(|m| m.duplicate.path() != path)
        .collect()
}
