//! Event system for communication between UI and engine.
//!
//! The UI translates user input into [`Command`]s, which the engine
//! processes and answers with [`Event`]s. This decoupling allows any
//! frontend to drive the same engine.

use std::path::PathBuf;

use crate::fs::category::Category;
use crate::fs::duplicates::DuplicateMatch;
use crate::fs::entry::Entry;
use crate::nav::filter::{SortDirection, SortField};

/// An action the UI requests the engine to perform.
///
/// Commands flow **UI → engine**. The engine never creates commands
/// itself.
#[derive(Debug, Clone)]
pub enum Command {
    /// List the directory at the given path.
    Navigate(PathBuf),
    /// List all files of a category under the root.
    OpenCategory(Category),
    /// Re-scan the current listing target.
    Refresh,
    /// Change the sort field and direction.
    SetSort(SortField, SortDirection),
    /// Toggle visibility of hidden (dot-prefixed) entries.
    ToggleHidden,
    /// Rename a file or directory.
    Rename(PathBuf, String),
    /// Move an entry into the trash.
    MoveToTrash(PathBuf),
    /// Move a trashed entry back out of the trash.
    RestoreFromTrash(PathBuf),
    /// Permanently delete the listed paths (after user confirmation).
    DeleteForever(Vec<PathBuf>),
    /// Stage an entry for a later move.
    Cut(PathBuf),
    /// Stage an entry for a later copy.
    Copy(PathBuf),
    /// Apply the staged cut/copy to the current directory.
    Paste,
    /// Scan a directory for size+extension duplicates.
    ScanDuplicates(PathBuf),
    /// Abort the scan in flight, if any.
    CancelScan,
}

/// A notification the engine sends back to the UI.
///
/// Events flow **engine → UI**. The UI uses these to update its display
/// state.
#[derive(Debug, Clone)]
pub enum Event {
    /// A listing finished and is current (its generation was the newest
    /// when it completed).
    ListingLoaded {
        /// Generation the scan was issued under.
        generation: u64,
        /// The sorted entries, ready to render.
        entries: Vec<Entry>,
    },
    /// A listing finished but a newer scan had already begun; its result
    /// was dropped, not rendered.
    ListingDiscarded {
        /// Generation of the stale scan.
        generation: u64,
    },
    /// A duplicate scan completed. An empty report means the directory
    /// holds no fingerprint collisions — it is not an error.
    DuplicateReport {
        /// The directory that was scanned.
        dir: PathBuf,
        /// Each later file paired with the bucket's first file.
        matches: Vec<DuplicateMatch>,
    },
    /// A file operation completed successfully.
    OperationComplete {
        /// Human-readable description of the operation.
        operation: String,
    },
    /// A file operation failed.
    OperationFailed {
        /// Human-readable description of the operation.
        operation: String,
        /// The error message.
        error: String,
    },
}
