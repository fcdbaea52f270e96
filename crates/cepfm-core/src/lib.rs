//! CepFM core library — UI-agnostic file-manager engine.
//!
//! `cepfm-core` provides the indexing and duplicate-detection engine for
//! the CepFM file manager: classification, scanning, sorting, duplicate
//! reporting, and file operations, all behind an abstract [`FileStore`]
//! capability. It is intentionally decoupled from any UI framework so
//! the CLI frontend (`cepfm-cli`) and a future graphical frontend can
//! share the same logic, and so every operation is testable against a
//! temporary directory.
//!
//! # Modules
//!
//! - [`fs`] — Entry model, classifier, scanner, duplicate detector, and file operations.
//! - [`store`] — The [`FileStore`] capability and its local implementation.
//! - [`nav`] — Sorting, filtering, listing assembly, scan sequencing, and the clipboard.
//! - [`config`] — TOML-based settings.
//! - [`event`] — Command and event types for UI ↔ engine communication.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};

pub use fs::category::{classify, Category};
pub use fs::duplicates::{find_duplicates, remove_match, wasted_bytes, DuplicateMatch};
pub use fs::entry::Entry;
pub use fs::ops::{
    delete_many, delete_permanent, ensure_app_dirs, move_to_trash, paste, rename,
    restore_from_trash, BatchOutcome, PasteAction,
};
pub use fs::scan::{list_flat, scan, CancelToken, ScanLimits, ScanMode};
pub use fs::{DOWNLOAD_DIR, TRASH_DIR};

pub use nav::clipboard::Clipboard;
pub use nav::filter::{
    filter_by_name, filter_hidden, fuzzy_filter, sort_entries, FuzzyMatch, SortDirection,
    SortField,
};
pub use nav::listing::{load_listing, ListingTarget, ScanSequencer, ScanTicket};

pub use config::settings::Config;
pub use store::{FileStore, LocalStore, StatInfo};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which causes Korean
/// Hangul characters to appear as individual Jamo. This helper
/// re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
