//! File-system model and operations for CepFM.
//!
//! This module provides the entry model ([`entry::Entry`]), extension
//! classification ([`category::classify`]), directory and category
//! scanning ([`scan::scan`]), duplicate detection
//! ([`duplicates::find_duplicates`]), and the file-operation executor
//! ([`ops`]).

pub mod category;
pub mod duplicates;
pub mod entry;
pub mod ops;
pub mod scan;

pub use category::{classify, Category};
pub use duplicates::{find_duplicates, remove_match, wasted_bytes, DuplicateMatch};
pub use entry::Entry;
pub use ops::{BatchOutcome, PasteAction};
pub use scan::{CancelToken, ScanLimits, ScanMode};

/// Name of the soft-delete directory under the scan root.
pub const TRASH_DIR: &str = ".trash";

/// Name of the downloads directory under the scan root.
pub const DOWNLOAD_DIR: &str = "Download";
