//! Listing assembly and scan sequencing.
//!
//! [`load_listing`] is the engine's main read path: scan, then sort,
//! producing the rendering-ready sequence the UI asked for.
//! [`ScanSequencer`] orders concurrent scans so a slow, stale response
//! can be recognised and discarded instead of overwriting a fresher
//! view.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CoreResult;
use crate::fs::category::Category;
use crate::fs::entry::Entry;
use crate::fs::scan::{scan, CancelToken, ScanLimits, ScanMode};
use crate::nav::filter::{sort_entries, SortDirection, SortField};
use crate::store::FileStore;

/// What the UI wants listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingTarget {
    /// One directory's immediate children.
    Directory(PathBuf),
    /// All files of a category under the root.
    Category(Category),
}

/// Scans the target and returns its entries, sorted and ready to render.
///
/// Directories always sort before files; `show_hidden` only affects flat
/// listings (category walks never include hidden entries, and the trash
/// view always shows them).
#[allow(clippy::too_many_arguments)]
pub async fn load_listing(
    store: &dyn FileStore,
    root: &Path,
    target: &ListingTarget,
    field: SortField,
    direction: SortDirection,
    show_hidden: bool,
    limits: &ScanLimits,
    cancel: &CancelToken,
) -> CoreResult<Vec<Entry>> {
    let mode = match target {
        ListingTarget::Directory(dir) => ScanMode::Flat(dir.clone()),
        ListingTarget::Category(category) => ScanMode::Category(*category),
    };

    let entries = scan(store, root, &mode, show_hidden, limits, cancel).await?;
    Ok(sort_entries(&entries, field, direction))
}

/// Monotonic generation counter for in-flight scans.
///
/// Each scan takes a [`ScanTicket`] from [`begin`](Self::begin) before
/// it starts. When the scan completes, the caller checks
/// [`ScanTicket::is_current`]: if a newer scan began in the meantime the
/// result is stale and must be discarded, never rendered. This closes
/// the race where a slower response arrives after a fresher one.
#[derive(Debug, Default)]
pub struct ScanSequencer {
    issued: AtomicU64,
}

impl ScanSequencer {
    /// Creates a sequencer with no scans issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new scan generation, making all earlier tickets stale.
    pub fn begin(&self) -> ScanTicket<'_> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        ScanTicket {
            generation,
            sequencer: self,
        }
    }

    fn latest(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

/// A handle identifying one scan generation.
#[derive(Debug)]
pub struct ScanTicket<'a> {
    generation: u64,
    sequencer: &'a ScanSequencer,
}

impl ScanTicket<'_> {
    /// The generation number of this scan.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` while no newer scan has begun.
    pub fn is_current(&self) -> bool {
        self.sequencer.latest() == self.generation
    }
}
