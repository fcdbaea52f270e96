//! Directory and category scanning over a [`FileStore`].
//!
//! Two traversal modes: a flat listing of one directory's immediate
//! children, and a whole-tree category search. The category walk uses an
//! explicit worklist rather than recursion so cancellation and result
//! caps can be checked between directories without unwinding a call
//! stack.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::fs::category::{classify, Category};
use crate::fs::entry::Entry;
use crate::fs::{DOWNLOAD_DIR, TRASH_DIR};
use crate::store::FileStore;

/// What a scan should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Immediate children of the given directory.
    Flat(PathBuf),
    /// All files of the given category anywhere under the root.
    Category(Category),
}

/// Caps applied to a category walk, checked between directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    /// Directories deeper than this are not descended into.
    pub max_depth: usize,
    /// The scan stops collecting once this many entries matched.
    pub max_results: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_depth: 20,
            max_results: 10_000,
        }
    }
}

/// Cooperative cancellation flag shared between a scan and its caller.
///
/// Cloning produces a handle to the same flag. A cancelled scan stops
/// issuing I/O at the next directory boundary and returns
/// [`CoreError::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Irreversible for this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Scans the store according to `mode` and returns the matching entries,
/// unsorted.
///
/// - `Flat(dir)` lists `dir`'s immediate children, excluding hidden
///   entries unless `show_hidden` is set.
/// - `Category(Trash)` / `Category(Download)` lazily create
///   `<root>/.trash` / `<root>/Download` and list them flat (the trash
///   listing always shows hidden names and is never recursive).
/// - Any other category walks the whole tree under `root`.
///
/// # Errors
///
/// Only a failure to list the scan's top-level directory propagates;
/// unreadable subtrees and entries that vanish mid-scan are skipped.
/// A cancelled scan fails with [`CoreError::Cancelled`].
pub async fn scan(
    store: &dyn FileStore,
    root: &Path,
    mode: &ScanMode,
    show_hidden: bool,
    limits: &ScanLimits,
    cancel: &CancelToken,
) -> CoreResult<Vec<Entry>> {
    match mode {
        ScanMode::Flat(dir) => list_flat(store, dir, show_hidden).await,
        ScanMode::Category(Category::Trash) => {
            let trash = root.join(TRASH_DIR);
            store.make_directory(&trash).await?;
            list_flat(store, &trash, true).await
        }
        ScanMode::Category(Category::Download) => {
            let download = root.join(DOWNLOAD_DIR);
            store.make_directory(&download).await?;
            list_flat(store, &download, show_hidden).await
        }
        ScanMode::Category(category) => {
            scan_category(store, root, *category, limits, cancel).await
        }
    }
}

/// Lists the immediate children of `dir` as [`Entry`] values.
///
/// Hidden entries (leading `.`) are excluded unless `show_hidden` is
/// set. A child whose stat fails with `NotFound` raced a concurrent
/// delete and is skipped; other per-child stat failures are logged and
/// skipped as well.
///
/// # Errors
///
/// Fails when `dir` itself cannot be listed.
pub async fn list_flat(
    store: &dyn FileStore,
    dir: &Path,
    show_hidden: bool,
) -> CoreResult<Vec<Entry>> {
    let names = store.list_directory(dir).await?;

    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        let path = dir.join(&name);
        match store.stat(&path).await {
            Ok(stat) => entries.push(Entry::new(path, &stat)),
            Err(CoreError::NotFound(_)) => continue,
            Err(e) => {
                tracing::warn!("skipping {}: {e}", path.display());
            }
        }
    }

    Ok(entries)
}

async fn scan_category(
    store: &dyn FileStore,
    root: &Path,
    category: Category,
    limits: &ScanLimits,
    cancel: &CancelToken,
) -> CoreResult<Vec<Entry>> {
    let mut results = Vec::new();
    // Depth-first worklist; directories are pushed in reverse so siblings
    // are visited in listing order.
    let mut worklist: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];
    let mut at_root = true;

    while let Some((dir, depth)) = worklist.pop() {
        if cancel.is_cancelled() {
            return Err(CoreError::Cancelled);
        }
        if results.len() >= limits.max_results {
            tracing::warn!(
                "category scan of {} truncated at {} results",
                root.display(),
                limits.max_results
            );
            break;
        }

        let names = match store.list_directory(&dir).await {
            Ok(names) => names,
            Err(e) if at_root => return Err(e),
            Err(e) => {
                tracing::warn!("skipping unreadable subtree {}: {e}", dir.display());
                continue;
            }
        };
        at_root = false;

        let mut subdirs = Vec::new();
        for name in names {
            // Hidden entries are never part of a content-category scan,
            // including the trash subtree.
            if name.starts_with('.') {
                continue;
            }
            let path = dir.join(&name);
            let stat = match store.stat(&path).await {
                Ok(stat) => stat,
                // Raced with a concurrent delete: treat as absent.
                Err(CoreError::NotFound(_)) => continue,
                Err(e) => {
                    tracing::warn!("skipping {}: {e}", path.display());
                    continue;
                }
            };

            if stat.is_directory {
                if depth < limits.max_depth {
                    subdirs.push((path, depth + 1));
                }
            } else if classify(&name) == category {
                results.push(Entry::new(path, &stat));
                if results.len() >= limits.max_results {
                    break;
                }
            }
        }

        for sub in subdirs.into_iter().rev() {
            worklist.push(sub);
        }
    }

    Ok(results)
}
