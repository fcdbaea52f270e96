//! File operations: rename, trash, restore, delete, and paste.
//!
//! Every operation is a single [`FileStore`] transition; when it fails,
//! the source tree is assumed unchanged and nothing is retried. An
//! occupied destination is rejected with
//! [`CoreError::AlreadyExists`] before any I/O is issued, uniformly
//! across rename, trash, restore, and paste.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;
use crate::fs::{DOWNLOAD_DIR, TRASH_DIR};
use crate::store::FileStore;

/// What a paste should do with the staged entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteAction {
    /// Leave the source in place.
    Copy,
    /// Remove the source after the transfer.
    Move,
}

/// Result of a best-effort batch delete.
///
/// A failure on one path never halts the rest; each failure is recorded
/// here instead of being discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Paths that were deleted.
    pub succeeded: Vec<PathBuf>,
    /// Paths that could not be deleted, with the error message.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchOutcome {
    /// Returns `true` when every requested deletion succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Creates the conventional `<root>/.trash` and `<root>/Download`
/// directories if they are missing.
pub async fn ensure_app_dirs(store: &dyn FileStore, root: &Path) -> CoreResult<()> {
    store.make_directory(&root.join(TRASH_DIR)).await?;
    store.make_directory(&root.join(DOWNLOAD_DIR)).await?;
    Ok(())
}

/// Renames `path` to `new_name` within its parent directory.
///
/// The name is trimmed first and must be a plain file name: non-empty,
/// no path separators, not `.` or `..`. Renaming to the current name is
/// a no-op. Returns the new path.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::InvalidName`] if `new_name` is invalid.
/// - [`CoreError::AlreadyExists`] if the destination is occupied.
pub async fn rename(
    store: &dyn FileStore,
    path: &Path,
    new_name: &str,
) -> CoreResult<PathBuf> {
    let new_name = new_name.trim();
    if !is_valid_filename(new_name) {
        return Err(CoreError::InvalidName(new_name.to_string()));
    }

    store.stat(path).await?;

    let parent = path
        .parent()
        .ok_or_else(|| CoreError::InvalidName("no parent directory".to_string()))?;
    let new_path = parent.join(new_name);
    if new_path == path {
        return Ok(new_path);
    }
    if store.stat(&new_path).await.is_ok() {
        return Err(CoreError::AlreadyExists(new_path));
    }

    store.move_entry(path, &new_path).await?;
    Ok(new_path)
}

/// Soft delete: moves `entry` to `<root>/.trash/<name>`, creating the
/// trash directory if needed. Returns the path inside the trash.
///
/// # Errors
///
/// [`CoreError::AlreadyExists`] when the trash already holds an entry
/// of this name.
pub async fn move_to_trash(
    store: &dyn FileStore,
    root: &Path,
    entry: &Entry,
) -> CoreResult<PathBuf> {
    let trash_dir = root.join(TRASH_DIR);
    store.make_directory(&trash_dir).await?;

    let dest = trash_dir.join(entry.name());
    if store.stat(&dest).await.is_ok() {
        return Err(CoreError::AlreadyExists(dest));
    }

    store.move_entry(entry.path(), &dest).await?;
    Ok(dest)
}

/// Moves a trashed entry back to `<root>/<name>`.
///
/// Origin paths are not recorded when trashing, so restore always
/// targets the root. Returns the restored path.
pub async fn restore_from_trash(
    store: &dyn FileStore,
    root: &Path,
    entry: &Entry,
) -> CoreResult<PathBuf> {
    let dest = root.join(entry.name());
    if store.stat(&dest).await.is_ok() {
        return Err(CoreError::AlreadyExists(dest));
    }

    store.move_entry(entry.path(), &dest).await?;
    Ok(dest)
}

/// Permanently deletes `path`. Idempotent: an already-absent path is
/// success, so deleting from the trash view never errors on a race.
pub async fn delete_permanent(store: &dyn FileStore, path: &Path) -> CoreResult<()> {
    store.delete(path, true).await
}

/// Pastes a staged entry into `dest_dir` as `<dest_dir>/<name>`.
///
/// # Errors
///
/// - [`CoreError::SameLocation`] when the destination equals the
///   source path; rejected before any I/O.
/// - [`CoreError::AlreadyExists`] when the destination is occupied.
pub async fn paste(
    store: &dyn FileStore,
    entry: &Entry,
    action: PasteAction,
    dest_dir: &Path,
) -> CoreResult<PathBuf> {
    let dest = dest_dir.join(entry.name());
    if dest == entry.path() {
        return Err(CoreError::SameLocation(dest));
    }
    if store.stat(&dest).await.is_ok() {
        return Err(CoreError::AlreadyExists(dest));
    }

    match action {
        PasteAction::Copy => store.copy_entry(entry.path(), &dest).await?,
        PasteAction::Move => store.move_entry(entry.path(), &dest).await?,
    }
    Ok(dest)
}

/// Deletes each path independently, best-effort.
///
/// Failures are logged and collected; they never stop the remaining
/// deletions.
pub async fn delete_many(store: &dyn FileStore, paths: &[PathBuf]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for path in paths {
        match store.delete(path, true).await {
            Ok(()) => outcome.succeeded.push(path.clone()),
            Err(e) => {
                tracing::warn!("failed to delete {}: {e}", path.display());
                outcome.failed.push((path.clone(), e.to_string()));
            }
        }
    }

    outcome
}

fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}
