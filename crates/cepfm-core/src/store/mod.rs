//! The storage capability the engine depends on.
//!
//! Every scan and every file operation goes through the [`FileStore`]
//! trait, so the engine itself never touches a concrete file system.
//! [`LocalStore`] is the production implementation; tests drive the
//! same trait against temporary directories.

use std::path::Path;

use async_trait::async_trait;

use crate::error::CoreResult;

pub mod local;

pub use local::LocalStore;

/// Metadata for a single path, as observed at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatInfo {
    /// `true` if the path is a directory.
    pub is_directory: bool,
    /// Size in bytes. Meaningful for files only.
    pub size: u64,
}

/// Abstract file-store capability.
///
/// Implementations are expected to be cheap to share (`Send + Sync`) and
/// to perform all I/O asynchronously. The engine holds no locks across
/// calls; concurrent external mutation of the underlying store is
/// tolerated and surfaces as per-path [`CoreError::NotFound`] results.
///
/// [`CoreError::NotFound`]: crate::error::CoreError::NotFound
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Lists the names of a directory's immediate children.
    ///
    /// # Errors
    ///
    /// `NotFound`, `NotADirectory`, or `PermissionDenied` for the path
    /// itself; implementations map other failures to `Io`.
    async fn list_directory(&self, path: &Path) -> CoreResult<Vec<String>>;

    /// Returns metadata for the given path.
    ///
    /// # Errors
    ///
    /// `NotFound` if the path does not exist.
    async fn stat(&self, path: &Path) -> CoreResult<StatInfo>;

    /// Creates a directory. Idempotent: an already-existing directory is
    /// not an error, and missing parents are created.
    async fn make_directory(&self, path: &Path) -> CoreResult<()>;

    /// Moves a file or directory. Falls back to copy + delete when a
    /// plain rename is not possible (e.g. across devices).
    async fn move_entry(&self, from: &Path, to: &Path) -> CoreResult<()>;

    /// Copies a file, or a directory recursively.
    async fn copy_entry(&self, from: &Path, to: &Path) -> CoreResult<()>;

    /// Deletes a file, or a directory recursively.
    ///
    /// With `idempotent` set, deleting a path that does not exist is
    /// success rather than `NotFound`.
    async fn delete(&self, path: &Path, idempotent: bool) -> CoreResult<()>;
}
