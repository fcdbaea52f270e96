//! Local file system implementation of [`FileStore`].

use std::path::Path;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::store::{FileStore, StatInfo};

/// Maximum recursion depth for recursive copy, to stop symlink loops.
const MAX_COPY_DEPTH: usize = 64;

/// [`FileStore`] backed by the local file system.
///
/// Cheap metadata calls use `tokio::fs` directly; recursive copy and
/// delete run on the blocking thread pool so large trees never stall
/// the async executor. Directory listings are returned in lexicographic
/// name order so scans are deterministic across platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    /// Creates a new local store.
    pub fn new() -> Self {
        Self
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> CoreError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        _ => CoreError::Io(e),
    }
}

fn join_error(e: tokio::task::JoinError) -> CoreError {
    CoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

#[async_trait]
impl FileStore for LocalStore {
    async fn list_directory(&self, path: &Path) -> CoreResult<Vec<String>> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| map_io_error(path, e))?;
        if !meta.is_dir() {
            return Err(CoreError::NotADirectory(path.to_path_buf()));
        }

        let mut read_dir = tokio::fs::read_dir(path)
            .await
            .map_err(|e| map_io_error(path, e))?;

        let mut names = Vec::new();
        while let Some(dir_entry) = read_dir.next_entry().await.map_err(CoreError::Io)? {
            names.push(dir_entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    async fn stat(&self, path: &Path) -> CoreResult<StatInfo> {
        let meta = tokio::fs::symlink_metadata(path)
            .await
            .map_err(|e| map_io_error(path, e))?;
        Ok(StatInfo {
            is_directory: meta.is_dir(),
            size: meta.len(),
        })
    }

    async fn make_directory(&self, path: &Path) -> CoreResult<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn move_entry(&self, from: &Path, to: &Path) -> CoreResult<()> {
        if tokio::fs::symlink_metadata(from).await.is_err() {
            return Err(CoreError::NotFound(from.to_path_buf()));
        }

        match tokio::fs::rename(from, to).await {
            Ok(()) => Ok(()),
            Err(_) => {
                // Cross-device move: copy, then delete the source.
                self.copy_entry(from, to).await?;
                self.delete(from, false).await
            }
        }
    }

    async fn copy_entry(&self, from: &Path, to: &Path) -> CoreResult<()> {
        let from = from.to_path_buf();
        let to = to.to_path_buf();
        tokio::task::spawn_blocking(move || copy_blocking(&from, &to))
            .await
            .map_err(join_error)?
    }

    async fn delete(&self, path: &Path, idempotent: bool) -> CoreResult<()> {
        let target = path.to_path_buf();
        let result = tokio::task::spawn_blocking(move || delete_blocking(&target))
            .await
            .map_err(join_error)?;

        match result {
            Err(CoreError::NotFound(_)) if idempotent => Ok(()),
            other => other,
        }
    }
}

fn copy_blocking(src: &Path, dest: &Path) -> CoreResult<()> {
    let meta = std::fs::symlink_metadata(src).map_err(|e| map_io_error(src, e))?;

    if meta.is_dir() {
        copy_dir_blocking(src, dest, 0)
    } else {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if meta.is_symlink() {
            copy_symlink(src, dest)?;
        } else {
            std::fs::copy(src, dest)?;
        }
        Ok(())
    }
}

fn copy_dir_blocking(src: &Path, dest: &Path, depth: usize) -> CoreResult<()> {
    if depth > MAX_COPY_DEPTH {
        return Err(CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("maximum recursion depth ({MAX_COPY_DEPTH}) exceeded during copy"),
        )));
    }

    std::fs::create_dir_all(dest)?;

    for dir_entry in std::fs::read_dir(src)? {
        let dir_entry = dir_entry?;
        let entry_path = dir_entry.path();
        let target = dest.join(dir_entry.file_name());

        // file_type() does not follow symlinks
        let ft = dir_entry.file_type()?;

        if ft.is_symlink() {
            copy_symlink(&entry_path, &target)?;
        } else if ft.is_dir() {
            copy_dir_blocking(&entry_path, &target, depth + 1)?;
        } else {
            std::fs::copy(&entry_path, &target)?;
        }
    }

    Ok(())
}

// Symlinks are copied as links, never followed.
#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
    let link_target = std::fs::read_link(src)?;
    std::os::unix::fs::symlink(link_target, dest)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::fs::copy(src, dest).map(|_| ())
}

fn delete_blocking(path: &Path) -> CoreResult<()> {
    let meta = std::fs::symlink_metadata(path).map_err(|e| map_io_error(path, e))?;

    if meta.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn list_directory_returns_sorted_names() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zebra.txt"), "").unwrap();
        fs::write(tmp.path().join("apple.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("mango")).unwrap();

        let names = LocalStore::new().list_directory(tmp.path()).await.unwrap();

        assert_eq!(names, vec!["apple.txt", "mango", "zebra.txt"]);
    }

    #[tokio::test]
    async fn list_directory_nonexistent_returns_not_found() {
        let result = LocalStore::new()
            .list_directory(Path::new("/nonexistent/path/that/does/not/exist"))
            .await;

        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_directory_on_file_returns_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "content").unwrap();

        let result = LocalStore::new().list_directory(&file).await;

        assert!(matches!(result.unwrap_err(), CoreError::NotADirectory(_)));
    }

    #[tokio::test]
    async fn stat_file_reports_size() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "hello").unwrap();

        let stat = LocalStore::new().stat(&file).await.unwrap();

        assert!(!stat.is_directory);
        assert_eq!(stat.size, 5);
    }

    #[tokio::test]
    async fn stat_directory_reports_is_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("sub");
        fs::create_dir(&dir).unwrap();

        let stat = LocalStore::new().stat(&dir).await.unwrap();

        assert!(stat.is_directory);
    }

    #[tokio::test]
    async fn stat_missing_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = LocalStore::new().stat(&tmp.path().join("gone.txt")).await;

        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn make_directory_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("new").join("nested");
        let store = LocalStore::new();

        store.make_directory(&dir).await.unwrap();
        store.make_directory(&dir).await.unwrap();

        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn move_entry_renames_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        let dest = tmp.path().join("dest.txt");
        fs::write(&src, "content").unwrap();

        LocalStore::new().move_entry(&src, &dest).await.unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "content");
    }

    #[tokio::test]
    async fn move_entry_missing_source_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = LocalStore::new()
            .move_entry(&tmp.path().join("nope.txt"), &tmp.path().join("dest.txt"))
            .await;

        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn copy_entry_copies_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        let dest = tmp.path().join("dest.txt");
        fs::write(&src, "data").unwrap();

        LocalStore::new().copy_entry(&src, &dest).await.unwrap();

        assert!(src.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "data");
    }

    #[tokio::test]
    async fn copy_entry_copies_directory_recursively() {
        let tmp = TempDir::new().unwrap();
        let src_dir = tmp.path().join("src_dir");
        fs::create_dir(&src_dir).unwrap();
        fs::write(src_dir.join("a.txt"), "aaa").unwrap();
        fs::create_dir(src_dir.join("nested")).unwrap();
        fs::write(src_dir.join("nested").join("b.txt"), "bbb").unwrap();

        let dest_dir = tmp.path().join("dest_dir");
        LocalStore::new().copy_entry(&src_dir, &dest_dir).await.unwrap();

        assert_eq!(fs::read_to_string(dest_dir.join("a.txt")).unwrap(), "aaa");
        assert_eq!(
            fs::read_to_string(dest_dir.join("nested").join("b.txt")).unwrap(),
            "bbb"
        );
    }

    #[tokio::test]
    async fn copy_entry_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        fs::write(&src, "data").unwrap();

        let dest = tmp.path().join("deep").join("nested").join("dest.txt");
        LocalStore::new().copy_entry(&src, &dest).await.unwrap();

        assert!(dest.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn copy_entry_preserves_symlink() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("real.txt");
        fs::write(&target, "data").unwrap();
        let link = tmp.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let dest = tmp.path().join("copied-link.txt");
        LocalStore::new().copy_entry(&link, &dest).await.unwrap();

        assert!(fs::symlink_metadata(&dest).unwrap().is_symlink());
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("bye.txt");
        fs::write(&file, "").unwrap();

        LocalStore::new().delete(&file, false).await.unwrap();

        assert!(!file.exists());
    }

    #[tokio::test]
    async fn delete_removes_directory_recursively() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("dir");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inside.txt"), "").unwrap();

        LocalStore::new().delete(&dir, false).await.unwrap();

        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn delete_missing_without_idempotent_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = LocalStore::new()
            .delete(&tmp.path().join("nope.txt"), false)
            .await;

        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_with_idempotent_succeeds() {
        let tmp = TempDir::new().unwrap();
        LocalStore::new()
            .delete(&tmp.path().join("nope.txt"), true)
            .await
            .unwrap();
    }
}
