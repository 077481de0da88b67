//! Atomic file replacement
//!
//! Bytes are written to a temp file in the destination's own directory and
//! then renamed over the destination, so readers only ever see the old file
//! or the complete new one.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Replace `path` with `contents`, creating missing parent directories first.
///
/// # Errors
///
/// Returns error if the parent directory cannot be created, the temp file
/// cannot be written, or the final rename fails. On error the previous file
/// at `path` (if any) is left untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = parent_dir(path);
    std::fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Async wrapper over [`write_atomic`] that runs on the blocking pool.
///
/// # Errors
///
/// Same as [`write_atomic`], plus an error if the blocking task was cancelled.
pub async fn write_atomic_async(path: PathBuf, contents: Vec<u8>) -> io::Result<()> {
    tokio::task::spawn_blocking(move || write_atomic(&path, &contents))
        .await
        .map_err(|e| io::Error::other(format!("write task failed: {e}")))?
}

/// Directory that will hold `path`; bare file names resolve to the cwd.
pub fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
