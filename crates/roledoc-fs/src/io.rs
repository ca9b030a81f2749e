//! Whole-file reads and atomic writes with file locking

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read the full contents of a file that may not exist yet.
///
/// Returns `Ok(None)` only when the file is absent. Any other failure
/// (permissions, path is a directory, ...) is reported as an error so the
/// caller never mistakes an unreadable file for a missing one.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file does not exist");
            Ok(None)
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Temp file used by [`write_atomic`], placed next to the target so the
/// final rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a failed write never leaves the
/// destination truncated. Missing parent directories are created.
///
/// An existing destination keeps its identity: a symlink is followed and
/// the file it points to is replaced, and the permission bits carry over.
/// Concurrent writers are serialized on an exclusive advisory lock held on
/// the existing destination for the duration of the write.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let current = lock_existing(&target)?;
    let permissions = match &current {
        Some(file) => Some(
            file.metadata()
                .map_err(|e| Error::io(&target, e))?
                .permissions(),
        ),
        None => None,
    };

    let temp_path = temp_path_for(&target);
    let result = write_then_rename(&target, &temp_path, content, permissions);
    if result.is_err() {
        // The temp file may never have been created.
        let _ = fs::remove_file(&temp_path);
    }

    match current {
        Some(file) => result.and_then(|()| {
            FileExt::unlock(&file).map_err(|_| Error::LockFailed {
                path: target.clone(),
            })
        }),
        None => result,
    }
}

/// The file the write lands on: symlinks resolved when the destination
/// exists, the path itself otherwise.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Open and exclusively lock the destination, if it already exists.
fn lock_existing(target: &Path) -> Result<Option<File>> {
    let file = match File::open(target) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(target, e)),
    };

    FileExt::lock_exclusive(&file).map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    Ok(Some(file))
}

fn write_then_rename(
    target: &Path,
    temp_path: &Path,
    content: &[u8],
    permissions: Option<Permissions>,
) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    fs::rename(temp_path, target).map_err(|e| Error::io(target, e))?;

    tracing::debug!(path = %target.display(), bytes = content.len(), "wrote file");
    Ok(())
}
