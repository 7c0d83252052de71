//! Walk the unpack folder and copy files out of it.

use super::UnpackError;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every regular file below `folder` (recursively), as paths relative to
/// `folder`, sorted by name within each directory. Directories are traversed,
/// not listed. Symlinks are neither followed nor listed, so a link in the
/// archive can never pull content from outside the unpack folder.
pub fn collect_files(folder: &Path) -> Result<Vec<PathBuf>, UnpackError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.map_err(|source| UnpackError::Walk {
            folder: folder.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type();
        if file_type.is_symlink() {
            tracing::warn!(path = %entry.path().display(), "skipping symlink in archive");
            continue;
        }
        if !file_type.is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(folder) {
            files.push(rel.to_path_buf());
        }
    }
    Ok(files)
}

/// Copy `from` to `to`, creating parent directories and overwriting `to`.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), UnpackError> {
    let err = |source| UnpackError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(err)?;
    }
    let bytes = fs::copy(from, to).map_err(err)?;
    tracing::debug!(from = %from.display(), to = %to.display(), bytes, "relocated");
    Ok(())
}
