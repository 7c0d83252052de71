//! Archive unpacker.
//!
//! Extracts the platform archive into the working directory (which creates
//! the unpack folder), copies every non-ignored file from the unpack folder
//! to the same relative path under the working directory, then deletes the
//! unpack folder and the archive. Any failure stops the phase and leaves the
//! archive and the unpack folder where they are.

mod extract;
mod relocate;

pub use extract::extract_tar_gz;
pub use relocate::{collect_files, copy_file};

use crate::ignore::{slash_path, IgnoreSet};
use crate::platform::ArchiveSpec;
use crate::report::Reporter;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnpackError {
    #[error("failed to unpack {}: {source}", archive.display())]
    Extract {
        archive: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to unpack: cannot list {}: {source}", folder.display())]
    Walk {
        folder: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to unpack: cannot copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to clean up {}: {source}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Files handled by a successful unpack, `/`-separated, relative to the unpack folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackSummary {
    pub relocated: Vec<String>,
    pub ignored: Vec<String>,
}

/// Unpack `archive` (relative to `root`) and move its contents into `root`.
///
/// Each file is checked against the whole ignore set. Cleanup of the unpack
/// folder and the archive only happens after every file was handled.
pub fn unpack_archive(
    archive: &ArchiveSpec,
    ignores: &IgnoreSet,
    root: &Path,
    reporter: &dyn Reporter,
) -> Result<UnpackSummary, UnpackError> {
    let archive_path = root.join(archive.file);
    let folder = root.join(archive.unpack_folder);

    extract_tar_gz(&archive_path, root)?;
    let files = collect_files(&folder)?;

    let mut summary = UnpackSummary::default();
    for rel in files {
        let shown = slash_path(&rel);
        if ignores.matches(&shown) {
            reporter.ignored(&shown);
            summary.ignored.push(shown);
            continue;
        }
        reporter.entry(&shown);
        copy_file(&folder.join(&rel), &root.join(&rel))?;
        summary.relocated.push(shown);
    }

    remove_dir_if_exists(&folder)?;
    remove_file_if_exists(&archive_path)?;

    tracing::info!(
        relocated = summary.relocated.len(),
        ignored = summary.ignored.len(),
        "unpack finished"
    );
    Ok(summary)
}

fn remove_dir_if_exists(path: &Path) -> Result<(), UnpackError> {
    match std::fs::remove_dir_all(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(UnpackError::Cleanup {
            path: path.to_path_buf(),
            source: e,
        }),
        _ => Ok(()),
    }
}

fn remove_file_if_exists(path: &Path) -> Result<(), UnpackError> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(UnpackError::Cleanup {
            path: path.to_path_buf(),
            source: e,
        }),
        _ => Ok(()),
    }
}
