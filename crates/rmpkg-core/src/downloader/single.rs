//! One manifest entry: GET into a part file, rename on success.

use crate::config::RmpkgConfig;
use crate::fetch::{FetchError, Fetcher};
use crate::storage::PartFile;
use std::path::Path;
use thiserror::Error;

use super::Job;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Creating directories, the part file, or renaming it failed.
    #[error("{0:#}")]
    Storage(anyhow::Error),
}

/// GET `url` and store the body at `dest`, creating parent directories.
/// On any failure the partial file is removed and `dest` is left as it was.
pub fn download_one<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    dest: &Path,
) -> Result<u64, DownloadError> {
    let mut part = PartFile::create(dest).map_err(DownloadError::Storage)?;
    match fetcher.fetch(url, &mut part) {
        Ok(bytes) => {
            part.finalize().map_err(DownloadError::Storage)?;
            Ok(bytes)
        }
        Err(e) => {
            part.discard();
            Err(e.into())
        }
    }
}

/// Resolve a job to its URL and destination below `root`, then download it.
pub(super) fn run_job(
    job: &Job,
    root: &Path,
    config: &RmpkgConfig,
    fetcher: &dyn Fetcher,
) -> Result<u64, DownloadError> {
    let url = config.url_for(&job.relative_path);
    let dest = root.join(&job.relative_path);
    tracing::debug!(%url, dest = %dest.display(), "GET");
    download_one(fetcher, &url, &dest)
}
