//! One install run: platform dispatch, download pass, optional unpack.

use crate::config::RmpkgConfig;
use crate::downloader::{download_files, DownloadSummary};
use crate::fetch::Fetcher;
use crate::ignore::IgnoreSet;
use crate::platform::{Platform, UnsupportedPlatform};
use crate::report::{Phase, Reporter};
use crate::unpack::{unpack_archive, UnpackSummary};
use std::path::Path;

/// Everything a run reads from its surroundings.
pub struct InstallEnv<'a> {
    /// Working directory; all files are written below it.
    pub root: &'a Path,
    pub config: &'a RmpkgConfig,
    pub fetcher: &'a dyn Fetcher,
    pub reporter: &'a dyn Reporter,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    pub platform: Platform,
    pub download: DownloadSummary,
    /// `None` for platforms without an archive or when extraction failed.
    pub unpack: Option<UnpackSummary>,
}

/// Run the install for the platform identified by `os_id`.
///
/// An unsupported platform is reported and returned as an error before any
/// request or filesystem write. Per-file failures are reported and do not fail
/// the run.
pub fn run_install(
    os_id: &str,
    ignores: &IgnoreSet,
    env: &InstallEnv<'_>,
) -> Result<InstallSummary, UnsupportedPlatform> {
    env.reporter.header(os_id);
    env.reporter.phase(Phase::Download);

    let platform = match Platform::from_os(os_id) {
        Ok(p) => p,
        Err(e) => {
            env.reporter.error(&e.to_string());
            return Err(e);
        }
    };
    tracing::debug!(%platform, ignores = ?ignores.suffixes(), "starting install");

    let download = download_files(platform.manifest(), ignores, env);

    let unpack = match platform.archive() {
        Some(archive) => {
            env.reporter.phase(Phase::Unpack);
            match unpack_archive(&archive, ignores, env.root, env.reporter) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    tracing::debug!(error = %e, "unpack failed");
                    env.reporter.error(&e.to_string());
                    None
                }
            }
        }
        None => None,
    };

    env.reporter.phase(Phase::Complete);
    Ok(InstallSummary {
        platform,
        download,
        unpack,
    })
}
