//! Manifest downloader.
//!
//! For each manifest entry: skip it if the ignore set matches, otherwise GET
//! `base_url/<entry>` into `<root>/<entry>`. Failures are reported per entry
//! and never stop the remaining downloads. Runs strictly sequentially unless
//! `jobs > 1`, in which case a bounded worker pool is used.

mod pool;
mod single;

pub use single::{download_one, DownloadError};

use crate::ignore::IgnoreSet;
use crate::install::InstallEnv;

/// Outcome of a download pass, entries listed in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: Vec<String>,
    pub ignored: Vec<String>,
    pub failed: Vec<String>,
}

/// A manifest entry that passed the ignore check.
#[derive(Debug, Clone)]
pub(crate) struct Job {
    pub index: usize,
    pub relative_path: String,
}

/// Download every non-ignored entry of `files` below `env.root`.
pub fn download_files(
    files: &[&str],
    ignores: &IgnoreSet,
    env: &InstallEnv<'_>,
) -> DownloadSummary {
    let mut summary = DownloadSummary::default();
    let mut jobs = Vec::with_capacity(files.len());

    let sequential = env.config.jobs <= 1;
    for (index, file) in files.iter().enumerate() {
        if ignores.matches(file) {
            env.reporter.ignored(file);
            summary.ignored.push(file.to_string());
            continue;
        }
        let job = Job {
            index,
            relative_path: file.to_string(),
        };
        if sequential {
            env.reporter.entry(file);
            let res = single::run_job(&job, env.root, env.config, env.fetcher);
            record(&mut summary, env, job, res);
        } else {
            jobs.push(job);
        }
    }

    if !jobs.is_empty() {
        for job in &jobs {
            env.reporter.entry(&job.relative_path);
        }
        let mut results = pool::run_pool(jobs, env);
        results.sort_by_key(|(job, _)| job.index);
        for (job, res) in results {
            record(&mut summary, env, job, res);
        }
    }

    tracing::info!(
        downloaded = summary.downloaded.len(),
        ignored = summary.ignored.len(),
        failed = summary.failed.len(),
        "download pass finished"
    );
    summary
}

fn record(
    summary: &mut DownloadSummary,
    env: &InstallEnv<'_>,
    job: Job,
    res: Result<u64, DownloadError>,
) {
    match res {
        Ok(bytes) => {
            tracing::debug!(file = %job.relative_path, bytes, "downloaded");
            summary.downloaded.push(job.relative_path);
        }
        Err(e) => {
            tracing::debug!(file = %job.relative_path, error = %e, "download failed");
            env.reporter.error(&e.to_string());
            summary.failed.push(job.relative_path);
        }
    }
}
