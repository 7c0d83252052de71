//! Bounded worker pool for `jobs > 1`.

use std::collections::VecDeque;
use std::sync::mpsc;
use std::sync::Mutex;

use super::single::{run_job, DownloadError};
use super::Job;
use crate::install::InstallEnv;

/// Run `jobs` on at most `env.config.jobs` threads. Returns one result per job,
/// in completion order. The reporter is not touched from worker threads.
pub(super) fn run_pool(
    jobs: Vec<Job>,
    env: &InstallEnv<'_>,
) -> Vec<(Job, Result<u64, DownloadError>)> {
    let count = jobs.len();
    let work: Mutex<VecDeque<Job>> = Mutex::new(jobs.into_iter().collect());
    let (tx, rx) = mpsc::channel();
    let num_workers = env.config.jobs.min(count).max(1);

    let root = env.root;
    let config = env.config;
    let fetcher = env.fetcher;
    let work = &work;

    std::thread::scope(|scope| {
        for _ in 0..num_workers {
            let tx = tx.clone();
            scope.spawn(move || loop {
                let job = match work.lock() {
                    Ok(mut queue) => match queue.pop_front() {
                        Some(j) => j,
                        None => break,
                    },
                    Err(_) => break,
                };
                let res = run_job(&job, root, config, fetcher);
                if tx.send((job, res)).is_err() {
                    break;
                }
            });
        }
        drop(tx);
        rx.iter().take(count).collect()
    })
}
