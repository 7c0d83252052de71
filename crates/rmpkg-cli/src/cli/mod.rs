//! CLI for rmpkg.

mod reporter;

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use rmpkg_core::config::{self, RmpkgConfig};
use rmpkg_core::fetch::{CurlFetcher, Fetcher};
use rmpkg_core::ignore::IgnoreSet;
use rmpkg_core::install::{run_install, InstallEnv};
use rmpkg_core::report::{Phase, Reporter};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use reporter::ConsoleReporter;

/// Top-level CLI: downloads the RAGE:MP server files for this system.
#[derive(Debug, Parser)]
#[command(name = "rmpkg", version)]
#[command(about = "Fetch RAGE:MP server files into the current directory", long_about = None)]
pub struct Cli {
    /// Skip every file whose path ends with SUFFIX. Repeatable.
    #[arg(
        long = "ignore",
        value_name = "SUFFIX",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub ignore: Vec<String>,

    /// Read download settings (base_url, connect_timeout_secs, max_redirections, jobs) from FILE.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Anything else on the command line; accepted and dropped.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub unrecognized: Vec<String>,
}

impl Cli {
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::new(self.ignore.clone())
    }
}

pub fn run_from_args() -> Result<()> {
    run(std::env::args_os())
}

/// Parse `args` and run the install in the current directory.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let reporter = ConsoleReporter::new();
    let root = std::env::current_dir().context("cannot determine working directory")?;
    run_with(args, &root, &reporter, |cfg| {
        Box::new(CurlFetcher::from_config(cfg))
    })
}

/// Parse `args` and install into `root`, fetching through whatever
/// `make_fetcher` builds from the loaded config.
///
/// A malformed `--ignore` or an unsupported platform is reported and returns
/// `Ok`; only config failures are errors. Tokens other than `--ignore` and
/// `--config` are skipped.
pub fn run_with<I, T>(
    args: I,
    root: &Path,
    reporter: &dyn Reporter,
    make_fetcher: impl FnOnce(&RmpkgConfig) -> Box<dyn Fetcher>,
) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print().context("failed to print help")?;
                return Ok(());
            }
            _ => {
                reporter.header(std::env::consts::OS);
                reporter.phase(Phase::Download);
                let cause = err.kind().as_str().unwrap_or("invalid arguments");
                reporter.error(&format!("Failed to parse arguments: {}", cause));
                tracing::debug!("argument error: {}", err);
                return Ok(());
            }
        },
    };
    if !cli.unrecognized.is_empty() {
        tracing::debug!(skipped = ?cli.unrecognized, "ignoring unrecognized arguments");
    }

    let cfg = config::load(cli.config.as_deref())?;
    tracing::debug!("loaded config: {:?}", cfg);
    let fetcher = make_fetcher(&cfg);
    let env = InstallEnv {
        root,
        config: &cfg,
        fetcher: &*fetcher,
        reporter,
    };

    // An unsupported platform has already been reported.
    if let Ok(summary) = run_install(std::env::consts::OS, &cli.ignore_set(), &env) {
        tracing::info!(
            platform = %summary.platform,
            failed = summary.download.failed.len(),
            unpacked = summary.unpack.is_some(),
            "install run finished"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests;
