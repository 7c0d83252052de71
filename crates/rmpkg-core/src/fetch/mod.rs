//! HTTP GET into a byte sink.
//!
//! `Fetcher` is the seam between the download loop and the network: the
//! production implementation drives libcurl, tests substitute an in-memory one.

mod curl_fetcher;

pub use curl_fetcher::CurlFetcher;

use std::io::{self, Write};
use thiserror::Error;

/// The only status accepted as a successful download.
pub const HTTP_OK: u32 = 200;

/// Failure of a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, TLS, reset, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Final response status was not 200.
    #[error("failed to download file: {url} {code}")]
    Status { url: String, code: u32 },
    /// Writing the body to the sink failed.
    #[error("write failed while downloading {url}: {source}")]
    Sink {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Issues a GET for `url` and streams the response body into `sink`.
///
/// Implementations must return `FetchError::Status` for any final status other
/// than 200; bytes already written to `sink` are then meaningless and the
/// caller discards them. Returns the number of body bytes written on success.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError>;
}
