//! libcurl-backed fetcher (one Easy handle per request).

use super::{FetchError, Fetcher, HTTP_OK};
use crate::config::RmpkgConfig;
use std::io::{self, Write};
use std::time::Duration;

/// Blocking GET via the curl crate. Cheap to build; holds only settings.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    max_redirections: u32,
}

impl CurlFetcher {
    pub fn new(connect_timeout: Duration, max_redirections: u32) -> Self {
        Self {
            connect_timeout,
            max_redirections,
        }
    }

    pub fn from_config(cfg: &RmpkgConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            cfg.max_redirections,
        )
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirections)?;
        easy.connect_timeout(self.connect_timeout)?;
        Ok(easy)
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::from_config(&RmpkgConfig::default())
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        let transport = |source: curl::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut easy = self.easy(url).map_err(transport)?;
        let mut written: u64 = 0;
        let mut sink_error: Option<io::Error> = None;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| match sink.write_all(data) {
                    Ok(()) => {
                        written += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        sink_error = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .map_err(transport)?;
            transfer.perform()
        };

        if let Some(source) = sink_error {
            return Err(FetchError::Sink {
                url: url.to_string(),
                source,
            });
        }
        performed.map_err(transport)?;

        let code = easy.response_code().map_err(transport)?;
        if code != HTTP_OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                code,
            });
        }

        sink.flush().map_err(|source| FetchError::Sink {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!(url, bytes = written, "GET complete");
        Ok(written)
    }
}
