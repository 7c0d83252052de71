//! Shared fixtures for unit tests: an in-memory fetcher and a tar.gz writer.

use crate::fetch::{FetchError, Fetcher};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Serves fixed bodies by URL and records every requested URL.
/// Unknown URLs answer 404 with a small body, like a real server would.
#[derive(Default)]
pub struct MapFetcher {
    responses: HashMap<String, Result<Vec<u8>, u32>>,
    calls: Mutex<Vec<String>>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, url: &str, body: &[u8]) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_vec()));
        self
    }

    pub fn status(mut self, url: &str, code: u32) -> Self {
        self.responses.insert(url.to_string(), Err(code));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetcher for MapFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        let sink_err = |source| FetchError::Sink {
            url: url.to_string(),
            source,
        };
        match self.responses.get(url) {
            Some(Ok(body)) => {
                sink.write_all(body).map_err(sink_err)?;
                Ok(body.len() as u64)
            }
            Some(Err(code)) => {
                sink.write_all(b"error page").map_err(sink_err)?;
                Err(FetchError::Status {
                    url: url.to_string(),
                    code: *code,
                })
            }
            None => {
                sink.write_all(b"not found").map_err(sink_err)?;
                Err(FetchError::Status {
                    url: url.to_string(),
                    code: 404,
                })
            }
        }
    }
}

/// Write a gzip-compressed tar at `path` with the given `(name, contents)` entries.
pub fn write_tar_gz(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, name, data.as_bytes()).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

/// Same as `write_tar_gz`, returning the archive bytes instead.
pub fn tar_gz_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("archive.tar.gz");
    write_tar_gz(&path, entries);
    std::fs::read(&path).unwrap()
}
