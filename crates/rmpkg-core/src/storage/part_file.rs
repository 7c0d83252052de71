//! Sequential writer for a `.part` download file.

use super::temp_path;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Temp file next to `final_path`. Removed on drop unless finalized or discarded.
pub struct PartFile {
    writer: Option<BufWriter<File>>,
    temp_path: PathBuf,
    final_path: PathBuf,
    done: bool,
}

impl PartFile {
    /// Create (truncating) `<final_path>.part`, creating parent directories first.
    pub fn create(final_path: &Path) -> Result<Self> {
        if let Some(parent) = final_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
        }
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(PartFile {
            writer: Some(BufWriter::new(file)),
            temp_path,
            final_path: final_path.to_path_buf(),
            done: false,
        })
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush, close and rename the temp file over the final path.
    /// On failure the temp file is removed.
    pub fn finalize(mut self) -> Result<()> {
        let res = self.close_and_rename();
        if res.is_err() {
            self.remove_temp();
        }
        self.done = true;
        res
    }

    /// Close and delete the temp file. The final path is not touched.
    pub fn discard(mut self) {
        self.remove_temp();
        self.done = true;
    }

    fn close_and_rename(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            let file = writer
                .into_inner()
                .map_err(|e| e.into_error())
                .with_context(|| format!("failed to flush {}", self.temp_path.display()))?;
            file.sync_all()
                .with_context(|| format!("failed to sync {}", self.temp_path.display()))?;
        }
        fs::rename(&self.temp_path, &self.final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                self.temp_path.display(),
                self.final_path.display()
            )
        })
    }

    fn remove_temp(&mut self) {
        // Close before removing so Windows can delete the file.
        self.writer.take();
        match fs::remove_file(&self.temp_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::debug!("failed to remove {}: {}", self.temp_path.display(), e),
        }
    }
}

impl Write for PartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.writer.as_mut() {
            Some(w) => w.write(buf),
            None => Err(io::Error::new(io::ErrorKind::Other, "part file already closed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        if !self.done {
            self.remove_temp();
        }
    }
}
