//! tar.gz extraction.

use super::UnpackError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Extract a gzip-compressed tar archive into `dest_dir`.
///
/// Entries keep their archive paths (so a `ragemp-srv/` prefix lands in
/// `dest_dir/ragemp-srv`). Entries that would escape `dest_dir` are skipped by
/// `tar`. Existing files are overwritten.
pub fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<(), UnpackError> {
    let err = |source| UnpackError::Extract {
        archive: archive_path.to_path_buf(),
        source,
    };

    let file = File::open(archive_path).map_err(err)?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let mut archive = tar::Archive::new(decoder);
    archive.set_preserve_permissions(true);
    archive.set_overwrite(true);
    archive.unpack(dest_dir).map_err(err)?;

    tracing::debug!(
        archive = %archive_path.display(),
        dest = %dest_dir.display(),
        "extracted"
    );
    Ok(())
}
