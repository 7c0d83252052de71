//! Download file lifecycle.
//!
//! A body is streamed into `<path>.part`, then renamed over the final path
//! once the transfer succeeded. A failed transfer removes the part file and
//! leaves any existing file at the final path untouched.

mod part_file;

pub use part_file::PartFile;

/// Temporary file suffix used before the final rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `bin/bt.dat` → `bin/bt.dat.part`).
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    std::path::PathBuf::from(o)
}
