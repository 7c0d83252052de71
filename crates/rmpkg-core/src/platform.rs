//! Platform dispatch: OS identifier to fixed server-file manifest.

use std::fmt;

/// Server files published for Windows, fetched as-is.
pub const FILES_WINDOWS: &[&str] = &[
    "ragemp-server.exe",
    "BugTrap-x64.dll",
    "bin/bt.dat",
    "bin/enc.dat",
    "bin/loader.mjs",
];

/// Linux ships as a single archive that is unpacked after download.
pub const FILES_LINUX: &[&str] = &["linux_x64.tar.gz"];

/// Folder the Linux archive extracts into.
pub const UNPACK_FOLDER_LINUX: &str = "ragemp-srv";

/// A platform the server is published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
}

/// The OS identifier has no server build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("RAGE:MP server is not supported on your system ({0})")]
pub struct UnsupportedPlatform(pub String);

impl Platform {
    /// Maps an OS identifier (`std::env::consts::OS` style; `win32` also accepted).
    pub fn from_os(id: &str) -> Result<Self, UnsupportedPlatform> {
        match id {
            "windows" | "win32" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn manifest(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => FILES_WINDOWS,
            Platform::Linux => FILES_LINUX,
        }
    }

    /// Archive entry and the folder it unpacks into, for platforms that ship one.
    pub fn archive(self) -> Option<ArchiveSpec> {
        match self {
            Platform::Windows => None,
            Platform::Linux => Some(ArchiveSpec {
                file: FILES_LINUX[0],
                unpack_folder: UNPACK_FOLDER_LINUX,
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSpec {
    /// Manifest entry of the archive, relative to the working directory.
    pub file: &'static str,
    /// Top-level folder created by extraction.
    pub unpack_folder: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_os_known_ids() {
        assert_eq!(Platform::from_os("linux"), Ok(Platform::Linux));
        assert_eq!(Platform::from_os("windows"), Ok(Platform::Windows));
        assert_eq!(Platform::from_os("win32"), Ok(Platform::Windows));
    }

    #[test]
    fn from_os_unsupported() {
        let err = Platform::from_os("macos").unwrap_err();
        assert_eq!(err, UnsupportedPlatform("macos".to_string()));
        assert!(err.to_string().contains("not supported"));
        assert!(Platform::from_os("Linux").is_err());
        assert!(Platform::from_os("").is_err());
    }

    #[test]
    fn manifests_and_archive() {
        assert_eq!(Platform::Windows.manifest().len(), 5);
        assert!(Platform::Windows.archive().is_none());
        assert_eq!(Platform::Linux.manifest(), &["linux_x64.tar.gz"]);
        let archive = Platform::Linux.archive().unwrap();
        assert_eq!(archive.file, "linux_x64.tar.gz");
        assert_eq!(archive.unpack_folder, "ragemp-srv");
    }
}
