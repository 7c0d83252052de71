use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Remote origin + path prefix all server files are fetched from.
pub const BASE_URL: &str = "https://cdn.rage.mp/updater/prerelease_server/server-files";

/// Errors raised while loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid base_url {url:?}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base_url must be http or https, got {0:?}")]
    Scheme(String),
    #[error("jobs must be at least 1")]
    ZeroJobs,
}

/// Download settings, read from an optional `config.toml`.
///
/// Every field has a built-in default; the file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RmpkgConfig {
    /// Remote prefix joined with each manifest entry (`base_url + "/" + path`).
    pub base_url: String,
    /// Connect timeout per request in seconds. There is no overall transfer timeout.
    pub connect_timeout_secs: u64,
    /// Upper bound on followed redirects per request.
    pub max_redirections: u32,
    /// Number of downloads allowed in flight at once. 1 = strictly sequential.
    pub jobs: usize,
}

impl Default for RmpkgConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            connect_timeout_secs: 30,
            max_redirections: 10,
            jobs: 1,
        }
    }
}

impl RmpkgConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(path: &Path, data: &str) -> Result<Self, ConfigError> {
        let cfg: RmpkgConfig = toml::from_str(data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that `base_url` is an absolute http(s) URL and `jobs` is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.base_url).map_err(|source| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::Scheme(parsed.scheme().to_string()));
        }
        if self.jobs == 0 {
            return Err(ConfigError::ZeroJobs);
        }
        Ok(())
    }

    /// Remote URL for a manifest entry.
    pub fn url_for(&self, relative_path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), relative_path)
    }
}

/// Default location: `$XDG_CONFIG_HOME/rmpkg/config.toml`. Not created if missing.
pub fn config_path() -> Option<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rmpkg").ok()?;
    xdg_dirs.find_config_file("config.toml")
}

/// Load configuration from `explicit` if given, else from the XDG config file
/// if one exists, else the built-in defaults. Never writes anything.
pub fn load(explicit: Option<&Path>) -> Result<RmpkgConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return Ok(RmpkgConfig::default()),
        },
    };

    let data = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let cfg = RmpkgConfig::from_toml(&path, &data)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
