use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bridge_logging::bridge_info;
use serde::Deserialize;
use thiserror::Error;
use trireme_core::TORRENT_MIME_TYPE;
use trireme_engine::ImportSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Host-tunable settings, stored as RON.
///
/// ```ron
/// (
///     import: (cache_dir: "/data/user/0/org.deluge.trireme/cache"),
///     picker_mime_type: "application/x-bittorrent",
///     log_dir: Some("/data/user/0/org.deluge.trireme/files"),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub import: ImportSettings,
    pub picker_mime_type: String,
    /// Directory for `trireme.log`; `None` keeps file logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            import: ImportSettings::default(),
            picker_mime_type: TORRENT_MIME_TYPE.to_string(),
            log_dir: None,
        }
    }
}

impl BridgeConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                bridge_info!("no config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = Self::from_ron_str(&text)?;
        bridge_info!("loaded config from {:?}", path);
        Ok(config)
    }
}
