use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Caller-chosen id echoed back with the matching [`ImportEvent`].
pub type RequestId = u64;

/// A cache copy of some locator's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
    /// Absolute path of the closed, fully written cache file.
    pub path: PathBuf,
    /// Best-effort name of the source, used as the file name prefix.
    pub display_name: String,
    pub bytes_copied: u64,
}

#[derive(Debug)]
pub struct ImportEvent {
    pub request: RequestId,
    pub result: Result<ImportedFile, ImportError>,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cache directory missing or not writable: {0}")]
    CacheDir(String),
    #[error("cannot open {locator}: {source}")]
    Open {
        locator: String,
        #[source]
        source: io::Error,
    },
    #[error("copy failed: {0}")]
    Copy(#[source] io::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
