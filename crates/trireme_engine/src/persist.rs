use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::ImportError;

/// Ensure the cache directory exists and is writable; create it if missing.
///
/// Returns the absolute form of `dir` so every path handed out is absolute.
pub fn ensure_cache_dir(dir: &Path) -> Result<PathBuf, ImportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ImportError::CacheDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ImportError::CacheDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ImportError::CacheDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| ImportError::CacheDir(e.to_string()))?;
    std::path::absolute(dir).map_err(|e| ImportError::CacheDir(e.to_string()))
}
