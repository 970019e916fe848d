use std::env;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use bridge_logging::{bridge_debug, bridge_info};
use serde::Deserialize;
use url::Url;

use crate::filename::{resolve_display_name, sanitize_prefix};
use crate::persist::ensure_cache_dir;
use crate::{ContentResolver, ImportError, ImportedFile};

/// Size of the intermediate copy buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 4 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Process-private directory receiving the imported copies.
    pub cache_dir: PathBuf,
    pub buffer_size: usize,
}

impl ImportSettings {
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            cache_dir: env::temp_dir().join("trireme-cache"),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Copies locator bytes into fresh cache files.
///
/// Every call creates a new file, even for a locator imported before. Files
/// are never removed here; the cache directory belongs to the host.
#[derive(Clone)]
pub struct ContentImporter {
    resolver: Arc<dyn ContentResolver>,
    settings: ImportSettings,
}

impl ContentImporter {
    pub fn new(resolver: Arc<dyn ContentResolver>, settings: ImportSettings) -> Self {
        Self { resolver, settings }
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    pub fn import(&self, locator: &Url) -> Result<ImportedFile, ImportError> {
        let display_name = resolve_display_name(self.resolver.as_ref(), locator);
        let cache_dir = ensure_cache_dir(&self.settings.cache_dir)?;

        // Removed on drop unless the copy completes and the file is kept.
        let mut tmp = tempfile::Builder::new()
            .prefix(&sanitize_prefix(&display_name))
            .tempfile_in(&cache_dir)?;
        bridge_debug!("importing {} into {:?}", locator, tmp.path());

        let mut input = self
            .resolver
            .open(locator)
            .map_err(|source| ImportError::Open {
                locator: locator.to_string(),
                source,
            })?;
        let bytes_copied = copy_stream(&mut input, tmp.as_file_mut(), self.settings.buffer_size)
            .map_err(ImportError::Copy)?;

        let (file, path) = tmp.keep().map_err(|err| ImportError::Io(err.error))?;
        drop(file);

        bridge_info!(
            "imported {} ({} bytes) as {:?}",
            display_name,
            bytes_copied,
            path
        );
        Ok(ImportedFile {
            path,
            display_name,
            bytes_copied,
        })
    }
}

/// Stream `reader` into `writer` through a fixed buffer, then flush.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W, buffer_size: usize) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut total = 0u64;
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        writer.write_all(&buffer[..read])?;
        total += read as u64;
    }
    writer.flush()?;
    Ok(total)
}
