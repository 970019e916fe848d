//! Trireme engine: content-to-cache import pipeline.
mod engine;
mod filename;
mod import;
mod persist;
mod resolver;
mod types;

pub use engine::ImportWorker;
pub use filename::{display_name_from_path, resolve_display_name, sanitize_prefix};
pub use import::{copy_stream, ContentImporter, ImportSettings, DEFAULT_BUFFER_SIZE};
pub use persist::ensure_cache_dir;
pub use resolver::{ContentResolver, FileResolver, SchemeRouter, CONTENT_SCHEME, FILE_SCHEME};
pub use types::{ImportError, ImportEvent, ImportedFile, RequestId};
