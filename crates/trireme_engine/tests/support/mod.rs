#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::Mutex;

use trireme_engine::ContentResolver;
use url::Url;

#[derive(Clone)]
pub struct Entry {
    pub name: Option<String>,
    pub bytes: Vec<u8>,
}

/// In-memory content provider keyed by locator string.
#[derive(Default)]
pub struct MemoryProvider {
    entries: Mutex<HashMap<String, Entry>>,
    fail_name_query: bool,
}

impl MemoryProvider {
    /// Provider whose display-name query always errors.
    pub fn failing_names() -> Self {
        Self {
            fail_name_query: true,
            ..Self::default()
        }
    }

    pub fn with(self, locator: &str, name: Option<&str>, bytes: &[u8]) -> Self {
        self.entries.lock().unwrap().insert(
            locator.to_string(),
            Entry {
                name: name.map(str::to_string),
                bytes: bytes.to_vec(),
            },
        );
        self
    }

    fn entry(&self, locator: &Url) -> io::Result<Entry> {
        self.entries
            .lock()
            .unwrap()
            .get(locator.as_str())
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, locator.to_string()))
    }
}

impl ContentResolver for MemoryProvider {
    fn display_name(&self, locator: &Url) -> io::Result<Option<String>> {
        if self.fail_name_query {
            return Err(io::Error::new(io::ErrorKind::Other, "cursor closed"));
        }
        Ok(self.entry(locator)?.name)
    }

    fn open(&self, locator: &Url) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.entry(locator)?.bytes)))
    }
}
