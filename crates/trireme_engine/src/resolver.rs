use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::sync::Arc;

use url::Url;

/// Scheme served by a managed content provider.
pub const CONTENT_SCHEME: &str = "content";
/// Scheme served straight from the local filesystem.
pub const FILE_SCHEME: &str = "file";

/// Host content-resolution service.
pub trait ContentResolver: Send + Sync {
    /// Display name reported by the provider, `Ok(None)` when it has none.
    fn display_name(&self, locator: &Url) -> io::Result<Option<String>>;

    /// Open the locator's bytes for reading.
    fn open(&self, locator: &Url) -> io::Result<Box<dyn Read + Send>>;
}

/// Serves `file://` locators from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileResolver;

impl ContentResolver for FileResolver {
    fn display_name(&self, _locator: &Url) -> io::Result<Option<String>> {
        Ok(None)
    }

    fn open(&self, locator: &Url) -> io::Result<Box<dyn Read + Send>> {
        if locator.scheme() != FILE_SCHEME {
            return Err(unsupported(locator));
        }
        let path = locator.to_file_path().map_err(|()| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{locator} is not a local path"),
            )
        })?;
        Ok(Box::new(File::open(path)?))
    }
}

/// Dispatches each locator to the resolver registered for its scheme.
///
/// `file` is always served by [`FileResolver`] unless overridden; the host
/// registers its content provider bridge under `content`.
#[derive(Clone)]
pub struct SchemeRouter {
    routes: HashMap<String, Arc<dyn ContentResolver>>,
}

impl SchemeRouter {
    pub fn new() -> Self {
        let mut routes: HashMap<String, Arc<dyn ContentResolver>> = HashMap::new();
        routes.insert(FILE_SCHEME.to_string(), Arc::new(FileResolver));
        Self { routes }
    }

    pub fn with_route(mut self, scheme: &str, resolver: Arc<dyn ContentResolver>) -> Self {
        self.routes.insert(scheme.to_ascii_lowercase(), resolver);
        self
    }

    fn route(&self, locator: &Url) -> io::Result<&dyn ContentResolver> {
        self.routes
            .get(locator.scheme())
            .map(|resolver| resolver.as_ref())
            .ok_or_else(|| unsupported(locator))
    }
}

impl Default for SchemeRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentResolver for SchemeRouter {
    fn display_name(&self, locator: &Url) -> io::Result<Option<String>> {
        self.route(locator)?.display_name(locator)
    }

    fn open(&self, locator: &Url) -> io::Result<Box<dyn Read + Send>> {
        self.route(locator)?.open(locator)
    }
}

fn unsupported(locator: &Url) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("no resolver for scheme {:?}", locator.scheme()),
    )
}
