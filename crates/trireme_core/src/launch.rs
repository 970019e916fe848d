use std::fmt;

use url::Url;

/// Scheme served by a managed content provider.
pub const SCHEME_CONTENT: &str = "content";
/// Scheme pointing straight at the local filesystem.
pub const SCHEME_FILE: &str = "file";

/// Opaque pointer at importable bytes (`content://…` or `file://…`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator(Url);

impl Locator {
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self)
    }

    pub fn from_url(url: Url) -> Self {
        Self(url)
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// True when the bytes live behind a managed content provider.
    pub fn is_content(&self) -> bool {
        self.0.scheme() == SCHEME_CONTENT
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// What the activity was launched with, classified by scheme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LaunchEvent {
    #[default]
    None,
    /// Anything that is not a local file: magnet links, http(s) links, ...
    /// Kept verbatim so the managed layer sees the exact launch string.
    UrlOpen(String),
    /// A `content://` or `file://` locator pointing at a torrent file.
    FileOpen(Locator),
}

impl LaunchEvent {
    /// Classify raw launch data. `content` and `file` schemes become
    /// [`LaunchEvent::FileOpen`], everything else [`LaunchEvent::UrlOpen`].
    pub fn classify(data: Option<&str>) -> Self {
        let Some(raw) = data.filter(|raw| !raw.is_empty()) else {
            return LaunchEvent::None;
        };
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), SCHEME_CONTENT | SCHEME_FILE) => {
                LaunchEvent::FileOpen(Locator(url))
            }
            _ => LaunchEvent::UrlOpen(raw.to_owned()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, LaunchEvent::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_comparison_ignores_case() {
        let event = LaunchEvent::classify(Some("CONTENT://downloads/public/1"));
        assert!(matches!(event, LaunchEvent::FileOpen(ref loc) if loc.is_content()));
    }

    #[test]
    fn unparseable_data_is_kept_as_url() {
        let event = LaunchEvent::classify(Some("not a uri"));
        assert_eq!(event, LaunchEvent::UrlOpen("not a uri".to_string()));
    }

    #[test]
    fn empty_data_is_no_launch() {
        assert!(LaunchEvent::classify(Some("")).is_none());
        assert!(LaunchEvent::classify(None).is_none());
    }
}
