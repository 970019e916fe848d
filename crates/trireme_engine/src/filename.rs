use bridge_logging::{bridge_debug, bridge_warn};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::resolver::{ContentResolver, CONTENT_SCHEME};

const FALLBACK_PREFIX: &str = "torrent";
const MAX_PREFIX_CHARS: usize = 80;

/// Human-readable name for `locator`.
///
/// Content-provider locators ask the provider first; any failure or missing
/// name falls back to the last segment of the locator's decoded path.
pub fn resolve_display_name(resolver: &dyn ContentResolver, locator: &Url) -> String {
    if locator.scheme() == CONTENT_SCHEME {
        match resolver.display_name(locator) {
            Ok(Some(name)) if !name.is_empty() => return name,
            Ok(_) => bridge_debug!("provider has no display name for {}", locator),
            Err(err) => bridge_warn!("display name query for {} failed: {}", locator, err),
        }
    }
    let path = percent_decode_str(locator.path()).decode_utf8_lossy();
    display_name_from_path(&path).to_string()
}

/// Substring after the final `/`, or the whole path when there is none.
pub fn display_name_from_path(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, tail)| tail)
}

/// Turn a display name into something safe to use as a cache file prefix.
pub fn sanitize_prefix(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&[' ', '.'][..]);
    if cleaned.is_empty() {
        return FALLBACK_PREFIX.to_string();
    }
    cleaned.chars().take(MAX_PREFIX_CHARS).collect()
}

fn is_forbidden(c: char) -> bool {
    matches!(c, '\\' | '/' | ':' | '\0'..='\u{1F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_controls_are_replaced() {
        assert_eq!(sanitize_prefix("../a/b\\c\u{7}.torrent"), "_a_b_c_.torrent");
    }

    #[test]
    fn blank_names_get_fallback() {
        assert_eq!(sanitize_prefix(""), "torrent");
        assert_eq!(sanitize_prefix(" . "), "torrent");
    }

    #[test]
    fn long_names_are_cut_on_char_boundaries() {
        let name = "é".repeat(200);
        let prefix = sanitize_prefix(&name);
        assert_eq!(prefix.chars().count(), 80);
    }
}
