//! Per-provider mappers from recovered payloads to result records.
//!
//! Each provider keeps its navigation paths in a `paths` module. Those tables
//! track undocumented upstream layouts and are the first thing to revise when
//! a provider changes its response format.

pub mod brave;
pub mod duckduckgo;
pub mod google;

use url::Url;

/// Returns `raw` when it is a syntactically valid absolute URL.
pub(crate) fn absolute_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Url::parse(raw).ok().map(|_| raw.to_string())
}

/// Like [`absolute_url`], but degrades to an empty string for optional fields.
pub(crate) fn optional_url(raw: &str) -> String {
    absolute_url(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_only() {
        assert_eq!(
            absolute_url(" https://example.com/a.jpg "),
            Some("https://example.com/a.jpg".to_string())
        );
        assert_eq!(absolute_url(""), None);
        assert_eq!(absolute_url("/relative/a.jpg"), None);
        assert_eq!(absolute_url("//cdn.example.com/a.jpg"), None);
        assert_eq!(optional_url("not a url"), "");
    }
}
