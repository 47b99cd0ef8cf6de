//! DuckDuckGo image search.
//!
//! Searching is a two-step exchange: the landing page embeds a `vqd` session
//! token, which must accompany the follow-up `i.js` request that returns the
//! results document.

use crate::extract::{extract_token, has_root, locate, parse_document, ExtractError};
use crate::navigate::Node;
use crate::results::ResultIter;
use crate::types::{DuckDuckGoImageResult, ImageResult, Provider, SessionToken};

use super::{absolute_url, optional_url};

pub mod paths {
    use crate::navigate::Step;

    /// Token markers with their closing delimiter, tried in order.
    pub const TOKEN_MARKERS: &[(&[u8], u8)] = &[(b"vqd='", b'\''), (b"vqd=\"", b'"')];

    pub const RESULTS: &[Step] = &[Step::Key("results")];

    pub const URL: &[Step] = &[Step::Key("image")];
    pub const TITLE: &[Step] = &[Step::Key("title")];
    pub const WIDTH: &[Step] = &[Step::Key("width")];
    pub const HEIGHT: &[Step] = &[Step::Key("height")];
    pub const SOURCE_URL: &[Step] = &[Step::Key("url")];
    pub const THUMBNAIL: &[Step] = &[Step::Key("thumbnail")];
    pub const SOURCE: &[Step] = &[Step::Key("source")];
}

/// Scrapes the session token from the landing page.
pub fn parse_token(page: &[u8]) -> Result<SessionToken, ExtractError> {
    paths::TOKEN_MARKERS
        .iter()
        .find_map(|(marker, delimiter)| extract_token(page, marker, *delimiter).ok())
        .ok_or(ExtractError::TokenNotFound)
}

/// Maps an `i.js` results document.
pub fn parse_results(body: &[u8]) -> Result<ResultIter<DuckDuckGoImageResult>, ExtractError> {
    let document = parse_document(body)?;
    if !has_root(&document, paths::RESULTS) {
        return Err(ExtractError::BlockNotFound);
    }
    Ok(ResultIter::new(
        Provider::DuckDuckGo,
        locate(document, paths::RESULTS),
        map_entry,
    ))
}

fn map_entry(entry: Node<'_>) -> Option<DuckDuckGoImageResult> {
    let url = absolute_url(entry.path(paths::URL).str())?;
    Some(DuckDuckGoImageResult {
        image: ImageResult {
            url,
            title: entry.path(paths::TITLE).string(),
            width: entry.path(paths::WIDTH).dimension(),
            height: entry.path(paths::HEIGHT).dimension(),
            thumbnail_url: optional_url(entry.path(paths::THUMBNAIL).str()),
            source_url: entry.path(paths::SOURCE_URL).string(),
            provider: Provider::DuckDuckGo,
        },
        source: entry.path(paths::SOURCE).string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn token_with_either_quote_style() {
        let single = b"<script>DDG.deep.initialize('/d.js?q=cats', vqd='4-111', ...)</script>";
        assert_eq!(parse_token(single).unwrap().as_str(), "4-111");
        let double = br#"<input name="x"><script>vqd="4-222";</script>"#;
        assert_eq!(parse_token(double).unwrap().as_str(), "4-222");
        assert!(matches!(
            parse_token(b"<html>no token</html>"),
            Err(ExtractError::TokenNotFound)
        ));
    }

    #[test]
    fn entry_maps_every_field() {
        let value = json!({
            "height": 1080,
            "image": "https://images.example.com/cat.jpg",
            "source": "Bing",
            "thumbnail": "https://tse1.mm.bing.net/th?id=OIP.1",
            "title": "Cat on a mat",
            "url": "https://www.example.com/cats",
            "width": 1920
        });
        let result = map_entry(Node::new(&value)).unwrap();
        assert_eq!(result.image.url, "https://images.example.com/cat.jpg");
        assert_eq!(result.image.title, "Cat on a mat");
        assert_eq!((result.image.width, result.image.height), (1920, 1080));
        assert_eq!(result.image.source_url, "https://www.example.com/cats");
        assert_eq!(result.image.thumbnail_url, "https://tse1.mm.bing.net/th?id=OIP.1");
        assert_eq!(result.source, "Bing");
    }

    #[test]
    fn entry_with_relative_image_is_skipped() {
        let value = json!({"image": "/cat.jpg", "title": "x"});
        assert!(map_entry(Node::new(&value)).is_none());
    }

    #[test]
    fn document_without_results_is_not_found() {
        assert!(matches!(
            parse_results(br#"{"next": "i.js?q=cats&s=100"}"#),
            Err(ExtractError::BlockNotFound)
        ));
        assert!(matches!(
            parse_results(b"<html>"),
            Err(ExtractError::BlockUnparseable(_))
        ));
        let iter = parse_results(br#"{"results": []}"#).unwrap();
        assert_eq!(iter.count(), 0);
    }
}
