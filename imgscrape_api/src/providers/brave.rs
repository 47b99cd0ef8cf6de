//! Brave image search.

use crate::extract::{has_root, locate, parse_document, ExtractError};
use crate::navigate::Node;
use crate::results::ResultIter;
use crate::types::{parse_color, BraveImageResult, ImageResult, Provider};

use super::{absolute_url, optional_url};

pub mod paths {
    use crate::navigate::Step;

    pub const RESULTS: &[Step] = &[Step::Key("results")];

    pub const URL: &[Step] = &[Step::Key("properties"), Step::Key("url")];
    pub const WIDTH: &[Step] = &[Step::Key("properties"), Step::Key("width")];
    pub const HEIGHT: &[Step] = &[Step::Key("properties"), Step::Key("height")];
    pub const RESIZED: &[Step] = &[Step::Key("properties"), Step::Key("resized")];
    pub const FORMAT: &[Step] = &[Step::Key("properties"), Step::Key("format")];
    pub const TITLE: &[Step] = &[Step::Key("title")];
    pub const PAGE_URL: &[Step] = &[Step::Key("url")];
    pub const SOURCE: &[Step] = &[Step::Key("source")];
    pub const PAGE_AGE: &[Step] = &[Step::Key("page_age")];
    pub const THUMBNAIL: &[Step] = &[Step::Key("thumbnail"), Step::Key("src")];
    pub const COLOR: &[Step] = &[Step::Key("thumbnail"), Step::Key("bg_color")];
}

/// Maps a Brave images API response.
pub fn parse_results(body: &[u8]) -> Result<ResultIter<BraveImageResult>, ExtractError> {
    let document = parse_document(body)?;
    if !has_root(&document, paths::RESULTS) {
        return Err(ExtractError::BlockNotFound);
    }
    Ok(ResultIter::new(
        Provider::Brave,
        locate(document, paths::RESULTS),
        map_entry,
    ))
}

fn map_entry(entry: Node<'_>) -> Option<BraveImageResult> {
    let url = absolute_url(entry.path(paths::URL).str())?;
    let page_url = entry.path(paths::PAGE_URL).string();
    Some(BraveImageResult {
        image: ImageResult {
            url,
            title: entry.path(paths::TITLE).string(),
            width: entry.path(paths::WIDTH).dimension(),
            height: entry.path(paths::HEIGHT).dimension(),
            thumbnail_url: optional_url(entry.path(paths::THUMBNAIL).str()),
            source_url: page_url.clone(),
            provider: Provider::Brave,
        },
        page_url,
        source: entry.path(paths::SOURCE).string(),
        page_age: entry.path(paths::PAGE_AGE).timestamp(),
        resized_url: optional_url(entry.path(paths::RESIZED).str()),
        format: entry.path(paths::FORMAT).string(),
        color: parse_color(entry.path(paths::COLOR).str()),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde_json::json;

    use super::*;
    use crate::types::Rgb;

    #[test]
    fn entry_maps_every_field() {
        let value = json!({
            "type": "image_result",
            "title": "Tabby cat",
            "url": "https://pets.example.org/tabby",
            "source": "pets.example.org",
            "page_age": "2024-03-01T10:00:00",
            "thumbnail": {"src": "https://imgs.search.brave.com/thumb", "bg_color": "#a0b1c2"},
            "properties": {
                "url": "https://pets.example.org/tabby.webp",
                "resized": "https://imgs.search.brave.com/resized",
                "width": 640,
                "height": 427,
                "format": "webp"
            }
        });
        let result = map_entry(Node::new(&value)).unwrap();
        assert_eq!(result.image.url, "https://pets.example.org/tabby.webp");
        assert_eq!(result.image.title, "Tabby cat");
        assert_eq!((result.image.width, result.image.height), (640, 427));
        assert_eq!(result.image.source_url, "https://pets.example.org/tabby");
        assert_eq!(result.page_url, result.image.source_url);
        assert_eq!(result.image.thumbnail_url, "https://imgs.search.brave.com/thumb");
        assert_eq!(result.resized_url, "https://imgs.search.brave.com/resized");
        assert_eq!(result.format, "webp");
        assert_eq!(result.source, "pets.example.org");
        assert_eq!(result.color, Some(Rgb::new(0xa0, 0xb1, 0xc2)));
        assert_eq!(
            result.page_age,
            DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc)
        );
    }

    #[test]
    fn sparse_entry_uses_defaults() {
        let value = json!({"properties": {"url": "https://a.example.com/x.png"}});
        let result = map_entry(Node::new(&value)).unwrap();
        assert_eq!(result.image.title, "");
        assert_eq!((result.image.width, result.image.height), (0, 0));
        assert_eq!(result.page_age, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(result.color, None);
        assert_eq!(result.image.thumbnail_url, "");
    }

    #[test]
    fn entry_without_image_url_is_skipped() {
        let value = json!({"title": "x", "url": "https://pets.example.org/"});
        assert!(map_entry(Node::new(&value)).is_none());
    }

    #[test]
    fn results_keep_native_order() {
        let body = br#"{"type": "images", "results": [
            {"properties": {"url": "https://a.example.com/1.jpg"}},
            {"properties": {}},
            {"properties": {"url": "https://a.example.com/2.jpg"}}
        ]}"#;
        let mut iter = parse_results(body).unwrap();
        let urls: Vec<String> = iter.by_ref().map(|r| r.image.url).collect();
        assert_eq!(urls, vec!["https://a.example.com/1.jpg", "https://a.example.com/2.jpg"]);
        assert_eq!(iter.skipped(), 1);
    }
}
