//! Google Images.
//!
//! Two response shapes are supported. The JSON endpoint (`async=_fmt:json`)
//! answers with an `ischj.metadata` array behind an anti-XSSI prefix. The
//! classic HTML results page instead injects a positional array into an
//! `AF_initDataCallback` script call.

use crate::extract::{extract_block, has_root, locate, parse_document, ExtractError};
use crate::navigate::Node;
use crate::results::ResultIter;
use crate::types::{parse_color, GoogleImageResult, ImageResult, Provider};

use super::{absolute_url, optional_url};

pub mod paths {
    use crate::navigate::Step;

    /// Object that must exist for a JSON document to be a results document.
    pub const JSON_ROOT: &[Step] = &[Step::Key("ischj")];
    pub const JSON_RESULTS: &[Step] = &[Step::Key("ischj"), Step::Key("metadata")];

    pub const JSON_URL: &[Step] = &[Step::Key("original_image"), Step::Key("url")];
    pub const JSON_WIDTH: &[Step] = &[Step::Key("original_image"), Step::Key("width")];
    pub const JSON_HEIGHT: &[Step] = &[Step::Key("original_image"), Step::Key("height")];
    pub const JSON_TITLE: &[Step] = &[Step::Key("result"), Step::Key("page_title")];
    pub const JSON_SOURCE_URL: &[Step] = &[Step::Key("result"), Step::Key("referrer_url")];
    pub const JSON_DISPLAY_URL: &[Step] = &[Step::Key("result"), Step::Key("image_source_url")];
    pub const JSON_THUMBNAIL: &[Step] = &[Step::Key("thumbnail"), Step::Key("url")];
    pub const JSON_COLOR: &[Step] = &[Step::Key("background_color")];

    pub const BLOCK_MARKER: &str = "AF_initDataCallback({key: 'ds:1'";
    pub const BLOCK_BOUNDARY: &str = "</script>";
    pub const BLOCK_RESULTS: &[Step] = &[Step::Index(31), Step::First, Step::Index(12), Step::Index(2)];

    /// Leading discriminator of every block entry; image records carry [`IMAGE_ENTRY`].
    pub const ENTRY_KIND: &[Step] = &[Step::First];
    pub const IMAGE_ENTRY: i64 = 1;
    pub const ENTRY_DATA: &[Step] = &[Step::Index(1)];

    // Relative to the entry data.
    pub const DATA_MAIN: &[Step] = &[Step::Index(3)];
    pub const DATA_INFO: &[Step] = &[Step::Index(9)];
    pub const DATA_INFO_FALLBACK: &[Step] = &[Step::Index(11)];
    pub const DATA_THUMBNAIL: &[Step] = &[Step::Index(2), Step::First];

    // Relative to the main image array.
    pub const MAIN_URL: &[Step] = &[Step::Index(0)];
    pub const MAIN_WIDTH: &[Step] = &[Step::Index(1)];
    pub const MAIN_HEIGHT: &[Step] = &[Step::Index(2)];

    // Relative to the info object.
    pub const INFO_TITLE: &[Step] = &[Step::Key("2003"), Step::Index(3)];
    pub const INFO_SOURCE_URL: &[Step] = &[Step::Key("2003"), Step::Index(2)];
    pub const INFO_DISPLAY_URL: &[Step] = &[Step::Key("183836587"), Step::First];
}

/// Maps a JSON endpoint response.
pub fn parse_json(body: &[u8]) -> Result<ResultIter<GoogleImageResult>, ExtractError> {
    let document = parse_document(body)?;
    if !has_root(&document, paths::JSON_ROOT) {
        return Err(ExtractError::BlockNotFound);
    }
    Ok(ResultIter::new(
        Provider::Google,
        locate(document, paths::JSON_RESULTS),
        map_json_entry,
    ))
}

/// Maps a classic HTML results page.
pub fn parse_html(page: &str) -> Result<ResultIter<GoogleImageResult>, ExtractError> {
    let block = extract_block(page, paths::BLOCK_MARKER, paths::BLOCK_BOUNDARY)?;
    Ok(ResultIter::new(
        Provider::Google,
        locate(block, paths::BLOCK_RESULTS),
        map_block_entry,
    ))
}

fn map_json_entry(entry: Node<'_>) -> Option<GoogleImageResult> {
    let url = absolute_url(entry.path(paths::JSON_URL).str())?;
    Some(GoogleImageResult {
        image: ImageResult {
            url,
            title: entry.path(paths::JSON_TITLE).string(),
            width: entry.path(paths::JSON_WIDTH).dimension(),
            height: entry.path(paths::JSON_HEIGHT).dimension(),
            thumbnail_url: optional_url(entry.path(paths::JSON_THUMBNAIL).str()),
            source_url: entry.path(paths::JSON_SOURCE_URL).string(),
            provider: Provider::Google,
        },
        display_url: entry.path(paths::JSON_DISPLAY_URL).string(),
        color: parse_color(entry.path(paths::JSON_COLOR).str()),
    })
}

fn map_block_entry(entry: Node<'_>) -> Option<GoogleImageResult> {
    if entry.path(paths::ENTRY_KIND).opt_int() != Some(paths::IMAGE_ENTRY) {
        return None;
    }
    let data = entry.path(paths::ENTRY_DATA);
    let main = data.path(paths::DATA_MAIN);
    let info = match data.path(paths::DATA_INFO) {
        info if info.is_blank() => data.path(paths::DATA_INFO_FALLBACK),
        info => info,
    };

    let url = absolute_url(main.path(paths::MAIN_URL).str())?;
    Some(GoogleImageResult {
        image: ImageResult {
            url,
            title: info.path(paths::INFO_TITLE).string(),
            width: main.path(paths::MAIN_WIDTH).dimension(),
            height: main.path(paths::MAIN_HEIGHT).dimension(),
            thumbnail_url: optional_url(data.path(paths::DATA_THUMBNAIL).str()),
            source_url: info.path(paths::INFO_SOURCE_URL).string(),
            provider: Provider::Google,
        },
        display_url: info.path(paths::INFO_DISPLAY_URL).string(),
        color: None,
    })
}
