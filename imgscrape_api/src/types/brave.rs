use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ImageResult, Rgb};

/// Image result from Brave search.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BraveImageResult {
    #[serde(flatten)]
    pub image: ImageResult,

    /// Hosting page URL. Brave reports a single page URL, so this always
    /// equals `image.source_url`.
    pub page_url: String,

    /// Domain of the hosting page.
    pub source: String,

    /// Age of the hosting page. The Unix epoch when Brave omits it.
    pub page_age: DateTime<Utc>,

    /// URL of a resized copy served by Brave's image proxy.
    pub resized_url: String,

    /// Image format, e.g. `jpeg`.
    pub format: String,

    /// Background color of the thumbnail.
    pub color: Option<Rgb>,
}
impl AsRef<ImageResult> for BraveImageResult {
    fn as_ref(&self) -> &ImageResult {
        &self.image
    }
}
impl From<BraveImageResult> for ImageResult {
    fn from(val: BraveImageResult) -> Self {
        val.image
    }
}
