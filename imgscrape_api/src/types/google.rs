use serde::{Deserialize, Serialize};

use super::{ImageResult, Rgb};

/// Image result from Google Images.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleImageResult {
    #[serde(flatten)]
    pub image: ImageResult,

    /// Abridged form of the hosting page, e.g. `www.example.com`.
    pub display_url: String,

    /// Background color Google paints behind the thumbnail.
    pub color: Option<Rgb>,
}
impl AsRef<ImageResult> for GoogleImageResult {
    fn as_ref(&self) -> &ImageResult {
        &self.image
    }
}
impl From<GoogleImageResult> for ImageResult {
    fn from(val: GoogleImageResult) -> Self {
        val.image
    }
}
