use serde::{Deserialize, Serialize};

use super::ImageResult;

/// Image result from DuckDuckGo.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DuckDuckGoImageResult {
    #[serde(flatten)]
    pub image: ImageResult,

    /// Search engine DuckDuckGo sourced this result from (e.g. `Bing`).
    pub source: String,
}
impl AsRef<ImageResult> for DuckDuckGoImageResult {
    fn as_ref(&self) -> &ImageResult {
        &self.image
    }
}
impl From<DuckDuckGoImageResult> for ImageResult {
    fn from(val: DuckDuckGoImageResult) -> Self {
        val.image
    }
}
