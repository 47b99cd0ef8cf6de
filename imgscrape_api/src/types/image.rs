//! Provider-independent result types.

use serde::{Deserialize, Serialize};

/// Upstream search engine a result was extracted from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Google Images.
    #[serde(rename = "google")]
    Google,

    /// DuckDuckGo image search.
    #[serde(rename = "duckduckgo")]
    DuckDuckGo,

    /// Brave image search.
    #[serde(rename = "brave")]
    Brave,
}
impl Provider {
    /// All supported providers, in the order `search_all` queries them.
    pub const ALL: [Provider; 3] = [Provider::Google, Provider::DuckDuckGo, Provider::Brave];
}
impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Provider::Google => "Google",
                Provider::DuckDuckGo => "DuckDuckGo",
                Provider::Brave => "Brave",
            }
        )
    }
}

/// Safe search filtering level. Each provider maps it onto its own parameter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafeSearchLevel {
    /// No filtering.
    #[serde(rename = "off")]
    Off,

    /// Hide explicit results.
    #[serde(rename = "moderate")]
    Moderate,

    /// Strict filtering.
    #[serde(rename = "strict")]
    Strict,
}
impl std::fmt::Display for SafeSearchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SafeSearchLevel::Off => "off",
                SafeSearchLevel::Moderate => "moderate",
                SafeSearchLevel::Strict => "strict",
            }
        )
    }
}

/// Normalized image result shared by every provider.
///
/// `url` is always an absolute URL. `thumbnail_url` is either empty or an
/// absolute URL. A `width` or `height` of 0 means the provider did not report it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImageResult {
    /// URL pointing to the full-size image.
    pub url: String,

    /// Title of the result, usually the hosting page's title.
    pub title: String,

    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// URL pointing to the thumbnail image.
    pub thumbnail_url: String,

    /// URL of the web page hosting the image.
    pub source_url: String,

    /// Provider this result came from.
    pub provider: Provider,
}
impl AsRef<ImageResult> for ImageResult {
    fn as_ref(&self) -> &ImageResult {
        self
    }
}
impl std::fmt::Display for ImageResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
