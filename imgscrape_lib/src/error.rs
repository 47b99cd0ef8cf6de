//! Error types for the library layer.

use std::fmt;

use imgscrape_api::types::Provider;

/// Errors produced by the library layer, wrapping scraper errors and adding
/// input validation failures.
#[derive(Debug)]
pub enum ImageScrapeError {
    /// An error from the underlying scraper client.
    Api(imgscrape_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl ImageScrapeError {
    /// Provider the error came from, when it came from a provider at all.
    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::Api(e) => Some(e.provider()),
            _ => None,
        }
    }

    /// True for upstream failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_transient(),
            _ => false,
        }
    }
}

impl fmt::Display for ImageScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ImageScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<imgscrape_api::Error> for ImageScrapeError {
    fn from(e: imgscrape_api::Error) -> Self {
        Self::Api(e)
    }
}
