//! Library layer for imgscrape: retrying search client, input validation, and
//! multi-provider search.
//!
//! Wraps the `imgscrape_api` scraper crate with retry on transient upstream
//! failures, result limits, and validation of user-supplied filter values.

pub mod client;
pub mod error;
pub mod validation;

pub use imgscrape_api;
pub use imgscrape_api::types;
pub use imgscrape_api::{
    BaseUrls, BraveImageColor, BraveImageLayout, BraveImageLicense, BraveImageSize,
    BraveImageType, BraveQuery, DuckDuckGoImageColor, DuckDuckGoImageLayout,
    DuckDuckGoImageLicense, DuckDuckGoImageSize, DuckDuckGoImageTime, DuckDuckGoImageType,
    DuckDuckGoQuery, GoogleImageColor, GoogleImageLicense, GoogleImageSize, GoogleImageTime,
    GoogleImageType, GoogleQuery, Query,
};

pub use client::{ProviderOutcome, ProviderResults, RetryConfig, SearchClient, SearchRequest};
pub use error::ImageScrapeError;
