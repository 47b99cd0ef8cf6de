mod client;
mod errors;
pub mod extract;
pub mod navigate;
pub mod providers;
mod query;
pub mod results;
pub mod types;
pub mod user_agent;
pub use self::client::{BaseUrls, Client, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::extract::ExtractError;
pub use self::query::{
    BraveImageColor, BraveImageLayout, BraveImageLicense, BraveImageSize, BraveImageType,
    BraveQuery, DuckDuckGoImageColor, DuckDuckGoImageLayout, DuckDuckGoImageLicense,
    DuckDuckGoImageSize, DuckDuckGoImageTime, DuckDuckGoImageType, DuckDuckGoQuery,
    GoogleImageColor, GoogleImageLicense, GoogleImageSize, GoogleImageTime, GoogleImageType,
    GoogleQuery, Query, QueryCommon, DEFAULT_REGION, MAX_QUERY_LENGTH,
};
pub use self::results::ResultIter;
