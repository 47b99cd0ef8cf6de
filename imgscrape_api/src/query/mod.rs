mod common;
pub use self::common::{Query, QueryCommon};

mod google;
pub use self::google::{
    GoogleImageColor, GoogleImageLicense, GoogleImageSize, GoogleImageTime, GoogleImageType,
    GoogleQuery,
};

mod duckduckgo;
pub use self::duckduckgo::{
    DuckDuckGoImageColor, DuckDuckGoImageLayout, DuckDuckGoImageLicense, DuckDuckGoImageSize,
    DuckDuckGoImageTime, DuckDuckGoImageType, DuckDuckGoQuery, DEFAULT_REGION, MAX_QUERY_LENGTH,
};

mod brave;
pub use self::brave::{
    BraveImageColor, BraveImageLayout, BraveImageLicense, BraveImageSize, BraveImageType,
    BraveQuery,
};
