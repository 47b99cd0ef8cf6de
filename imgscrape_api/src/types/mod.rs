mod image;
pub use self::image::{ImageResult, Provider, SafeSearchLevel};

mod color;
pub use self::color::{parse_color, Rgb};

mod google;
pub use self::google::GoogleImageResult;

mod duckduckgo;
pub use self::duckduckgo::DuckDuckGoImageResult;

mod brave;
pub use self::brave::BraveImageResult;

mod token;
pub use self::token::SessionToken;
