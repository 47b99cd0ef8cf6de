use std::fmt;

use crate::types::{SafeSearchLevel, SessionToken};

use super::common::{encode, push_slots, Query, QueryCommon};

/// Longest query text DuckDuckGo accepts, in characters.
pub const MAX_QUERY_LENGTH: usize = 500;

/// Region used when none is set.
pub const DEFAULT_REGION: &str = "us-en";

/// Upload time filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuckDuckGoImageTime {
    #[default]
    Any,
    Day,
    Week,
    Month,
}
impl DuckDuckGoImageTime {
    fn slot(self) -> Option<String> {
        let code = match self {
            DuckDuckGoImageTime::Any => return None,
            DuckDuckGoImageTime::Day => "Day",
            DuckDuckGoImageTime::Week => "Week",
            DuckDuckGoImageTime::Month => "Month",
        };
        Some(format!("time:{}", code))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuckDuckGoImageSize {
    #[default]
    All,
    Small,
    Medium,
    Large,
    Wallpaper,
}
impl DuckDuckGoImageSize {
    fn slot(self) -> Option<String> {
        let code = match self {
            DuckDuckGoImageSize::All => return None,
            DuckDuckGoImageSize::Small => "Small",
            DuckDuckGoImageSize::Medium => "Medium",
            DuckDuckGoImageSize::Large => "Large",
            DuckDuckGoImageSize::Wallpaper => "Wallpaper",
        };
        Some(format!("size:{}", code))
    }
}

/// Color filter. `Color` restricts to color images, `Monochrome` to black and white.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuckDuckGoImageColor {
    #[default]
    All,
    Color,
    Monochrome,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Brown,
    Black,
    Gray,
    Teal,
    White,
}
impl fmt::Display for DuckDuckGoImageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DuckDuckGoImageColor::All => "all",
                DuckDuckGoImageColor::Color => "color",
                DuckDuckGoImageColor::Monochrome => "monochrome",
                DuckDuckGoImageColor::Red => "red",
                DuckDuckGoImageColor::Orange => "orange",
                DuckDuckGoImageColor::Yellow => "yellow",
                DuckDuckGoImageColor::Green => "green",
                DuckDuckGoImageColor::Blue => "blue",
                DuckDuckGoImageColor::Purple => "purple",
                DuckDuckGoImageColor::Pink => "pink",
                DuckDuckGoImageColor::Brown => "brown",
                DuckDuckGoImageColor::Black => "black",
                DuckDuckGoImageColor::Gray => "gray",
                DuckDuckGoImageColor::Teal => "teal",
                DuckDuckGoImageColor::White => "white",
            }
        )
    }
}
impl DuckDuckGoImageColor {
    fn slot(self) -> Option<String> {
        match self {
            DuckDuckGoImageColor::All => None,
            color => Some(format!("color:{}", color)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuckDuckGoImageType {
    #[default]
    All,
    Photo,
    Clipart,
    Gif,
    Transparent,
    Line,
}
impl DuckDuckGoImageType {
    fn slot(self) -> Option<String> {
        let code = match self {
            DuckDuckGoImageType::All => return None,
            DuckDuckGoImageType::Photo => "Photo",
            DuckDuckGoImageType::Clipart => "Clipart",
            DuckDuckGoImageType::Gif => "Gif",
            DuckDuckGoImageType::Transparent => "Transparent",
            DuckDuckGoImageType::Line => "Line",
        };
        Some(format!("type:{}", code))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuckDuckGoImageLayout {
    #[default]
    All,
    Square,
    Tall,
    Wide,
}
impl DuckDuckGoImageLayout {
    fn slot(self) -> Option<String> {
        let code = match self {
            DuckDuckGoImageLayout::All => return None,
            DuckDuckGoImageLayout::Square => "Square",
            DuckDuckGoImageLayout::Tall => "Tall",
            DuckDuckGoImageLayout::Wide => "Wide",
        };
        Some(format!("layout:{}", code))
    }
}

/// License filter. `All` sends no filter; `Any` asks for any Creative Commons license.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuckDuckGoImageLicense {
    #[default]
    All,
    Any,
    Public,
    Share,
    ShareCommercially,
    Modify,
    ModifyCommercially,
}
impl DuckDuckGoImageLicense {
    fn slot(self) -> Option<String> {
        let code = match self {
            DuckDuckGoImageLicense::All => return None,
            DuckDuckGoImageLicense::Any => "Any",
            DuckDuckGoImageLicense::Public => "Public",
            DuckDuckGoImageLicense::Share => "Share",
            DuckDuckGoImageLicense::ShareCommercially => "ShareCommercially",
            DuckDuckGoImageLicense::Modify => "Modify",
            DuckDuckGoImageLicense::ModifyCommercially => "ModifyCommercially",
        };
        Some(format!("license:{}", code))
    }
}

/// DuckDuckGo image query. Safe search defaults to [`SafeSearchLevel::Moderate`].
///
/// Searching takes two requests: [`DuckDuckGoQuery::token_path`] fetches the
/// landing page holding the session token, and [`DuckDuckGoQuery::path`]
/// builds the results request from that token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuckDuckGoQuery {
    pub common: QueryCommon,
    pub time: DuckDuckGoImageTime,
    pub size: DuckDuckGoImageSize,
    pub color: DuckDuckGoImageColor,
    pub image_type: DuckDuckGoImageType,
    pub layout: DuckDuckGoImageLayout,
    pub license: DuckDuckGoImageLicense,
    pub region: String,
}

impl Query for DuckDuckGoQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
}

impl DuckDuckGoQuery {
    pub fn new(text: &str) -> Self {
        DuckDuckGoQuery {
            common: QueryCommon::new(text, SafeSearchLevel::Moderate),
            time: DuckDuckGoImageTime::default(),
            size: DuckDuckGoImageSize::default(),
            color: DuckDuckGoImageColor::default(),
            image_type: DuckDuckGoImageType::default(),
            layout: DuckDuckGoImageLayout::default(),
            license: DuckDuckGoImageLicense::default(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn with_time(mut self, time: DuckDuckGoImageTime) -> Self {
        self.time = time;
        self
    }

    pub fn with_size(mut self, size: DuckDuckGoImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: DuckDuckGoImageColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_image_type(mut self, image_type: DuckDuckGoImageType) -> Self {
        self.image_type = image_type;
        self
    }

    pub fn with_layout(mut self, layout: DuckDuckGoImageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_license(mut self, license: DuckDuckGoImageLicense) -> Self {
        self.license = license;
        self
    }

    /// Sets the region code, e.g. `uk-en` or `wt-wt` for no region.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    /// True when the query text is within [`MAX_QUERY_LENGTH`] characters.
    pub fn is_within_length(&self) -> bool {
        self.common.text.chars().count() <= MAX_QUERY_LENGTH
    }

    /// Relative request path for the landing page that carries the token.
    pub fn token_path(&self) -> String {
        format!("?q={}", self.common.encoded_text())
    }

    /// Relative request path for the results document.
    pub fn path(&self, token: &SessionToken) -> String {
        let mut url = format!(
            "i.js?l={}&o=json&q={}&vqd={}&f=",
            encode(&self.region),
            self.common.encoded_text(),
            encode(token.as_str())
        );
        push_slots(
            &mut url,
            &[
                self.time.slot(),
                self.size.slot(),
                self.color.slot(),
                self.image_type.slot(),
                self.layout.slot(),
                self.license.slot(),
            ],
        );
        url.push_str(match self.common.safe_search {
            SafeSearchLevel::Off => "&p=-1",
            SafeSearchLevel::Moderate | SafeSearchLevel::Strict => "&p=1",
        });
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> SessionToken {
        SessionToken::new("4-123456789")
    }

    #[test]
    fn token_path() {
        insta::assert_snapshot!(DuckDuckGoQuery::new("blue whale").token_path(), @"?q=blue%20whale");
    }

    #[test]
    fn default_path() {
        insta::assert_snapshot!(
            DuckDuckGoQuery::new("cats").path(&token()),
            @"i.js?l=us-en&o=json&q=cats&vqd=4-123456789&f=,,,,,&p=1"
        );
    }

    #[test]
    fn every_filter_set() {
        let query = DuckDuckGoQuery::new("cats")
            .with_safe_search(SafeSearchLevel::Off)
            .with_time(DuckDuckGoImageTime::Month)
            .with_size(DuckDuckGoImageSize::Wallpaper)
            .with_color(DuckDuckGoImageColor::Monochrome)
            .with_image_type(DuckDuckGoImageType::Gif)
            .with_layout(DuckDuckGoImageLayout::Wide)
            .with_license(DuckDuckGoImageLicense::ModifyCommercially)
            .with_region("uk-en");
        insta::assert_snapshot!(
            query.path(&token()),
            @"i.js?l=uk-en&o=json&q=cats&vqd=4-123456789&f=time:Month,size:Wallpaper,color:monochrome,type:Gif,layout:Wide,license:ModifyCommercially&p=-1"
        );
    }

    #[test]
    fn license_any_differs_from_all() {
        let any = DuckDuckGoQuery::new("x").with_license(DuckDuckGoImageLicense::Any);
        assert!(any.path(&token()).contains("&f=,,,,,license:Any&p="));
    }

    #[test]
    fn strict_maps_to_filtered() {
        let query = DuckDuckGoQuery::new("x").with_safe_search(SafeSearchLevel::Strict);
        assert!(query.path(&token()).ends_with("&p=1"));
    }

    #[test]
    fn length_limit_counts_characters() {
        assert!(DuckDuckGoQuery::new(&"a".repeat(500)).is_within_length());
        assert!(!DuckDuckGoQuery::new(&"a".repeat(501)).is_within_length());
        assert!(DuckDuckGoQuery::new(&"é".repeat(500)).is_within_length());
    }
}
