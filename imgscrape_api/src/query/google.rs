use crate::types::SafeSearchLevel;

use super::common::{push_slots, Query, QueryCommon};

/// Image size filter (`isz`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoogleImageSize {
    #[default]
    Any,
    Large,
    Medium,
    Icon,
}
impl GoogleImageSize {
    fn slot(self) -> Option<String> {
        let code = match self {
            GoogleImageSize::Any => return None,
            GoogleImageSize::Large => "l",
            GoogleImageSize::Medium => "m",
            GoogleImageSize::Icon => "i",
        };
        Some(format!("isz:{}", code))
    }
}

/// Image color filter (`ic`). Named hues are sent as `specific,isc:{hue}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoogleImageColor {
    #[default]
    Any,
    BlackAndWhite,
    Transparent,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
    Pink,
    White,
    Gray,
    Black,
    Brown,
}
impl GoogleImageColor {
    fn slot(self) -> Option<String> {
        let hue = match self {
            GoogleImageColor::Any => return None,
            GoogleImageColor::BlackAndWhite => return Some("ic:gray".to_string()),
            GoogleImageColor::Transparent => return Some("ic:trans".to_string()),
            GoogleImageColor::Red => "red",
            GoogleImageColor::Orange => "orange",
            GoogleImageColor::Yellow => "yellow",
            GoogleImageColor::Green => "green",
            GoogleImageColor::Teal => "teal",
            GoogleImageColor::Blue => "blue",
            GoogleImageColor::Purple => "purple",
            GoogleImageColor::Pink => "pink",
            GoogleImageColor::White => "white",
            GoogleImageColor::Gray => "gray",
            GoogleImageColor::Black => "black",
            GoogleImageColor::Brown => "brown",
        };
        Some(format!("ic:specific,isc:{}", hue))
    }
}

/// Image type filter (`itp`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoogleImageType {
    #[default]
    Any,
    Face,
    Photo,
    ClipArt,
    LineArt,
    Animated,
}
impl GoogleImageType {
    fn slot(self) -> Option<String> {
        let code = match self {
            GoogleImageType::Any => return None,
            GoogleImageType::Face => "face",
            GoogleImageType::Photo => "photo",
            GoogleImageType::ClipArt => "clipart",
            GoogleImageType::LineArt => "lineart",
            GoogleImageType::Animated => "animated",
        };
        Some(format!("itp:{}", code))
    }
}

/// Upload time filter (`qdr`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoogleImageTime {
    #[default]
    Any,
    Day,
    Week,
    Month,
    Year,
}
impl GoogleImageTime {
    fn slot(self) -> Option<String> {
        let code = match self {
            GoogleImageTime::Any => return None,
            GoogleImageTime::Day => "d",
            GoogleImageTime::Week => "w",
            GoogleImageTime::Month => "m",
            GoogleImageTime::Year => "y",
        };
        Some(format!("qdr:{}", code))
    }
}

/// Usage rights filter (`il`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoogleImageLicense {
    #[default]
    Any,
    CreativeCommons,
    Commercial,
}
impl GoogleImageLicense {
    fn slot(self) -> Option<String> {
        let code = match self {
            GoogleImageLicense::Any => return None,
            GoogleImageLicense::CreativeCommons => "cl",
            GoogleImageLicense::Commercial => "ol",
        };
        Some(format!("il:{}", code))
    }
}

/// Google Images query. Safe search defaults to [`SafeSearchLevel::Off`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoogleQuery {
    pub common: QueryCommon,
    pub size: GoogleImageSize,
    pub color: GoogleImageColor,
    pub image_type: GoogleImageType,
    pub time: GoogleImageTime,
    pub license: GoogleImageLicense,
    pub language: Option<String>,
}

impl Query for GoogleQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
}

impl GoogleQuery {
    pub fn new(text: &str) -> Self {
        GoogleQuery {
            common: QueryCommon::new(text, SafeSearchLevel::Off),
            size: GoogleImageSize::default(),
            color: GoogleImageColor::default(),
            image_type: GoogleImageType::default(),
            time: GoogleImageTime::default(),
            license: GoogleImageLicense::default(),
            language: None,
        }
    }

    pub fn with_size(mut self, size: GoogleImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: GoogleImageColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_image_type(mut self, image_type: GoogleImageType) -> Self {
        self.image_type = image_type;
        self
    }

    pub fn with_time(mut self, time: GoogleImageTime) -> Self {
        self.time = time;
        self
    }

    pub fn with_license(mut self, license: GoogleImageLicense) -> Self {
        self.license = license;
        self
    }

    /// Restricts results to a language, e.g. `en` or `zh-TW`.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Relative request path for the JSON endpoint.
    pub fn path(&self) -> String {
        self.build("&async=_fmt:json,p:1")
    }

    /// Relative request path for the classic HTML results page.
    pub fn html_path(&self) -> String {
        self.build("")
    }

    fn build(&self, format: &str) -> String {
        let mut url = format!(
            "?q={}&tbm=isch&asearch=isch{}&tbs=",
            self.common.encoded_text(),
            format
        );
        push_slots(
            &mut url,
            &[
                self.size.slot(),
                self.color.slot(),
                self.image_type.slot(),
                self.time.slot(),
                self.license.slot(),
            ],
        );
        url.push_str("&safe=");
        url.push_str(match self.common.safe_search {
            SafeSearchLevel::Off => "off",
            SafeSearchLevel::Moderate | SafeSearchLevel::Strict => "active",
        });
        if let Some(language) = self.language.as_deref().filter(|l| !l.is_empty()) {
            url.push_str(&format!("&lr=lang_{}&hl={}", language, language));
        }
        url
    }
}
