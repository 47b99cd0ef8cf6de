use std::fmt;

use crate::types::SafeSearchLevel;

use super::common::{encode, Query, QueryCommon};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BraveImageSize {
    #[default]
    All,
    Small,
    Medium,
    Large,
    Wallpaper,
}
impl fmt::Display for BraveImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BraveImageSize::All => "All",
                BraveImageSize::Small => "Small",
                BraveImageSize::Medium => "Medium",
                BraveImageSize::Large => "Large",
                BraveImageSize::Wallpaper => "Wallpaper",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BraveImageType {
    #[default]
    All,
    Photo,
    Cliparts,
    AnimatedGifHttps,
    Transparent,
}
impl fmt::Display for BraveImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BraveImageType::All => "All",
                BraveImageType::Photo => "Photo",
                BraveImageType::Cliparts => "Cliparts",
                BraveImageType::AnimatedGifHttps => "AnimatedGifHttps",
                BraveImageType::Transparent => "Transparent",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BraveImageLayout {
    #[default]
    All,
    Square,
    Tall,
    Wide,
}
impl fmt::Display for BraveImageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BraveImageLayout::All => "All",
                BraveImageLayout::Square => "Square",
                BraveImageLayout::Tall => "Tall",
                BraveImageLayout::Wide => "Wide",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BraveImageColor {
    #[default]
    All,
    Monochrome,
    ColorOnly,
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
impl fmt::Display for BraveImageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BraveImageColor::All => "All",
                BraveImageColor::Monochrome => "Monochrome",
                BraveImageColor::ColorOnly => "ColorOnly",
                BraveImageColor::Red => "Red",
                BraveImageColor::Orange => "Orange",
                BraveImageColor::Yellow => "Yellow",
                BraveImageColor::Green => "Green",
                BraveImageColor::Blue => "Blue",
                BraveImageColor::Purple => "Purple",
                BraveImageColor::Pink => "Pink",
                BraveImageColor::Brown => "Brown",
                BraveImageColor::Black => "Black",
                BraveImageColor::Gray => "Gray",
                BraveImageColor::Teal => "Teal",
                BraveImageColor::White => "White",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BraveImageLicense {
    #[default]
    All,
    Public,
    Share,
    ShareCommercially,
    Modify,
    ModifyCommercially,
}
impl fmt::Display for BraveImageLicense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BraveImageLicense::All => "All",
                BraveImageLicense::Public => "Public",
                BraveImageLicense::Share => "Share",
                BraveImageLicense::ShareCommercially => "ShareCommercially",
                BraveImageLicense::Modify => "Modify",
                BraveImageLicense::ModifyCommercially => "ModifyCommercially",
            }
        )
    }
}

/// Brave image query. Safe search defaults to [`SafeSearchLevel::Moderate`],
/// which Brave applies when the parameter is omitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BraveQuery {
    pub common: QueryCommon,
    pub country: Option<String>,
    pub size: BraveImageSize,
    pub image_type: BraveImageType,
    pub layout: BraveImageLayout,
    pub color: BraveImageColor,
    pub license: BraveImageLicense,
}

impl Query for BraveQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
}

impl BraveQuery {
    pub fn new(text: &str) -> Self {
        BraveQuery {
            common: QueryCommon::new(text, SafeSearchLevel::Moderate),
            country: None,
            size: BraveImageSize::default(),
            image_type: BraveImageType::default(),
            layout: BraveImageLayout::default(),
            color: BraveImageColor::default(),
            license: BraveImageLicense::default(),
        }
    }

    /// Restricts results to a country code, e.g. `us`, or `all`.
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_size(mut self, size: BraveImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_image_type(mut self, image_type: BraveImageType) -> Self {
        self.image_type = image_type;
        self
    }

    pub fn with_layout(mut self, layout: BraveImageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_color(mut self, color: BraveImageColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_license(mut self, license: BraveImageLicense) -> Self {
        self.license = license;
        self
    }

    /// Relative request path for the images API.
    pub fn path(&self) -> String {
        let mut url = format!("images?q={}", self.common.encoded_text());
        match self.common.safe_search {
            SafeSearchLevel::Moderate => {}
            level => url.push_str(&format!("&safesearch={}", level)),
        }
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            url.push_str(&format!("&country={}", encode(country)));
        }
        if self.size != BraveImageSize::All {
            url.push_str(&format!("&size={}", self.size));
        }
        if self.image_type != BraveImageType::All {
            url.push_str(&format!("&_type={}", self.image_type));
        }
        if self.layout != BraveImageLayout::All {
            url.push_str(&format!("&layout={}", self.layout));
        }
        if self.color != BraveImageColor::All {
            url.push_str(&format!("&color={}", self.color));
        }
        if self.license != BraveImageLicense::All {
            url.push_str(&format!("&license={}", self.license));
        }
        url
    }
}
