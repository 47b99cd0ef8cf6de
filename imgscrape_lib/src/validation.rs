//! Validation of user input before it reaches a query builder.
//!
//! Free text is sanitized; codes are normalized to the case each provider
//! expects; filter names are parsed case-insensitively, ignoring `-`, `_`
//! and spaces, so `clip-art`, `ClipArt` and `clip_art` are equivalent.

use imgscrape_api::types::SafeSearchLevel;
use imgscrape_api::{
    BraveImageColor, BraveImageLayout, BraveImageLicense, BraveImageSize, BraveImageType,
    DuckDuckGoImageColor, DuckDuckGoImageLayout, DuckDuckGoImageLicense, DuckDuckGoImageSize,
    DuckDuckGoImageTime, DuckDuckGoImageType, GoogleImageColor, GoogleImageLicense,
    GoogleImageSize, GoogleImageTime, GoogleImageType,
};
use regex::Regex;

use crate::error::ImageScrapeError;

pub use imgscrape_api::MAX_QUERY_LENGTH;

/// Upper bound on results kept per provider.
pub const MAX_LIMIT: usize = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a limit in characters on the result.
pub fn sanitize_text(input: &str, max_chars: usize) -> Result<String, ImageScrapeError> {
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(ImageScrapeError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    if sanitized.chars().count() > max_chars {
        return Err(ImageScrapeError::InvalidInput(format!(
            "input exceeds maximum length of {} characters",
            max_chars
        )));
    }
    Ok(sanitized)
}

/// Validate search text for Google and Brave: strip control chars, trim.
/// Neither provider caps the query length.
pub fn validate_query(input: &str) -> Result<String, ImageScrapeError> {
    sanitize_text(input, usize::MAX)
}

/// Validate search text for DuckDuckGo, which rejects queries longer than
/// [`MAX_QUERY_LENGTH`] characters.
pub fn validate_duckduckgo_query(input: &str) -> Result<String, ImageScrapeError> {
    sanitize_text(input, MAX_QUERY_LENGTH)
}

fn is_match(pattern: &str, input: &str) -> Result<bool, ImageScrapeError> {
    let re = Regex::new(pattern).map_err(|e| {
        ImageScrapeError::InvalidInput(format!("regex compile error: {}", e))
    })?;
    Ok(re.is_match(input))
}

/// Validate a DuckDuckGo region code such as `us-en`, `es-ca` or `wt-wt`.
pub fn validate_region(input: &str) -> Result<String, ImageScrapeError> {
    let lower = input.trim().to_lowercase();
    if is_match(r"^[a-z]{2}-[a-z]{2,3}$", &lower)? {
        Ok(lower)
    } else {
        Err(ImageScrapeError::InvalidInput(format!(
            "invalid region '{}'. Expected a code like us-en, uk-en or wt-wt (no region)",
            input
        )))
    }
}

/// Validate a Brave country code: two letters, or `all`.
pub fn validate_country(input: &str) -> Result<String, ImageScrapeError> {
    let lower = input.trim().to_lowercase();
    if lower == "all" || is_match(r"^[a-z]{2}$", &lower)? {
        Ok(lower)
    } else {
        Err(ImageScrapeError::InvalidInput(format!(
            "invalid country '{}'. Expected a two-letter code like us or de, or all",
            input
        )))
    }
}

/// Validate a Google language code such as `en`, `fil` or `zh-TW`.
pub fn validate_language(input: &str) -> Result<String, ImageScrapeError> {
    let trimmed = input.trim();
    if !is_match(r"^[A-Za-z]{2,3}(-[A-Za-z]{2})?$", trimmed)? {
        return Err(ImageScrapeError::InvalidInput(format!(
            "invalid language '{}'. Expected a code like en, de or zh-TW",
            input
        )));
    }
    Ok(match trimmed.split_once('-') {
        Some((lang, region)) => format!("{}-{}", lang.to_lowercase(), region.to_uppercase()),
        None => trimmed.to_lowercase(),
    })
}

/// Validate a result limit: 1 to [`MAX_LIMIT`].
pub fn validate_limit(limit: usize) -> Result<usize, ImageScrapeError> {
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(ImageScrapeError::InvalidInput(format!(
            "limit must be between 1 and {}, got {}",
            MAX_LIMIT, limit
        )))
    }
}

fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_choice<T: Copy>(
    kind: &str,
    input: &str,
    choices: &[(&str, T)],
) -> Result<T, ImageScrapeError> {
    let key = normalize(input);
    choices
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            let valid: Vec<&str> = choices.iter().map(|(name, _)| *name).collect();
            ImageScrapeError::InvalidInput(format!(
                "unknown {} '{}'. Valid values: {}",
                kind,
                input,
                valid.join(", ")
            ))
        })
}

pub fn validate_safe_search(input: &str) -> Result<SafeSearchLevel, ImageScrapeError> {
    parse_choice(
        "safe search level",
        input,
        &[
            ("off", SafeSearchLevel::Off),
            ("moderate", SafeSearchLevel::Moderate),
            ("strict", SafeSearchLevel::Strict),
        ],
    )
}

// -- Google filters --

pub fn validate_google_size(input: &str) -> Result<GoogleImageSize, ImageScrapeError> {
    parse_choice(
        "size",
        input,
        &[
            ("any", GoogleImageSize::Any),
            ("large", GoogleImageSize::Large),
            ("medium", GoogleImageSize::Medium),
            ("icon", GoogleImageSize::Icon),
        ],
    )
}

pub fn validate_google_color(input: &str) -> Result<GoogleImageColor, ImageScrapeError> {
    parse_choice(
        "color",
        input,
        &[
            ("any", GoogleImageColor::Any),
            ("blackandwhite", GoogleImageColor::BlackAndWhite),
            ("transparent", GoogleImageColor::Transparent),
            ("red", GoogleImageColor::Red),
            ("orange", GoogleImageColor::Orange),
            ("yellow", GoogleImageColor::Yellow),
            ("green", GoogleImageColor::Green),
            ("teal", GoogleImageColor::Teal),
            ("blue", GoogleImageColor::Blue),
            ("purple", GoogleImageColor::Purple),
            ("pink", GoogleImageColor::Pink),
            ("white", GoogleImageColor::White),
            ("gray", GoogleImageColor::Gray),
            ("black", GoogleImageColor::Black),
            ("brown", GoogleImageColor::Brown),
        ],
    )
}

pub fn validate_google_type(input: &str) -> Result<GoogleImageType, ImageScrapeError> {
    parse_choice(
        "image type",
        input,
        &[
            ("any", GoogleImageType::Any),
            ("face", GoogleImageType::Face),
            ("photo", GoogleImageType::Photo),
            ("clipart", GoogleImageType::ClipArt),
            ("lineart", GoogleImageType::LineArt),
            ("animated", GoogleImageType::Animated),
        ],
    )
}

pub fn validate_google_time(input: &str) -> Result<GoogleImageTime, ImageScrapeError> {
    parse_choice(
        "time range",
        input,
        &[
            ("any", GoogleImageTime::Any),
            ("day", GoogleImageTime::Day),
            ("week", GoogleImageTime::Week),
            ("month", GoogleImageTime::Month),
            ("year", GoogleImageTime::Year),
        ],
    )
}

pub fn validate_google_license(input: &str) -> Result<GoogleImageLicense, ImageScrapeError> {
    parse_choice(
        "license",
        input,
        &[
            ("any", GoogleImageLicense::Any),
            ("creativecommons", GoogleImageLicense::CreativeCommons),
            ("commercial", GoogleImageLicense::Commercial),
        ],
    )
}

// -- DuckDuckGo filters --

pub fn validate_duckduckgo_time(input: &str) -> Result<DuckDuckGoImageTime, ImageScrapeError> {
    parse_choice(
        "time range",
        input,
        &[
            ("any", DuckDuckGoImageTime::Any),
            ("day", DuckDuckGoImageTime::Day),
            ("week", DuckDuckGoImageTime::Week),
            ("month", DuckDuckGoImageTime::Month),
        ],
    )
}

pub fn validate_duckduckgo_size(input: &str) -> Result<DuckDuckGoImageSize, ImageScrapeError> {
    parse_choice(
        "size",
        input,
        &[
            ("all", DuckDuckGoImageSize::All),
            ("small", DuckDuckGoImageSize::Small),
            ("medium", DuckDuckGoImageSize::Medium),
            ("large", DuckDuckGoImageSize::Large),
            ("wallpaper", DuckDuckGoImageSize::Wallpaper),
        ],
    )
}

pub fn validate_duckduckgo_color(input: &str) -> Result<DuckDuckGoImageColor, ImageScrapeError> {
    parse_choice(
        "color",
        input,
        &[
            ("all", DuckDuckGoImageColor::All),
            ("color", DuckDuckGoImageColor::Color),
            ("monochrome", DuckDuckGoImageColor::Monochrome),
            ("red", DuckDuckGoImageColor::Red),
            ("orange", DuckDuckGoImageColor::Orange),
            ("yellow", DuckDuckGoImageColor::Yellow),
            ("green", DuckDuckGoImageColor::Green),
            ("blue", DuckDuckGoImageColor::Blue),
            ("purple", DuckDuckGoImageColor::Purple),
            ("pink", DuckDuckGoImageColor::Pink),
            ("brown", DuckDuckGoImageColor::Brown),
            ("black", DuckDuckGoImageColor::Black),
            ("gray", DuckDuckGoImageColor::Gray),
            ("teal", DuckDuckGoImageColor::Teal),
            ("white", DuckDuckGoImageColor::White),
        ],
    )
}

pub fn validate_duckduckgo_type(input: &str) -> Result<DuckDuckGoImageType, ImageScrapeError> {
    parse_choice(
        "image type",
        input,
        &[
            ("all", DuckDuckGoImageType::All),
            ("photo", DuckDuckGoImageType::Photo),
            ("clipart", DuckDuckGoImageType::Clipart),
            ("gif", DuckDuckGoImageType::Gif),
            ("transparent", DuckDuckGoImageType::Transparent),
            ("line", DuckDuckGoImageType::Line),
        ],
    )
}

pub fn validate_duckduckgo_layout(
    input: &str,
) -> Result<DuckDuckGoImageLayout, ImageScrapeError> {
    parse_choice(
        "layout",
        input,
        &[
            ("all", DuckDuckGoImageLayout::All),
            ("square", DuckDuckGoImageLayout::Square),
            ("tall", DuckDuckGoImageLayout::Tall),
            ("wide", DuckDuckGoImageLayout::Wide),
        ],
    )
}

pub fn validate_duckduckgo_license(
    input: &str,
) -> Result<DuckDuckGoImageLicense, ImageScrapeError> {
    parse_choice(
        "license",
        input,
        &[
            ("all", DuckDuckGoImageLicense::All),
            ("any", DuckDuckGoImageLicense::Any),
            ("public", DuckDuckGoImageLicense::Public),
            ("share", DuckDuckGoImageLicense::Share),
            ("sharecommercially", DuckDuckGoImageLicense::ShareCommercially),
            ("modify", DuckDuckGoImageLicense::Modify),
            ("modifycommercially", DuckDuckGoImageLicense::ModifyCommercially),
        ],
    )
}

// -- Brave filters --

pub fn validate_brave_size(input: &str) -> Result<BraveImageSize, ImageScrapeError> {
    parse_choice(
        "size",
        input,
        &[
            ("all", BraveImageSize::All),
            ("small", BraveImageSize::Small),
            ("medium", BraveImageSize::Medium),
            ("large", BraveImageSize::Large),
            ("wallpaper", BraveImageSize::Wallpaper),
        ],
    )
}

pub fn validate_brave_type(input: &str) -> Result<BraveImageType, ImageScrapeError> {
    parse_choice(
        "image type",
        input,
        &[
            ("all", BraveImageType::All),
            ("photo", BraveImageType::Photo),
            ("cliparts", BraveImageType::Cliparts),
            ("animatedgifhttps", BraveImageType::AnimatedGifHttps),
            ("transparent", BraveImageType::Transparent),
        ],
    )
}

pub fn validate_brave_layout(input: &str) -> Result<BraveImageLayout, ImageScrapeError> {
    parse_choice(
        "layout",
        input,
        &[
            ("all", BraveImageLayout::All),
            ("square", BraveImageLayout::Square),
            ("tall", BraveImageLayout::Tall),
            ("wide", BraveImageLayout::Wide),
        ],
    )
}

pub fn validate_brave_color(input: &str) -> Result<BraveImageColor, ImageScrapeError> {
    parse_choice(
        "color",
        input,
        &[
            ("all", BraveImageColor::All),
            ("monochrome", BraveImageColor::Monochrome),
            ("coloronly", BraveImageColor::ColorOnly),
            ("red", BraveImageColor::Red),
            ("orange", BraveImageColor::Orange),
            ("yellow", BraveImageColor::Yellow),
            ("green", BraveImageColor::Green),
            ("blue", BraveImageColor::Blue),
            ("purple", BraveImageColor::Purple),
            ("pink", BraveImageColor::Pink),
            ("brown", BraveImageColor::Brown),
            ("black", BraveImageColor::Black),
            ("gray", BraveImageColor::Gray),
            ("teal", BraveImageColor::Teal),
            ("white", BraveImageColor::White),
        ],
    )
}

pub fn validate_brave_license(input: &str) -> Result<BraveImageLicense, ImageScrapeError> {
    parse_choice(
        "license",
        input,
        &[
            ("all", BraveImageLicense::All),
            ("public", BraveImageLicense::Public),
            ("share", BraveImageLicense::Share),
            ("sharecommercially", BraveImageLicense::ShareCommercially),
            ("modify", BraveImageLicense::Modify),
            ("modifycommercially", BraveImageLicense::ModifyCommercially),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Free text --

    #[test]
    fn query_strips_control_chars_and_trims() {
        assert_eq!(validate_query("  cats\t\n dogs ").unwrap(), "cats dogs");
    }

    #[test]
    fn query_empty_after_sanitization() {
        assert!(validate_query(" \n\t ").is_err());
        assert!(validate_query("").is_err());
    }

    #[test]
    fn query_length_is_not_capped_for_google_and_brave() {
        assert!(validate_query(&"a".repeat(2000)).is_ok());
    }

    #[test]
    fn duckduckgo_query_length_limit() {
        assert!(validate_duckduckgo_query(&"a".repeat(500)).is_ok());
        let err = validate_duckduckgo_query(&"a".repeat(501)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: input exceeds maximum length of 500 characters"
        );
    }

    #[test]
    fn duckduckgo_query_length_counts_characters() {
        for count in [200, 500, 501] {
            let text = "猫".repeat(count);
            let accepted = validate_duckduckgo_query(&text).is_ok();
            assert_eq!(accepted, count <= 500);
            assert_eq!(
                accepted,
                imgscrape_api::DuckDuckGoQuery::new(&text).is_within_length()
            );
        }
    }

    #[test]
    fn duckduckgo_query_limit_applies_after_trimming() {
        let padded = format!("  {}  ", "a".repeat(500));
        assert_eq!(validate_duckduckgo_query(&padded).unwrap().len(), 500);
    }

    // -- Codes --

    #[test]
    fn region_codes() {
        assert_eq!(validate_region("US-EN").unwrap(), "us-en");
        assert_eq!(validate_region("wt-wt").unwrap(), "wt-wt");
        assert_eq!(validate_region("es-ca").unwrap(), "es-ca");
        assert_eq!(validate_region("xa-ara").unwrap(), "xa-ara");
        assert!(validate_region("usen").is_err());
        assert!(validate_region("us_en").is_err());
        assert!(validate_region("").is_err());
    }

    #[test]
    fn country_codes() {
        assert_eq!(validate_country("DE").unwrap(), "de");
        assert_eq!(validate_country("All").unwrap(), "all");
        assert!(validate_country("deu").is_err());
    }

    #[test]
    fn language_codes() {
        assert_eq!(validate_language("EN").unwrap(), "en");
        assert_eq!(validate_language("zh-tw").unwrap(), "zh-TW");
        assert_eq!(validate_language("fil").unwrap(), "fil");
        assert!(validate_language("english").is_err());
        assert!(validate_language("en-").is_err());
    }

    #[test]
    fn limit_range() {
        assert_eq!(validate_limit(1).unwrap(), 1);
        assert_eq!(validate_limit(100).unwrap(), 100);
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(101).is_err());
    }

    // -- Filters --

    #[test]
    fn safe_search_levels() {
        assert_eq!(validate_safe_search("OFF").unwrap(), SafeSearchLevel::Off);
        assert_eq!(validate_safe_search("strict").unwrap(), SafeSearchLevel::Strict);
        assert!(validate_safe_search("medium").is_err());
    }

    #[test]
    fn filter_names_ignore_case_and_separators() {
        assert_eq!(validate_google_type("clip-art").unwrap(), GoogleImageType::ClipArt);
        assert_eq!(validate_google_type("ClipArt").unwrap(), GoogleImageType::ClipArt);
        assert_eq!(
            validate_google_color("black_and_white").unwrap(),
            GoogleImageColor::BlackAndWhite
        );
        assert_eq!(
            validate_duckduckgo_license("share commercially").unwrap(),
            DuckDuckGoImageLicense::ShareCommercially
        );
        assert_eq!(
            validate_brave_type("animated-gif-https").unwrap(),
            BraveImageType::AnimatedGifHttps
        );
    }

    #[test]
    fn unknown_filter_lists_valid_values() {
        let err = validate_brave_layout("round").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: unknown layout 'round'. Valid values: all, square, tall, wide"
        );
    }

    #[test]
    fn every_provider_parser_accepts_its_default() {
        assert_eq!(validate_google_size("any").unwrap(), GoogleImageSize::Any);
        assert_eq!(validate_google_time("any").unwrap(), GoogleImageTime::Any);
        assert_eq!(validate_google_license("any").unwrap(), GoogleImageLicense::Any);
        assert_eq!(validate_duckduckgo_time("any").unwrap(), DuckDuckGoImageTime::Any);
        assert_eq!(validate_duckduckgo_size("all").unwrap(), DuckDuckGoImageSize::All);
        assert_eq!(validate_duckduckgo_color("all").unwrap(), DuckDuckGoImageColor::All);
        assert_eq!(validate_duckduckgo_type("all").unwrap(), DuckDuckGoImageType::All);
        assert_eq!(validate_duckduckgo_layout("all").unwrap(), DuckDuckGoImageLayout::All);
        assert_eq!(validate_brave_size("all").unwrap(), BraveImageSize::All);
        assert_eq!(validate_brave_color("all").unwrap(), BraveImageColor::All);
        assert_eq!(validate_brave_license("all").unwrap(), BraveImageLicense::All);
    }
}
