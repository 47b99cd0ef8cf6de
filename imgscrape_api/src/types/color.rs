//! Accent colors reported alongside some results.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color.
///
/// A missing or unparseable color is represented as `Option::<Rgb>::None`,
/// never as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_color(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}'", raw)))
    }
}

/// Parses a `#RRGGBB` or `rgb(r,g,b)` token.
///
/// Returns `None` for anything else, including out-of-range components.
pub fn parse_color(raw: &str) -> Option<Rgb> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(body) = raw.strip_prefix("rgb(") {
        return parse_rgb(body);
    }
    None
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Rgb::new(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

fn parse_rgb(body: &str) -> Option<Rgb> {
    let inner = body.strip_suffix(')')?;
    let mut parts = inner.split(',');
    let r = component(parts.next()?)?;
    let g = component(parts.next()?)?;
    let b = component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}

fn component(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
