//! `#RRGGBB` colour values used by the branding tokens and the market theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// An opaque sRGB colour. Serialises as its `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, upper case (e.g. `#012169`).
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| SiteError::InvalidColor(s.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| SiteError::InvalidColor(s.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let navy: Color = "#012169".parse().unwrap();
        assert_eq!(navy, Color::rgb(0x01, 0x21, 0x69));
        assert_eq!(navy.to_css(), "#012169");

        let lower: Color = "#ea580c".parse().unwrap();
        assert_eq!(lower.to_css(), "#EA580C");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["012169", "#01216", "#0121699", "#GG2169", "", "#é12169", "#+1+2+3", "#-1-2-3"] {
            assert_eq!(
                bad.parse::<Color>(),
                Err(SiteError::InvalidColor(bad.to_string())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::rgb(200, 16, 46)).unwrap();
        assert_eq!(json, "\"#C8102E\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(200, 16, 46));
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
