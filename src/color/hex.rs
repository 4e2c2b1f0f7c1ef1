//! Canonical `#rrggbb` color strings
//!
//! `HexColor` is the textual form palette stores hand us. Parsing is strict:
//! a leading `#` followed by exactly six hexadecimal digits. Upper-case
//! digits are accepted and canonicalized to lower case, so every value of
//! this type is bijective with an 8-bit sRGB triple.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RgbColor;
use crate::{MatchError, Result};

/// A validated, lower-case `#rrggbb` color string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    channels: [u8; 3],
}

impl HexColor {
    /// Parse and canonicalize a `#rrggbb` string
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidColorFormat` if the leading `#` is missing,
    /// the digit count is not six, or any digit is not hexadecimal.
    pub fn parse(value: &str) -> Result<Self> {
        let Some(digits) = value.strip_prefix('#') else {
            return Err(MatchError::invalid_color(value, "missing leading '#'"));
        };
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(MatchError::invalid_color(
                value,
                format!("{bad:?} is not a hex digit"),
            ));
        }
        if digits.len() != 6 {
            return Err(MatchError::invalid_color(
                value,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }

        let mut channels = [0u8; 3];
        for (channel, at) in channels.iter_mut().zip([0, 2, 4]) {
            *channel = u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|e| MatchError::invalid_color(value, e.to_string()))?;
        }
        Ok(Self {
            text: format!("#{}", digits.to_ascii_lowercase()),
            channels,
        })
    }

    /// The canonical string, e.g. `"#ff0011"`
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The 8-bit sRGB triple, decoded when the string was parsed
    pub fn to_rgb(&self) -> RgbColor {
        let [red, green, blue] = self.channels;
        RgbColor::new(red, green, blue)
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self {
            text: format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue),
            channels: [rgb.red, rgb.green, rgb.blue],
        }
    }
}

impl FromStr for HexColor {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
