// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Border colors.

use core::fmt;
use core::ops::Range;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BorderError;

/// Opaque 24-bit RGB color.
///
/// Components are `u8`, so every value is in range by construction. The
/// border model never inspects a color beyond equality; serializers pick the
/// textual form they need ([`Color::to_hex`] or [`Color::to_argb`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// `000000`, the default border color.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// `FFFFFF`.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// `FF0000`.
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    /// `C00000`.
    pub const DARK_RED: Self = Self::rgb(0xC0, 0x00, 0x00);
    /// `FFC000`.
    pub const ORANGE: Self = Self::rgb(0xFF, 0xC0, 0x00);
    /// `FFFF00`.
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
    /// `92D040`.
    pub const LIGHT_GREEN: Self = Self::rgb(0x92, 0xD0, 0x40);
    /// `00B050`.
    pub const GREEN: Self = Self::rgb(0x00, 0xB0, 0x50);
    /// `00B0E0`.
    pub const LIGHT_BLUE: Self = Self::rgb(0x00, 0xB0, 0xE0);
    /// `0070C0`.
    pub const BLUE: Self = Self::rgb(0x00, 0x70, 0xC0);
    /// `002060`.
    pub const DARK_BLUE: Self = Self::rgb(0x00, 0x20, 0x60);
    /// `7030A0`.
    pub const PURPLE: Self = Self::rgb(0x70, 0x30, 0xA0);

    /// Create a color from its red, green and blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red component.
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Green component.
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Blue component.
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Parse a six-digit `RRGGBB` hex string (either case, no `#`).
    pub fn from_hex(value: &str) -> Result<Self, BorderError> {
        let invalid = || BorderError::InvalidColor {
            value: value.to_owned(),
        };
        // from_str_radix tolerates a leading sign, so check digits up front.
        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: Range<usize>| u8::from_str_radix(&value[range], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Upper-case `RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Fully opaque `FFRRGGBB` form used by spreadsheet style sheets.
    pub fn to_argb(&self) -> String {
        format!("FF{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = BorderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn hex_round_trip_is_case_insensitive() {
        let c = Color::from_hex("c0ffee").unwrap();
        assert_eq!(c, Color::rgb(0xC0, 0xFF, 0xEE));
        assert_eq!(c.to_hex(), "C0FFEE");
        assert_eq!(c.to_string(), "C0FFEE");
    }

    #[test]
    fn argb_is_opaque() {
        assert_eq!(Color::DARK_BLUE.to_argb(), "FF002060");
        assert_eq!(Color::BLACK.to_argb(), "FF000000");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["", "FFF", "#FF0000", "+F0000", "GG0000", "FF00000"] {
            assert_eq!(
                Color::from_hex(bad),
                Err(BorderError::InvalidColor { value: bad.into() }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::PURPLE).unwrap();
        assert_eq!(json, "\"7030A0\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::PURPLE);
        assert!(serde_json::from_str::<Color>("\"purple\"").is_err());
    }
}
