// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hex colors as stored in card templates.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use peniko::Color;

use crate::CardSide;

/// Why a hex color string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    #[error("color `{input}` must start with `#`")]
    MissingHash {
        /// The rejected text.
        input: String,
    },
    /// The string has a digit count other than 3, 6 or 8.
    #[error("color `{input}` must have 3, 6 or 8 hex digits")]
    InvalidLength {
        /// The rejected text.
        input: String,
    },
    /// The string contains a character that is not a hex digit.
    #[error("color `{input}` contains non-hex character `{ch}`")]
    InvalidDigit {
        /// The rejected text.
        input: String,
        /// The first offending character.
        ch: char,
    },
}

/// An 8-bit sRGB color with alpha, written as `#RRGGBB` or `#RRGGBBAA`.
///
/// Templates keep colors as text; this type validates that text once and
/// converts to [`peniko::Color`] for drawing.
///
/// ```
/// use lanyard_card::CardColor;
///
/// let blue: CardColor = "#dbeafe".parse().unwrap();
/// assert_eq!(blue.to_string(), "#DBEAFE");
///
/// let short: CardColor = "#fff".parse().unwrap();
/// assert_eq!(short, CardColor::WHITE);
///
/// assert!("DBEAFE".parse::<CardColor>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardColor {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl CardColor {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`, case-insensitively.
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let Some(digits) = input.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash {
                input: String::from(input),
            });
        };
        if let Some(ch) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                input: String::from(input),
                ch,
            });
        }
        let nibbles = digits.as_bytes();
        let channel = |i: usize| (hex_value(nibbles[i]) << 4) | hex_value(nibbles[i + 1]);
        match nibbles.len() {
            3 => {
                let expand = |i: usize| hex_value(nibbles[i]) * 0x11;
                Ok(Self::rgb(expand(0), expand(1), expand(2)))
            }
            6 => Ok(Self::rgb(channel(0), channel(2), channel(4))),
            8 => Ok(Self {
                a: channel(6),
                ..Self::rgb(channel(0), channel(2), channel(4))
            }),
            _ => Err(ColorParseError::InvalidLength {
                input: String::from(input),
            }),
        }
    }

    /// Returns `true` if the color is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 0xFF
    }

    /// Uppercase hex form; the alpha pair is only written when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// The same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Converts to a drawing color.
    #[must_use]
    pub fn to_peniko(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

// Callers check digits with `is_ascii_hexdigit` first.
fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}

impl From<CardColor> for Color {
    fn from(color: CardColor) -> Self {
        color.to_peniko()
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for CardColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// The quick background presets offered for `side`.
#[must_use]
pub fn background_presets(side: CardSide) -> [CardColor; 6] {
    match side {
        CardSide::Front => [
            CardColor::WHITE,
            CardColor::rgb(0xF8, 0xF9, 0xFA),
            CardColor::rgb(0xE5, 0xE7, 0xEB),
            CardColor::rgb(0xDB, 0xEA, 0xFE),
            CardColor::rgb(0xFE, 0xF3, 0xC7),
            CardColor::rgb(0xD1, 0xFA, 0xE5),
        ],
        CardSide::Back => [
            CardColor::WHITE,
            CardColor::rgb(0xF8, 0xF9, 0xFA),
            CardColor::rgb(0xE5, 0xE7, 0xEB),
            CardColor::rgb(0xF3, 0xF4, 0xF6),
            CardColor::rgb(0xFE, 0xF3, 0xC7),
            CardColor::rgb(0xDB, 0xEA, 0xFE),
        ],
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::CardColor;
    use alloc::string::String;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for CardColor {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    impl<'de> Deserialize<'de> for CardColor {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_lengths() {
        assert_eq!(
            CardColor::parse_hex("#1a2B3c"),
            Ok(CardColor::rgb(0x1A, 0x2B, 0x3C))
        );
        assert_eq!(
            CardColor::parse_hex("#abc"),
            Ok(CardColor::rgb(0xAA, 0xBB, 0xCC))
        );
        assert_eq!(
            CardColor::parse_hex("#00000080"),
            Ok(CardColor::BLACK.with_alpha(0x80))
        );
    }

    #[test]
    fn reports_each_failure() {
        assert!(matches!(
            CardColor::parse_hex("fff"),
            Err(ColorParseError::MissingHash { .. })
        ));
        assert!(matches!(
            CardColor::parse_hex("#ffff"),
            Err(ColorParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            CardColor::parse_hex("#ffgfff"),
            Err(ColorParseError::InvalidDigit { ch: 'g', .. })
        ));
        // Multi-byte input is rejected before slicing.
        assert!(matches!(
            CardColor::parse_hex("#ééé"),
            Err(ColorParseError::InvalidDigit { ch: 'é', .. })
        ));
    }

    #[test]
    fn hex_output_round_trips() {
        for text in ["#FEF3C7", "#00000080"] {
            assert_eq!(CardColor::parse_hex(text).unwrap().to_hex(), text);
        }
    }

    #[test]
    fn presets_start_with_white() {
        for side in [CardSide::Front, CardSide::Back] {
            assert_eq!(background_presets(side)[0], CardColor::WHITE);
        }
        assert_ne!(
            background_presets(CardSide::Front),
            background_presets(CardSide::Back)
        );
    }

    #[test]
    fn converts_to_peniko() {
        let rgba = CardColor::rgb(1, 2, 3).with_alpha(4).to_peniko().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (1, 2, 3, 4));
    }
}
