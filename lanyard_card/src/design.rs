// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The card design model.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Size};
use lanyard_date::CanonicalDate;

use crate::CardColor;

/// Card width in preview units.
pub const CARD_WIDTH: f64 = 204.0;

/// Card height in preview units.
pub const CARD_HEIGHT: f64 = 324.0;

/// The card's size in preview units.
pub const CARD_SIZE: Size = Size::new(CARD_WIDTH, CARD_HEIGHT);

/// Which face of the card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardSide {
    /// The face with the photo.
    Front,
    /// The face with contact details.
    Back,
}

/// How the employee photo is cropped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PhotoShape {
    /// An ellipse inscribed in the photo slot.
    Circle,
    /// A rectangle with rounded corners.
    #[default]
    Rounded,
    /// A plain rectangle.
    Square,
}

impl PhotoShape {
    /// Lowercase name, as shown in the editor summary.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rounded => "rounded",
            Self::Square => "square",
        }
    }
}

/// Decoration drawn over the background fill.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BackgroundPattern {
    /// No decoration.
    #[default]
    None,
    /// A soft vertical shade.
    Gradient,
    /// A regular grid of dots.
    Dots,
    /// Horizontal rules.
    Lines,
}

impl BackgroundPattern {
    /// Lowercase name, as shown in the editor summary.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gradient => "gradient",
            Self::Dots => "dots",
            Self::Lines => "lines",
        }
    }
}

/// The card's base fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BackgroundFill {
    /// A solid color.
    Solid(CardColor),
    /// No fill; the card shows whatever is behind it.
    Transparent,
}

impl BackgroundFill {
    /// The solid color, if any.
    #[must_use]
    pub fn color(self) -> Option<CardColor> {
        match self {
            Self::Solid(color) => Some(color),
            Self::Transparent => None,
        }
    }
}

impl Default for BackgroundFill {
    fn default() -> Self {
        Self::Solid(CardColor::WHITE)
    }
}

impl fmt::Display for BackgroundFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => fmt::Display::fmt(color, f),
            Self::Transparent => f.write_str("transparent"),
        }
    }
}

/// Text weight offered by the editors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    /// 400.
    #[default]
    Regular,
    /// 500.
    Medium,
    /// 700.
    Bold,
}

impl FontWeight {
    /// The CSS-style numeric weight.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Bold => 700,
        }
    }

    /// Maps a numeric weight back, if it is one of the offered ones.
    #[must_use]
    pub const fn from_value(value: u16) -> Option<Self> {
        match value {
            400 => Some(Self::Regular),
            500 => Some(Self::Medium),
            700 => Some(Self::Bold),
            _ => None,
        }
    }
}

/// Style of one text run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextStyle {
    /// Size in preview units.
    pub font_size: f64,
    /// Weight.
    pub font_weight: FontWeight,
    /// Fill color.
    pub color: CardColor,
}

/// The layout and styling of one card face.
///
/// On the back, `photo_*` fields are carried but unused, and
/// `employee_id_style` styles the contact-detail lines.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TemplateDesign {
    /// Top-left corner of the logo slot.
    pub logo_position: Point,
    /// Edge length of the square logo slot.
    pub logo_size: f64,
    /// Crop shape of the photo.
    pub photo_shape: PhotoShape,
    /// Top-left corner of the photo slot.
    pub photo_position: Point,
    /// Size of the photo slot.
    pub photo_size: Size,
    /// Base fill.
    #[cfg_attr(feature = "serde", serde(rename = "backgroundColor"))]
    pub background: BackgroundFill,
    /// Decoration over the fill.
    pub background_pattern: BackgroundPattern,
    /// Style of the employee name.
    pub name_style: TextStyle,
    /// Style of the employee id on the front, and of the detail lines on the back.
    pub employee_id_style: TextStyle,
}

impl TemplateDesign {
    /// The stock front design.
    #[must_use]
    pub fn default_front() -> Self {
        Self {
            logo_position: Point::new(77.0, 16.0),
            logo_size: 50.0,
            photo_shape: PhotoShape::Rounded,
            photo_position: Point::new(62.0, 84.0),
            photo_size: Size::new(80.0, 100.0),
            background: BackgroundFill::Solid(CardColor::WHITE),
            background_pattern: BackgroundPattern::None,
            name_style: TextStyle {
                font_size: 16.0,
                font_weight: FontWeight::Bold,
                color: CardColor::rgb(0x11, 0x18, 0x27),
            },
            employee_id_style: TextStyle {
                font_size: 10.0,
                font_weight: FontWeight::Medium,
                color: CardColor::rgb(0x4B, 0x55, 0x63),
            },
        }
    }

    /// The stock back design.
    #[must_use]
    pub fn default_back() -> Self {
        Self {
            logo_position: Point::new(82.0, 20.0),
            logo_size: 40.0,
            background: BackgroundFill::Solid(CardColor::rgb(0xF8, 0xF9, 0xFA)),
            name_style: TextStyle {
                font_size: 11.0,
                font_weight: FontWeight::Bold,
                color: CardColor::rgb(0x11, 0x18, 0x27),
            },
            employee_id_style: TextStyle {
                font_size: 7.0,
                font_weight: FontWeight::Regular,
                color: CardColor::rgb(0x37, 0x41, 0x51),
            },
            ..Self::default_front()
        }
    }

    /// The stock design for `side`.
    #[must_use]
    pub fn default_for(side: CardSide) -> Self {
        match side {
            CardSide::Front => Self::default_front(),
            CardSide::Back => Self::default_back(),
        }
    }
}

/// A named pair of card faces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    /// Display name.
    pub name: String,
    /// Front face.
    pub front: TemplateDesign,
    /// Back face.
    pub back: TemplateDesign,
}

impl Template {
    /// A template with the stock designs.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            front: TemplateDesign::default_front(),
            back: TemplateDesign::default_back(),
        }
    }

    /// The design of `side`.
    #[must_use]
    pub fn side(&self, side: CardSide) -> &TemplateDesign {
        match side {
            CardSide::Front => &self.front,
            CardSide::Back => &self.back,
        }
    }

    /// Replaces the design of `side`.
    pub fn set_side(&mut self, side: CardSide, design: TemplateDesign) {
        match side {
            CardSide::Front => self.front = design,
            CardSide::Back => self.back = design,
        }
    }
}

/// The person shown on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Employee {
    /// Full name.
    pub name: String,
    /// Badge number.
    pub employee_id: String,
    /// Phone number.
    pub mobile: String,
    /// Blood group, such as `B+`.
    pub blood_group: String,
    /// Company website.
    pub website: String,
    /// First day of employment.
    pub joining_date: CanonicalDate,
    /// Last day the card is valid.
    pub valid_till: CanonicalDate,
}

impl Employee {
    /// The placeholder employee used by editor previews.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: String::from("Shreyas Verma"),
            employee_id: String::from("1234"),
            mobile: String::from("9876543210"),
            blood_group: String::from("B+"),
            website: String::from("www.acc.ltd"),
            joining_date: CanonicalDate::from_external("2024-01-12"),
            valid_till: CanonicalDate::from_external("2030-12-31"),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{BackgroundFill, FontWeight};
    use alloc::string::String;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    impl Serialize for BackgroundFill {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for BackgroundFill {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            if text.eq_ignore_ascii_case("transparent") {
                return Ok(Self::Transparent);
            }
            text.parse().map(Self::Solid).map_err(D::Error::custom)
        }
    }

    // Template files store weights as strings such as "700".
    impl Serialize for FontWeight {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(&self.value())
        }
    }

    impl<'de> Deserialize<'de> for FontWeight {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse::<u16>()
                .ok()
                .and_then(Self::from_value)
                .ok_or_else(|| D::Error::custom("font weight must be 400, 500 or 700"))
        }
    }
}
