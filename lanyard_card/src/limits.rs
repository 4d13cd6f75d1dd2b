// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-side ranges for the numeric design controls.

use crate::CardSide;

/// An inclusive numeric range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Limit {
    /// Smallest allowed value.
    pub min: f64,
    /// Largest allowed value.
    pub max: f64,
}

impl Limit {
    /// Creates a range; `min` must not exceed `max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range. NaN maps to `min`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies within the range.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Ranges for the photo controls, which only the front offers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhotoLimits {
    /// Left edge of the photo slot.
    pub x: Limit,
    /// Top edge of the photo slot.
    pub y: Limit,
    /// Photo slot width.
    pub width: Limit,
    /// Photo slot height.
    pub height: Limit,
}

/// Ranges applied when editing one card side.
///
/// ```
/// use lanyard_card::{CardSide, DesignLimits};
///
/// let front = DesignLimits::for_side(CardSide::Front);
/// assert_eq!(front.logo_size.clamp(120.0), 80.0);
/// assert!(front.photo.is_some());
///
/// let back = DesignLimits::for_side(CardSide::Back);
/// assert_eq!(back.body_font.clamp(4.0), 5.0);
/// assert!(back.photo.is_none());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DesignLimits {
    /// Left edge of the logo slot.
    pub logo_x: Limit,
    /// Top edge of the logo slot.
    pub logo_y: Limit,
    /// Logo edge length.
    pub logo_size: Limit,
    /// Photo ranges, or `None` when the side has no photo.
    pub photo: Option<PhotoLimits>,
    /// Name font size.
    pub name_font: Limit,
    /// Font size of the id line on the front, and the detail lines on the back.
    pub body_font: Limit,
}

const LOGO_X: Limit = Limit::new(0.0, 153.0);
const LOGO_Y: Limit = Limit::new(0.0, 244.0);
const LOGO_SIZE: Limit = Limit::new(20.0, 80.0);

impl DesignLimits {
    /// Front face ranges.
    pub const FRONT: Self = Self {
        logo_x: LOGO_X,
        logo_y: LOGO_Y,
        logo_size: LOGO_SIZE,
        photo: Some(PhotoLimits {
            x: Limit::new(0.0, 153.0),
            y: Limit::new(0.0, 244.0),
            width: Limit::new(30.0, 100.0),
            height: Limit::new(40.0, 120.0),
        }),
        name_font: Limit::new(12.0, 24.0),
        body_font: Limit::new(6.0, 14.0),
    };

    /// Back face ranges.
    pub const BACK: Self = Self {
        logo_x: LOGO_X,
        logo_y: LOGO_Y,
        logo_size: LOGO_SIZE,
        photo: None,
        name_font: Limit::new(6.0, 14.0),
        body_font: Limit::new(5.0, 10.0),
    };

    /// The ranges for `side`.
    #[must_use]
    pub const fn for_side(side: CardSide) -> Self {
        match side {
            CardSide::Front => Self::FRONT,
            CardSide::Back => Self::BACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_inclusive_and_handles_nan() {
        let limit = Limit::new(20.0, 80.0);
        assert_eq!(limit.clamp(20.0), 20.0);
        assert_eq!(limit.clamp(80.0), 80.0);
        assert_eq!(limit.clamp(-5.0), 20.0);
        assert_eq!(limit.clamp(f64::NAN), 20.0);
        assert_eq!(limit.clamp(f64::INFINITY), 80.0);
        assert!(limit.contains(50.0));
        assert!(!limit.contains(80.5));
    }

    #[test]
    fn sides_share_logo_ranges() {
        let front = DesignLimits::for_side(CardSide::Front);
        let back = DesignLimits::for_side(CardSide::Back);
        assert_eq!(front.logo_x, back.logo_x);
        assert_eq!(front.logo_y, back.logo_y);
        assert_eq!(front.logo_size, back.logo_size);
        assert_ne!(front.name_font, back.name_font);
    }
}
