// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partial design updates.
//!
//! A [`DesignPatch`] names only the fields a control changed. Applying it
//! produces a new [`TemplateDesign`]; the base is never touched. Nested values
//! merge one level deep, so a patch that only sets the logo's `x` keeps the
//! base's `y`.
//!
//! ```
//! use lanyard_card::{CardSide, DesignLimits, DesignPatch, TemplateDesign};
//!
//! let base = TemplateDesign::default_front();
//! let patch = DesignPatch::new().with_logo_x(500.0).with_logo_size(60.0);
//! let next = patch.apply(&base, &DesignLimits::for_side(CardSide::Front));
//!
//! assert_eq!(next.logo_position.x, 153.0); // clamped
//! assert_eq!(next.logo_position.y, base.logo_position.y);
//! assert_eq!(next.logo_size, 60.0);
//! ```

use crate::{
    BackgroundFill, BackgroundPattern, CardColor, DesignLimits, FontWeight, Limit, PhotoShape,
    TemplateDesign, TextStyle,
};

/// A partial update of a point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PointPatch {
    /// New horizontal coordinate.
    pub x: Option<f64>,
    /// New vertical coordinate.
    pub y: Option<f64>,
}

/// A partial update of a size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SizePatch {
    /// New width.
    pub width: Option<f64>,
    /// New height.
    pub height: Option<f64>,
}

/// A partial update of a [`TextStyle`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TextStylePatch {
    /// New size.
    pub font_size: Option<f64>,
    /// New weight.
    pub font_weight: Option<FontWeight>,
    /// New color.
    pub color: Option<CardColor>,
}

impl TextStylePatch {
    /// Sets the size.
    #[must_use]
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the color.
    #[must_use]
    pub fn with_color(mut self, color: CardColor) -> Self {
        self.color = Some(color);
        self
    }

    fn merge(&self, base: TextStyle, font: Limit) -> TextStyle {
        TextStyle {
            font_size: self.font_size.map_or(base.font_size, |v| font.clamp(v)),
            font_weight: self.font_weight.unwrap_or(base.font_weight),
            color: self.color.unwrap_or(base.color),
        }
    }
}

/// A shallow, per-field update of a [`TemplateDesign`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DesignPatch {
    /// Logo slot corner.
    pub logo_position: Option<PointPatch>,
    /// Logo edge length.
    pub logo_size: Option<f64>,
    /// Photo crop shape.
    pub photo_shape: Option<PhotoShape>,
    /// Photo slot corner.
    pub photo_position: Option<PointPatch>,
    /// Photo slot size.
    pub photo_size: Option<SizePatch>,
    /// Base fill.
    #[cfg_attr(feature = "serde", serde(rename = "backgroundColor"))]
    pub background: Option<BackgroundFill>,
    /// Decoration over the fill.
    pub background_pattern: Option<BackgroundPattern>,
    /// Name style.
    pub name_style: Option<TextStylePatch>,
    /// Id or detail-line style.
    pub employee_id_style: Option<TextStylePatch>,
}

impl DesignPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Moves the logo horizontally.
    #[must_use]
    pub fn with_logo_x(mut self, x: f64) -> Self {
        self.logo_position.get_or_insert_default().x = Some(x);
        self
    }

    /// Moves the logo vertically.
    #[must_use]
    pub fn with_logo_y(mut self, y: f64) -> Self {
        self.logo_position.get_or_insert_default().y = Some(y);
        self
    }

    /// Resizes the logo.
    #[must_use]
    pub fn with_logo_size(mut self, size: f64) -> Self {
        self.logo_size = Some(size);
        self
    }

    /// Changes the photo crop.
    #[must_use]
    pub fn with_photo_shape(mut self, shape: PhotoShape) -> Self {
        self.photo_shape = Some(shape);
        self
    }

    /// Moves the photo horizontally.
    #[must_use]
    pub fn with_photo_x(mut self, x: f64) -> Self {
        self.photo_position.get_or_insert_default().x = Some(x);
        self
    }

    /// Moves the photo vertically.
    #[must_use]
    pub fn with_photo_y(mut self, y: f64) -> Self {
        self.photo_position.get_or_insert_default().y = Some(y);
        self
    }

    /// Changes the photo width.
    #[must_use]
    pub fn with_photo_width(mut self, width: f64) -> Self {
        self.photo_size.get_or_insert_default().width = Some(width);
        self
    }

    /// Changes the photo height.
    #[must_use]
    pub fn with_photo_height(mut self, height: f64) -> Self {
        self.photo_size.get_or_insert_default().height = Some(height);
        self
    }

    /// Sets the base fill.
    #[must_use]
    pub fn with_background(mut self, background: BackgroundFill) -> Self {
        self.background = Some(background);
        self
    }

    /// The "reset to white" quick action.
    #[must_use]
    pub fn reset_background() -> Self {
        Self::new().with_background(BackgroundFill::Solid(CardColor::WHITE))
    }

    /// The "remove background" quick action.
    #[must_use]
    pub fn remove_background() -> Self {
        Self::new().with_background(BackgroundFill::Transparent)
    }

    /// Sets the decoration.
    #[must_use]
    pub fn with_pattern(mut self, pattern: BackgroundPattern) -> Self {
        self.background_pattern = Some(pattern);
        self
    }

    /// Updates the name style.
    #[must_use]
    pub fn with_name_style(mut self, style: TextStylePatch) -> Self {
        self.name_style = Some(style);
        self
    }

    /// Updates the id or detail-line style.
    #[must_use]
    pub fn with_employee_id_style(mut self, style: TextStylePatch) -> Self {
        self.employee_id_style = Some(style);
        self
    }

    /// Merges the patch over `base`, clamping the patched numbers to `limits`.
    ///
    /// Fields the patch leaves unset are copied from `base` unchanged. Photo
    /// fields are ignored when `limits` has no photo ranges.
    #[must_use]
    pub fn apply(&self, base: &TemplateDesign, limits: &DesignLimits) -> TemplateDesign {
        let mut next = *base;

        if let Some(p) = self.logo_position {
            next.logo_position.x = p.x.map_or(base.logo_position.x, |v| limits.logo_x.clamp(v));
            next.logo_position.y = p.y.map_or(base.logo_position.y, |v| limits.logo_y.clamp(v));
        }
        if let Some(size) = self.logo_size {
            next.logo_size = limits.logo_size.clamp(size);
        }

        match limits.photo {
            Some(photo) => {
                if let Some(shape) = self.photo_shape {
                    next.photo_shape = shape;
                }
                if let Some(p) = self.photo_position {
                    next.photo_position.x = p.x.map_or(base.photo_position.x, |v| photo.x.clamp(v));
                    next.photo_position.y = p.y.map_or(base.photo_position.y, |v| photo.y.clamp(v));
                }
                if let Some(s) = self.photo_size {
                    next.photo_size.width =
                        s.width.map_or(base.photo_size.width, |v| photo.width.clamp(v));
                    next.photo_size.height =
                        s.height.map_or(base.photo_size.height, |v| photo.height.clamp(v));
                }
            }
            None => {
                if self.photo_shape.is_some()
                    || self.photo_position.is_some()
                    || self.photo_size.is_some()
                {
                    tracing::trace!("photo fields ignored on a side without a photo");
                }
            }
        }

        if let Some(background) = self.background {
            next.background = background;
        }
        if let Some(pattern) = self.background_pattern {
            next.background_pattern = pattern;
        }
        if let Some(style) = &self.name_style {
            next.name_style = style.merge(base.name_style, limits.name_font);
        }
        if let Some(style) = &self.employee_id_style {
            next.employee_id_style = style.merge(base.employee_id_style, limits.body_font);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardSide;

    #[test]
    fn empty_patch_is_identity() {
        let base = TemplateDesign::default_front();
        let patch = DesignPatch::new();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(&base, &DesignLimits::FRONT), base);
    }

    #[test]
    fn nested_fields_merge_shallowly() {
        let base = TemplateDesign::default_front();
        let next = DesignPatch::new()
            .with_photo_height(500.0)
            .with_name_style(TextStylePatch::default().with_font_weight(FontWeight::Regular))
            .apply(&base, &DesignLimits::FRONT);
        assert_eq!(next.photo_size.width, base.photo_size.width);
        assert_eq!(next.photo_size.height, 120.0);
        assert_eq!(next.name_style.font_size, base.name_style.font_size);
        assert_eq!(next.name_style.font_weight, FontWeight::Regular);
        assert_eq!(next.name_style.color, base.name_style.color);
    }

    #[test]
    fn body_font_uses_side_range() {
        let base = TemplateDesign::default_back();
        let style = TextStylePatch::default().with_font_size(12.0);
        let back = DesignPatch::new()
            .with_employee_id_style(style)
            .apply(&base, &DesignLimits::for_side(CardSide::Back));
        assert_eq!(back.employee_id_style.font_size, 10.0);
        let front = DesignPatch::new()
            .with_employee_id_style(style)
            .apply(&base, &DesignLimits::for_side(CardSide::Front));
        assert_eq!(front.employee_id_style.font_size, 12.0);
    }

    #[test]
    fn photo_fields_ignored_without_photo_limits() {
        let base = TemplateDesign::default_back();
        let next = DesignPatch::new()
            .with_photo_shape(PhotoShape::Circle)
            .with_photo_x(3.0)
            .apply(&base, &DesignLimits::BACK);
        assert_eq!(next, base);
    }

    #[test]
    fn background_quick_actions() {
        let mut base = TemplateDesign::default_front();
        base.background = BackgroundFill::Solid(CardColor::rgb(0xFE, 0xF3, 0xC7));
        let cleared = DesignPatch::remove_background().apply(&base, &DesignLimits::FRONT);
        assert_eq!(cleared.background, BackgroundFill::Transparent);
        let white = DesignPatch::reset_background().apply(&cleared, &DesignLimits::FRONT);
        assert_eq!(white.background, BackgroundFill::Solid(CardColor::WHITE));
    }
}
