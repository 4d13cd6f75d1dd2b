// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-agnostic card preview.
//!
//! [`render_card`] lowers a design and an employee into an ordered list of
//! [`PreviewOp`]s in card coordinates (origin top-left, `CARD_WIDTH` by
//! `CARD_HEIGHT`). Backends replay the ops in order; text runs carry a
//! horizontal center and a baseline, leaving shaping to the backend.
//!
//! ```
//! use lanyard_card::{CardSide, Employee, PreviewOptions, TemplateDesign, TextRole, render_card};
//!
//! let scene = render_card(
//!     &TemplateDesign::default_front(),
//!     CardSide::Front,
//!     &Employee::sample(),
//!     PreviewOptions::default(),
//! );
//! assert_eq!(scene.text(TextRole::Name).unwrap().text, "Shreyas Verma");
//! assert!(scene.photo_rect().is_some());
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Ellipse, Point, Rect, RoundedRect, Shape, Size};
use lanyard_date::{CanonicalDate, format_display};
use peniko::{Brush, Color, ColorStop, ColorStops, Gradient, GradientKind, LinearGradientPosition};

use crate::{
    BackgroundPattern, CARD_SIZE, CardSide, Employee, FontWeight, PhotoShape, TemplateDesign,
    TextStyle,
};

/// Corner radius of [`PhotoShape::Rounded`] photos.
pub const PHOTO_CORNER_RADIUS: f64 = 8.0;

const PATTERN_SPACING: f64 = 12.0;
const DOT_RADIUS: f64 = 1.0;
const RULE_WIDTH: f64 = 0.5;
const PATTERN_INK: Color = Color::from_rgba8(0, 0, 0, 20);
const TOLERANCE: f64 = 0.1;

/// Host-side display toggles that are not part of the saved design.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Draw the logo slot.
    pub show_logo: bool,
    /// Draw the photo slot. Only the front has one.
    pub show_photo: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            show_logo: true,
            show_photo: true,
        }
    }
}

/// Region a clip layer restricts drawing to.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A rectangle with rounded corners.
    RoundedRect(RoundedRect),
    /// An ellipse.
    Ellipse(Ellipse),
}

impl ClipShape {
    /// Converts the region to a path.
    #[must_use]
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::Rect(r) => r.to_path(tolerance),
            Self::RoundedRect(r) => r.to_path(tolerance),
            Self::Ellipse(e) => e.to_path(tolerance),
        }
    }

    /// The smallest rectangle containing the region.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::RoundedRect(r) => r.rect(),
            Self::Ellipse(e) => e.bounding_box(),
        }
    }
}

/// What a text run shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Employee name.
    Name,
    /// Badge number.
    EmployeeId,
    /// Phone number line.
    Mobile,
    /// Blood group line.
    BloodGroup,
    /// Website line.
    Website,
    /// Joining date line.
    JoiningDate,
    /// Validity line.
    ValidTill,
}

/// A single line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// What the line shows.
    pub role: TextRole,
    /// The text.
    pub text: String,
    /// Horizontal center and baseline.
    pub anchor: Point,
    /// Size in card units.
    pub font_size: f64,
    /// Weight.
    pub font_weight: FontWeight,
    /// Fill color.
    pub color: Color,
}

/// One drawing step.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewOp {
    /// Fill a rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Paint.
        brush: Brush,
    },
    /// Fill a path with the non-zero rule.
    FillPath {
        /// Path to fill.
        path: BezPath,
        /// Paint.
        brush: Brush,
    },
    /// Stroke a path.
    StrokePath {
        /// Path to stroke.
        path: BezPath,
        /// Stroke width.
        width: f64,
        /// Paint.
        brush: Brush,
    },
    /// Start restricting drawing to a region, until the matching [`PreviewOp::PopClip`].
    PushClip(ClipShape),
    /// End the innermost clip.
    PopClip,
    /// Where the company logo goes.
    LogoSlot(Rect),
    /// Where the employee photo goes, drawn inside the preceding clip.
    PhotoSlot(Rect),
    /// A line of text.
    Text(TextRun),
}

/// The ops for one card face.
#[derive(Clone, Debug, PartialEq)]
pub struct CardScene {
    /// Which face.
    pub side: CardSide,
    /// Card size.
    pub size: Size,
    /// Ops in drawing order.
    pub ops: Vec<PreviewOp>,
}

impl CardScene {
    /// All text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PreviewOp::Text(run) => Some(run),
            _ => None,
        })
    }

    /// The text run with `role`, if drawn.
    #[must_use]
    pub fn text(&self, role: TextRole) -> Option<&TextRun> {
        self.texts().find(|run| run.role == role)
    }

    /// The logo slot, if drawn.
    #[must_use]
    pub fn logo_rect(&self) -> Option<Rect> {
        self.ops.iter().find_map(|op| match op {
            PreviewOp::LogoSlot(rect) => Some(*rect),
            _ => None,
        })
    }

    /// The photo slot, if drawn.
    #[must_use]
    pub fn photo_rect(&self) -> Option<Rect> {
        self.ops.iter().find_map(|op| match op {
            PreviewOp::PhotoSlot(rect) => Some(*rect),
            _ => None,
        })
    }

    /// The clip applied to the photo, if drawn.
    #[must_use]
    pub fn photo_clip(&self) -> Option<&ClipShape> {
        self.ops.windows(2).find_map(|pair| match pair {
            [PreviewOp::PushClip(shape), PreviewOp::PhotoSlot(_)] => Some(shape),
            _ => None,
        })
    }
}

/// Builds the preview of one card face.
#[must_use]
pub fn render_card(
    design: &TemplateDesign,
    side: CardSide,
    employee: &Employee,
    options: PreviewOptions,
) -> CardScene {
    let card = CARD_SIZE.to_rect();
    let mut ops = Vec::new();

    if let Some(color) = design.background.color() {
        ops.push(PreviewOp::FillRect {
            rect: card,
            brush: Brush::Solid(color.to_peniko()),
        });
    }
    push_pattern(&mut ops, design.background_pattern, card);

    if options.show_logo {
        let origin = design.logo_position;
        ops.push(PreviewOp::LogoSlot(Rect::from_origin_size(
            origin,
            (design.logo_size, design.logo_size),
        )));
    }

    match side {
        CardSide::Front => push_front(&mut ops, design, employee, options),
        CardSide::Back => push_back(&mut ops, design, employee),
    }

    tracing::trace!(?side, ops = ops.len(), "card preview rendered");
    CardScene {
        side,
        size: CARD_SIZE,
        ops,
    }
}

fn push_pattern(ops: &mut Vec<PreviewOp>, pattern: BackgroundPattern, card: Rect) {
    match pattern {
        BackgroundPattern::None => {}
        BackgroundPattern::Gradient => {
            let stops = [
                ColorStop::from((0.0, PATTERN_INK.with_alpha(0.0))),
                ColorStop::from((1.0, PATTERN_INK)),
            ];
            let gradient = Gradient {
                kind: GradientKind::Linear(LinearGradientPosition::new(
                    (card.x0, card.y0),
                    (card.x0, card.y1),
                )),
                stops: ColorStops::from(&stops[..]),
                ..Gradient::default()
            };
            ops.push(PreviewOp::FillRect {
                rect: card,
                brush: Brush::Gradient(gradient),
            });
        }
        BackgroundPattern::Dots => {
            let mut path = BezPath::new();
            for center in lattice(card) {
                path.extend(Circle::new(center, DOT_RADIUS).path_elements(TOLERANCE));
            }
            ops.push(PreviewOp::FillPath {
                path,
                brush: Brush::Solid(PATTERN_INK),
            });
        }
        BackgroundPattern::Lines => {
            let mut path = BezPath::new();
            let mut y = card.y0 + PATTERN_SPACING;
            while y < card.y1 {
                path.move_to((card.x0, y));
                path.line_to((card.x1, y));
                y += PATTERN_SPACING;
            }
            ops.push(PreviewOp::StrokePath {
                path,
                width: RULE_WIDTH,
                brush: Brush::Solid(PATTERN_INK),
            });
        }
    }
}

fn lattice(card: Rect) -> impl Iterator<Item = Point> {
    let half = PATTERN_SPACING / 2.0;
    let columns = steps(card.width());
    let rows = steps(card.height());
    (0..rows).flat_map(move |row| {
        (0..columns).map(move |column| {
            Point::new(
                card.x0 + half + f64::from(column) * PATTERN_SPACING,
                card.y0 + half + f64::from(row) * PATTERN_SPACING,
            )
        })
    })
}

fn steps(extent: f64) -> u32 {
    let mut count = 0;
    while f64::from(count + 1) * PATTERN_SPACING <= extent {
        count += 1;
    }
    count
}

fn push_front(
    ops: &mut Vec<PreviewOp>,
    design: &TemplateDesign,
    employee: &Employee,
    options: PreviewOptions,
) {
    let photo = Rect::from_origin_size(design.photo_position, design.photo_size);
    if options.show_photo {
        let clip = match design.photo_shape {
            PhotoShape::Circle => ClipShape::Ellipse(Ellipse::from_rect(photo)),
            PhotoShape::Rounded => ClipShape::RoundedRect(photo.to_rounded_rect(PHOTO_CORNER_RADIUS)),
            PhotoShape::Square => ClipShape::Rect(photo),
        };
        ops.push(PreviewOp::PushClip(clip));
        ops.push(PreviewOp::PhotoSlot(photo));
        ops.push(PreviewOp::PopClip);
    }

    // Text sits under the photo slot whether or not the photo is shown.
    let center = CARD_SIZE.width / 2.0;
    let name = &design.name_style;
    let name_baseline = photo.y1 + 8.0 + name.font_size;
    ops.push(text(TextRole::Name, employee.name.clone(), center, name_baseline, name));

    let id = &design.employee_id_style;
    let id_baseline = name_baseline + 6.0 + id.font_size;
    ops.push(text(
        TextRole::EmployeeId,
        format!("ID: {}", employee.employee_id),
        center,
        id_baseline,
        id,
    ));
}

fn push_back(ops: &mut Vec<PreviewOp>, design: &TemplateDesign, employee: &Employee) {
    let center = CARD_SIZE.width / 2.0;
    let name = &design.name_style;
    let top = design.logo_position.y + design.logo_size;
    let mut baseline = top + 12.0 + name.font_size;
    ops.push(text(TextRole::Name, employee.name.clone(), center, baseline, name));

    let body = &design.employee_id_style;
    let line_gap = body.font_size * 1.8;
    baseline += 6.0;
    let lines = [
        (TextRole::Mobile, labelled("Mobile", &employee.mobile)),
        (TextRole::BloodGroup, labelled("Blood Group", &employee.blood_group)),
        (TextRole::Website, labelled("Website", &employee.website)),
        (TextRole::JoiningDate, dated("Joined", employee.joining_date)),
        (TextRole::ValidTill, dated("Valid Till", employee.valid_till)),
    ];
    for (role, line) in lines {
        let Some(line) = line else { continue };
        baseline += line_gap;
        ops.push(text(role, line, center, baseline, body));
    }
}

fn labelled(label: &str, value: &str) -> Option<String> {
    (!value.is_empty()).then(|| format!("{label}: {value}"))
}

fn dated(label: &str, value: CanonicalDate) -> Option<String> {
    value
        .date()
        .map(|date| format!("{label}: {}", format_display(date)))
}

fn text(role: TextRole, text: String, x: f64, baseline: f64, style: &TextStyle) -> PreviewOp {
    PreviewOp::Text(TextRun {
        role,
        text,
        anchor: Point::new(x, baseline),
        font_size: style.font_size,
        font_weight: style.font_weight,
        color: style.color.to_peniko(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BackgroundFill;

    fn scene(design: &TemplateDesign, side: CardSide) -> CardScene {
        render_card(design, side, &Employee::sample(), PreviewOptions::default())
    }

    #[test]
    fn transparent_background_has_no_fill() {
        let mut design = TemplateDesign::default_front();
        design.background = BackgroundFill::Transparent;
        let s = scene(&design, CardSide::Front);
        assert!(!matches!(s.ops[0], PreviewOp::FillRect { .. }));
    }

    #[test]
    fn dot_lattice_covers_card() {
        let card = CARD_SIZE.to_rect();
        let points: Vec<Point> = lattice(card).collect();
        // 204 / 12 = 17 columns, 324 / 12 = 27 rows.
        assert_eq!(points.len(), 17 * 27);
        assert!(points.iter().all(|p| card.contains(*p)));
    }

    #[test]
    fn each_pattern_adds_one_op() {
        let base = scene(&TemplateDesign::default_front(), CardSide::Front);
        for pattern in [
            BackgroundPattern::Gradient,
            BackgroundPattern::Dots,
            BackgroundPattern::Lines,
        ] {
            let mut design = TemplateDesign::default_front();
            design.background_pattern = pattern;
            assert_eq!(
                scene(&design, CardSide::Front).ops.len(),
                base.ops.len() + 1
            );
        }
    }

    #[test]
    fn back_skips_empty_details() {
        let mut employee = Employee::sample();
        employee.website.clear();
        employee.valid_till = CanonicalDate::EMPTY;
        let s = render_card(
            &TemplateDesign::default_back(),
            CardSide::Back,
            &employee,
            PreviewOptions::default(),
        );
        assert!(s.text(TextRole::Website).is_none());
        assert!(s.text(TextRole::ValidTill).is_none());
        assert_eq!(
            s.text(TextRole::JoiningDate).unwrap().text,
            "Joined: 12/01/2024"
        );
    }
}
