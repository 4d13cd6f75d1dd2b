// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lanyard Card: ID-card designs, design editing sessions and live previews.
//!
//! A [`Template`] pairs a front and a back [`TemplateDesign`]: logo and photo
//! slots, a background fill with an optional pattern, and text styles. Editors
//! change designs through [`DesignPatch`]es, which merge shallowly and clamp
//! every numeric control to the face's [`DesignLimits`].
//!
//! [`DesignEditor`] wraps one editing session: a saved snapshot, a draft, a
//! revision counter, the active tab and the preview toggles.
//! [`render_card`] turns any design into a [`CardScene`] of
//! backend-agnostic drawing ops using `kurbo` geometry and `peniko` paints.
//!
//! ## Minimal example
//!
//! ```rust
//! use lanyard_card::{
//!     CardSide, DesignEditor, DesignPatch, Employee, Template, TextRole, TextStylePatch,
//! };
//!
//! let mut template = Template::new("Corporate");
//! let mut editor = DesignEditor::for_template(&template, CardSide::Back);
//!
//! // Sliders can overshoot; the back's detail font tops out at 10.
//! editor.apply(
//!     &DesignPatch::new()
//!         .with_employee_id_style(TextStylePatch::default().with_font_size(18.0)),
//! );
//! let scene = editor.preview(&Employee::sample());
//! let mobile = scene.text(TextRole::Mobile).unwrap();
//! assert_eq!(mobile.font_size, 10.0);
//! assert_eq!(mobile.text, "Mobile: 9876543210");
//!
//! template.set_side(CardSide::Back, editor.save());
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for floating point math.
//! - `libm`: use `libm` instead, for `no_std` targets.
//! - `serde`: derives matching the camelCase template JSON, with colors as hex
//!   strings, `"transparent"` backgrounds and string font weights.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod design;
mod editor;
mod limits;
mod patch;
mod preview;

pub use color::{CardColor, ColorParseError, background_presets};
pub use design::{
    BackgroundFill, BackgroundPattern, CARD_HEIGHT, CARD_SIZE, CARD_WIDTH, CardSide, Employee,
    FontWeight, PhotoShape, Template, TemplateDesign, TextStyle,
};
pub use editor::{DesignEditor, EditorTab, SummaryStat};
pub use limits::{DesignLimits, Limit, PhotoLimits};
pub use patch::{DesignPatch, PointPatch, SizePatch, TextStylePatch};
pub use preview::{
    CardScene, ClipShape, PHOTO_CORNER_RADIUS, PreviewOp, PreviewOptions, TextRole, TextRun,
    render_card,
};
