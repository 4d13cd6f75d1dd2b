// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Lanyard demos.
//!
//! The demos are headless: they print what a host would draw.

use std::fmt::Write as _;

use chrono::Datelike;

use lanyard_card::{CardScene, ClipShape, PreviewOp, Template};
use lanyard_date_input::DateInputEvent;
use lanyard_date_input::grid::MonthGrid;
use peniko::Brush;

/// The template shipped with the demos.
pub const CORPORATE_TEMPLATE: &str = include_str!("../templates/corporate.json");

/// Installs a `fmt` subscriber honouring `RUST_LOG`.
///
/// Without `RUST_LOG`, Lanyard crates log at `debug` and everything else at `warn`.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new(
            "warn,lanyard_date=debug,lanyard_date_input=debug,lanyard_card=debug",
        ),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Parses a template from JSON.
pub fn load_template(json: &str) -> Result<Template, serde_json::Error> {
    serde_json::from_str(json)
}

/// One-line description of an event batch.
pub fn describe_events(events: &[DateInputEvent]) -> String {
    if events.is_empty() {
        return String::from("(no events)");
    }
    let parts: Vec<String> = events
        .iter()
        .map(|event| match event {
            DateInputEvent::Changed(value) => format!("Changed(\"{value}\")"),
            other => format!("{other:?}"),
        })
        .collect();
    parts.join(", ")
}

/// Renders a month grid as text, marking today with `*`, the selection with
/// `[]` and disabled days with `x`. Outside days are dimmed to `..`.
pub fn format_month(grid: &MonthGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^28}", grid.view().to_string());
    for label in grid.weekday_labels() {
        let _ = write!(out, " {label} ");
    }
    out.push('\n');
    for week in grid.weeks() {
        for cell in week {
            let day = if cell.in_view_month {
                format!("{:>2}", cell.date.day())
            } else {
                String::from("..")
            };
            let (open, close) = if cell.is_selected {
                ('[', ']')
            } else if cell.is_disabled {
                ('x', ' ')
            } else if cell.is_today {
                ('*', ' ')
            } else {
                (' ', ' ')
            };
            let _ = write!(out, "{open}{day}{close}");
        }
        out.push('\n');
    }
    out
}

/// Prints a scene one op per line.
pub fn format_scene(scene: &CardScene) -> String {
    let mut out = format!(
        "{:?} face, {}x{}\n",
        scene.side, scene.size.width, scene.size.height
    );
    for op in &scene.ops {
        let line = match op {
            PreviewOp::FillRect { rect, brush } => format!("fill {rect:?} with {}", brush_name(brush)),
            PreviewOp::FillPath { path, brush } => format!(
                "fill path ({} elements) with {}",
                path.elements().len(),
                brush_name(brush)
            ),
            PreviewOp::StrokePath { path, width, .. } => {
                format!("stroke path ({} elements) at {width}", path.elements().len())
            }
            PreviewOp::PushClip(shape) => format!("push clip {}", clip_name(shape)),
            PreviewOp::PopClip => String::from("pop clip"),
            PreviewOp::LogoSlot(rect) => format!("logo at {rect:?}"),
            PreviewOp::PhotoSlot(rect) => format!("photo at {rect:?}"),
            PreviewOp::Text(run) => format!(
                "text {:?} {:?} at ({:.1}, {:.1}) size {} weight {}",
                run.role,
                run.text,
                run.anchor.x,
                run.anchor.y,
                run.font_size,
                run.font_weight.value()
            ),
        };
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn brush_name(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            format!("#{:02X}{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b, rgba.a)
        }
        Brush::Gradient(_) => String::from("gradient"),
        _ => String::from("image"),
    }
}

fn clip_name(shape: &ClipShape) -> &'static str {
    match shape {
        ClipShape::Rect(_) => "rect",
        ClipShape::RoundedRect(_) => "rounded rect",
        ClipShape::Ellipse(_) => "ellipse",
    }
}
