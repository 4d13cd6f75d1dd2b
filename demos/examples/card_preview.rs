// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card preview.
//!
//! Load a template from JSON, edit its front in a `DesignEditor`, and print
//! the preview ops for both faces.
//!
//! Run:
//! - `cargo run -p lanyard_demos --example card_preview`

use lanyard_card::{
    BackgroundFill, CardSide, DesignEditor, DesignPatch, EditorTab, Employee, FontWeight,
    PhotoShape, PreviewOptions, TextStylePatch, background_presets, render_card,
};
use lanyard_demos::{CORPORATE_TEMPLATE, format_scene, init_tracing, load_template};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut template = load_template(CORPORATE_TEMPLATE)?;
    let employee = Employee::sample();
    tracing::info!(name = %template.name, "template loaded");

    let mut editor = DesignEditor::for_template(&template, CardSide::Front);
    editor.set_tab(EditorTab::Photo);
    editor.apply(
        &DesignPatch::new()
            .with_photo_shape(PhotoShape::Rounded)
            .with_photo_width(140.0),
    );
    editor.set_tab(EditorTab::Text);
    editor.apply(
        &DesignPatch::new().with_name_style(
            TextStylePatch::default()
                .with_font_size(20.0)
                .with_font_weight(FontWeight::Medium),
        ),
    );
    editor.set_tab(EditorTab::Background);
    let preset = background_presets(CardSide::Front)[4];
    editor.apply(&DesignPatch::new().with_background(BackgroundFill::Solid(preset)));

    for (label, value) in editor.summary() {
        println!("{label}: {value}");
    }
    println!(
        "revision {} dirty {}, photo width clamped to {}",
        editor.revision(),
        editor.is_dirty(),
        editor.draft().photo_size.width
    );
    print!("{}", format_scene(&editor.preview(&employee)));

    template.set_side(CardSide::Front, editor.save());

    let back = render_card(
        template.side(CardSide::Back),
        CardSide::Back,
        &employee,
        PreviewOptions::default(),
    );
    print!("{}", format_scene(&back));
    Ok(())
}
