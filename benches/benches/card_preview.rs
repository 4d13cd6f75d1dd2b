// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `lanyard_card` patches and previews.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use lanyard_card::{
    BackgroundPattern, CardSide, DesignEditor, DesignLimits, DesignPatch, Employee,
    PreviewOptions, TemplateDesign, TextStylePatch, render_card,
};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("card/render");
    let employee = Employee::sample();
    for pattern in [
        BackgroundPattern::None,
        BackgroundPattern::Gradient,
        BackgroundPattern::Dots,
        BackgroundPattern::Lines,
    ] {
        let mut design = TemplateDesign::default_front();
        design.background_pattern = pattern;
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern.name()),
            &design,
            |b, design| {
                b.iter(|| {
                    black_box(render_card(
                        design,
                        CardSide::Front,
                        &employee,
                        PreviewOptions::default(),
                    ))
                });
            },
        );
    }
    group.finish();
}

fn bench_patch(c: &mut Criterion) {
    let base = TemplateDesign::default_front();
    let patch = DesignPatch::new()
        .with_logo_x(40.0)
        .with_photo_height(200.0)
        .with_name_style(TextStylePatch::default().with_font_size(30.0));
    c.bench_function("card/patch_apply", |b| {
        b.iter(|| black_box(patch.apply(black_box(&base), &DesignLimits::FRONT)));
    });

    // A slider drag: many small patches against one session.
    c.bench_function("card/editor_slider_drag", |b| {
        b.iter(|| {
            let mut editor = DesignEditor::new(CardSide::Front, base);
            for x in 0..=153 {
                editor.apply(&DesignPatch::new().with_logo_x(f64::from(x)));
            }
            black_box(editor.revision())
        });
    });
}

criterion_group!(benches, bench_render, bench_patch);
criterion_main!(benches);
