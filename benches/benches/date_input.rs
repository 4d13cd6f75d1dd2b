// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for typed-date handling in `lanyard_date` and `lanyard_date_input`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chrono::Weekday;
use lanyard_date::{Bounds, FixedClock, NaiveDate, ViewMonth, parse_display, reformat_partial};
use lanyard_date_input::grid::MonthGrid;
use lanyard_date_input::{DateInputConfig, DateInputController};

fn bench_reformat(c: &mut Criterion) {
    let mut group = c.benchmark_group("date/reformat_partial");
    for input in ["1", "1205", "12052024", "12/05/2024", "ab12-05//2024xyz"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(reformat_partial(black_box(input))));
        });
    }
    group.finish();

    c.bench_function("date/parse_display", |b| {
        b.iter(|| black_box(parse_display(black_box("29/02/2024"))));
    });
}

fn bench_typing_session(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
    let bounds = Bounds::try_new(NaiveDate::from_ymd_opt(2000, 1, 1), None).expect("ordered");
    let config = DateInputConfig::new().with_bounds(bounds);

    // One keystroke at a time, as hosts deliver input.
    c.bench_function("date_input/type_digit_by_digit", |b| {
        b.iter_batched(
            || DateInputController::new(config.clone(), FixedClock(today)),
            |mut input| {
                for digit in "12052024".chars() {
                    let typed = format!("{}{digit}", input.display_text());
                    black_box(input.on_text_input(&typed));
                }
                input
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("date_input/month_grid", |b| {
        let input = DateInputController::new(config.clone(), FixedClock(today));
        b.iter(|| black_box(input.month_grid()));
    });
}

fn bench_grid_week_starts(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/build");
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
    let view = ViewMonth::of(today);
    for week_start in [Weekday::Sun, Weekday::Mon] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{week_start:?}")),
            &week_start,
            |b, week_start| {
                b.iter(|| {
                    black_box(MonthGrid::build(
                        view,
                        *week_start,
                        Some(today),
                        today,
                        &Bounds::UNBOUNDED,
                    ))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_reformat,
    bench_typing_session,
    bench_grid_week_starts
);
criterion_main!(benches);
