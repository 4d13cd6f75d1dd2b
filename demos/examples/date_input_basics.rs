// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date input basics.
//!
//! Drive a `DateInputController` through a typical session: focus, type a
//! date digit by digit, page the calendar, pick a day, and blur with a
//! half-typed date.
//!
//! Run:
//! - `cargo run -p lanyard_demos --example date_input_basics`
//! - `RUST_LOG=lanyard_date_input=trace cargo run -p lanyard_demos --example date_input_basics`

use lanyard_date::{Bounds, CanonicalDate, NaiveDate, SystemClock};
use lanyard_date_input::dismiss::DismissRegistry;
use lanyard_date_input::{DateInputConfig, DateInputController, Key, Modifiers, MonthStep};
use lanyard_demos::{describe_events, format_month, init_tracing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let min = NaiveDate::from_ymd_opt(2000, 1, 1).ok_or("invalid min date")?;
    let bounds = Bounds::UNBOUNDED.with_min(min)?;
    let config = DateInputConfig::new()
        .with_id("joining-date")
        .with_required(true)
        .with_bounds(bounds);
    println!("aria-label: {}", config.aria_label());

    let registry = DismissRegistry::new();
    let mut input =
        DateInputController::new(config, SystemClock).with_dismiss_registry(registry.clone());

    // The host form already has a value.
    input.set_from_external_value(CanonicalDate::from_external("2024-01-12"));
    println!("initial text: {:?}", input.display_text());

    println!("focus: {}", describe_events(&input.on_focus()));
    println!("outside-click subscriptions: {:?}", registry.active());
    print!("{}", format_month(&input.month_grid()));

    // Retype the date one keystroke at a time, as a browser would deliver it.
    println!("clear: {}", describe_events(&input.clear()));
    for digit in "12052024".chars() {
        let typed = format!("{}{digit}", input.display_text());
        let events = input.on_text_input(&typed);
        println!("{typed:>11} -> {:<11} {}", input.display_text(), describe_events(&events));
    }

    // Out of bounds text stays visible but is never committed.
    let events = input.on_text_input("31/12/1999");
    println!("1999 -> {} (value still {})", describe_events(&events), input.value());

    input.open();
    input.navigate_month(MonthStep::Next);
    println!("header after paging: {}", input.header_label());
    input.toggle_year_picker();
    let years: Vec<i32> = input.year_range().iter().map(|cell| cell.year).collect();
    println!("year picker: {years:?}");
    input.select_year(2025);
    print!("{}", format_month(&input.month_grid()));

    let grid = input.month_grid();
    if let Some(cell) = grid.cells().iter().find(|cell| cell.in_view_month) {
        let events = input.select_cell(cell);
        println!("picked {}: {}", cell.date, describe_events(&events));
    }

    if let Some(events) = input.on_key(Key::Character('t'), Modifiers::CTRL) {
        println!("ctrl+t: {} -> {:?}", describe_events(&events), input.display_text());
    }

    input.on_text_input("0305");
    let half_typed = input.display_text().to_owned();
    println!("blur with {half_typed:?}: {}", describe_events(&input.on_blur()));
    println!("subscriptions left: {}", registry.len());
    Ok(())
}
