// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavioural tests for `DateInputController`.

use lanyard_date::{Bounds, CanonicalDate, FixedClock, NaiveDate, ViewMonth};
use lanyard_date_input::dismiss::DismissRegistry;
use lanyard_date_input::{
    DateInputConfig, DateInputController, DateInputEvent, Key, Modifiers, MonthStep, last_change,
};
use proptest::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    ymd(2026, 10, 16)
}

fn input() -> DateInputController<FixedClock> {
    DateInputController::new(DateInputConfig::new(), FixedClock(today()))
}

fn bounded(min: NaiveDate, max: NaiveDate) -> DateInputController<FixedClock> {
    let bounds = Bounds::try_new(Some(min), Some(max)).unwrap();
    DateInputController::new(
        DateInputConfig::new().with_bounds(bounds),
        FixedClock(today()),
    )
}

fn canonical(date: NaiveDate) -> CanonicalDate {
    CanonicalDate::new(date).unwrap()
}

fn changed(date: NaiveDate) -> DateInputEvent {
    DateInputEvent::Changed(canonical(date))
}

const EMPTY_CHANGE: DateInputEvent = DateInputEvent::Changed(CanonicalDate::EMPTY);

#[test]
fn external_value_is_shown_in_display_form() {
    let mut c = input();
    c.set_from_external_str("2024-05-12");
    assert_eq!(c.display_text(), "12/05/2024");
    assert_eq!(c.view_month(), ViewMonth::new(2024, 5).unwrap());
    assert_eq!(c.value().to_string(), "2024-05-12");
}

#[test]
fn digits_typed_one_at_a_time_gain_separators() {
    let mut c = input();
    let mut commits = Vec::new();
    for digit in "12052024".chars() {
        // Hosts hand back the field contents plus the new keystroke.
        let typed = format!("{}{digit}", c.display_text());
        commits.extend(c.on_text_input(&typed));
    }
    assert_eq!(c.display_text(), "12/05/2024");
    assert_eq!(commits, [changed(ymd(2024, 5, 12))]);
}

#[test]
fn pasted_digits_are_reformatted() {
    let mut c = input();
    c.on_text_input("12");
    assert_eq!(c.display_text(), "12/");
    c.on_text_input("1205");
    assert_eq!(c.display_text(), "12/05");
    let events = c.on_text_input("12052024");
    assert_eq!(c.display_text(), "12/05/2024");
    assert_eq!(events.as_slice(), [changed(ymd(2024, 5, 12))]);
    assert_eq!(c.view_month(), ViewMonth::new(2024, 5).unwrap());
}

#[test]
fn impossible_dates_never_commit() {
    let mut c = input();
    assert!(c.on_text_input("31/02/2024").is_empty());
    assert_eq!(c.display_text(), "31/02/2024");
    assert!(c.value().is_empty());
    assert!(c.on_text_input("29/02/2023").is_empty());
    assert_eq!(
        c.on_text_input("29/02/2024").as_slice(),
        [changed(ymd(2024, 2, 29))]
    );
}

#[test]
fn bounds_are_inclusive() {
    let mut c = bounded(ymd(2024, 1, 1), ymd(2024, 12, 31));
    assert_eq!(
        c.on_text_input("01/01/2024").as_slice(),
        [changed(ymd(2024, 1, 1))]
    );
    assert_eq!(
        c.on_text_input("31/12/2024").as_slice(),
        [changed(ymd(2024, 12, 31))]
    );
    assert!(c.on_text_input("31/12/2023").is_empty());
    assert!(c.on_text_input("01/01/2025").is_empty());
    // The last accepted value stands.
    assert_eq!(c.value(), canonical(ymd(2024, 12, 31)));
}

#[test]
fn blur_with_partial_text_clears_and_commits_empty() {
    let mut c = input();
    c.on_text_input("1205");
    let events = c.on_blur();
    assert_eq!(events.as_slice(), [EMPTY_CHANGE, DateInputEvent::Blurred]);
    assert_eq!(c.display_text(), "");
}

#[test]
fn blur_with_empty_or_complete_text_only_passes_through() {
    let mut c = input();
    assert_eq!(c.on_blur().as_slice(), [DateInputEvent::Blurred]);
    c.on_text_input("12/05/2024");
    assert_eq!(c.on_blur().as_slice(), [DateInputEvent::Blurred]);
    assert_eq!(c.display_text(), "12/05/2024");
}

#[test]
fn calendar_selection_commits_and_closes() {
    let mut c = input();
    c.on_focus();
    c.toggle_year_picker();
    let events = c.on_calendar_select(ymd(2026, 10, 3));
    assert_eq!(
        events.as_slice(),
        [
            changed(ymd(2026, 10, 3)),
            DateInputEvent::PopupClosed,
            DateInputEvent::BlurRequested,
        ]
    );
    assert_eq!(c.display_text(), "03/10/2026");
    assert!(!c.is_open());
    assert!(!c.is_year_picker_open());
}

#[test]
fn calendar_selection_replaces_any_typed_text() {
    // Half a date, then a complete but impossible one.
    for typed in ["12/0", "31/02/2024"] {
        let mut c = input();
        c.on_focus();
        assert!(c.on_text_input(typed).is_empty());
        assert_eq!(c.display_text(), typed);

        let events = c.on_calendar_select(ymd(2026, 10, 3));
        assert_eq!(
            events.as_slice(),
            [
                changed(ymd(2026, 10, 3)),
                DateInputEvent::PopupClosed,
                DateInputEvent::BlurRequested,
            ],
            "selecting after {typed:?}"
        );
        assert_eq!(c.display_text(), "03/10/2026");
        assert_eq!(c.value(), canonical(ymd(2026, 10, 3)));
        assert!(!c.is_open());
    }
}

#[test]
fn today_shortcut_uses_the_clock() {
    let mut c = input();
    c.navigate_month(MonthStep::Previous);
    let events = c.on_key(Key::Character('t'), Modifiers::META).unwrap();
    assert_eq!(last_change(&events), Some(canonical(today())));
    assert_eq!(c.view_month(), ViewMonth::of(today()));
}

#[test]
fn shortcuts_ignore_bounds() {
    let mut c = bounded(ymd(2000, 1, 1), ymd(2000, 12, 31));
    let events = c.select_today();
    assert_eq!(last_change(&events), Some(canonical(today())));
}

#[test]
fn clear_is_idempotent() {
    let mut c = input();
    c.set_from_external_str("2024-05-12");
    c.open();
    let first = c.clear();
    assert_eq!(
        first.as_slice(),
        [
            EMPTY_CHANGE,
            DateInputEvent::PopupClosed,
            DateInputEvent::FocusRequested,
        ]
    );
    let second = c.clear();
    assert_eq!(
        second.as_slice(),
        [EMPTY_CHANGE, DateInputEvent::FocusRequested]
    );
    assert_eq!(c.display_text(), "");
    assert!(c.value().is_empty());
    assert!(!c.is_open());
}

#[test]
fn year_selection_moves_view_without_committing() {
    let mut c = input();
    c.set_from_external_str("2024-05-12");
    c.open();
    c.toggle_year_picker();
    let years: Vec<i32> = c.year_range().iter().map(|cell| cell.year).collect();
    assert_eq!(years, (2019..=2030).collect::<Vec<_>>());
    c.select_year(2027);
    assert_eq!(c.view_month(), ViewMonth::new(2027, 5).unwrap());
    assert_eq!(c.value().to_string(), "2024-05-12");
    assert_eq!(c.display_text(), "12/05/2024");
}

#[test]
fn outside_click_subscription_lives_exactly_while_open() {
    let registry = DismissRegistry::new();
    let mut c = input().with_dismiss_registry(registry.clone());
    assert!(registry.is_empty());
    assert_eq!(c.subscription_id(), None);

    c.open();
    let id = c.subscription_id().unwrap();
    assert!(registry.is_active(id));

    // Reopening does not stack subscriptions.
    c.open();
    assert_eq!(registry.len(), 1);

    assert_eq!(
        c.on_outside_pointer_down().as_slice(),
        [DateInputEvent::PopupClosed]
    );
    assert!(registry.is_empty());
    assert!(c.on_outside_pointer_down().is_empty());

    let releases: [fn(&mut DateInputController<FixedClock>); 4] = [
        |c| {
            c.close();
        },
        |c| {
            c.clear();
        },
        |c| {
            c.select_today();
        },
        |c| {
            c.on_calendar_select(ymd(2026, 1, 1));
        },
    ];
    for release in releases {
        c.open();
        assert_eq!(registry.len(), 1);
        release(&mut c);
        assert!(registry.is_empty());
    }
}

#[test]
fn dropping_controller_releases_subscription() {
    let registry = DismissRegistry::new();
    let mut c = input().with_dismiss_registry(registry.clone());
    c.on_focus();
    assert_eq!(registry.len(), 1);
    drop(c);
    assert!(registry.is_empty());
}

#[test]
fn accessibility_attributes() {
    let config = DateInputConfig::new().with_id("dob").with_error(true);
    assert_eq!(config.aria_label(), "Date input (dd/mm/yyyy format)");
    assert_eq!(config.aria_described_by().as_deref(), Some("dob-error"));
    assert!(!config.shows_hint());
}

proptest! {
    #[test]
    fn external_round_trip(days in 0_u64..3_652_059) {
        let date = ymd(1, 1, 1) + chrono::Days::new(days);
        let mut c = input();
        c.set_from_external_value(canonical(date));
        let shown = c.display_text().to_owned();

        let mut other = input();
        let events = other.on_text_input(&shown);
        prop_assert_eq!(last_change(&events), Some(canonical(date)));
        prop_assert_eq!(other.value(), c.value());
    }

    #[test]
    fn calendar_commits_always_round_trip(year in -50_i32..20_050, months in -30_i32..30) {
        let mut c = input();
        c.open();
        c.toggle_year_picker();
        c.select_year(year);
        for _ in 0..months.unsigned_abs() {
            c.navigate_month(if months < 0 { MonthStep::Previous } else { MonthStep::Next });
        }
        let grid = c.month_grid();
        prop_assert_eq!(grid.cells().len(), 42);
        for cell in grid.cells() {
            let mut picker = input();
            let events = picker.select_cell(cell);
            if cell.is_disabled {
                prop_assert!(events.is_empty());
                continue;
            }
            let value = last_change(&events).unwrap();
            prop_assert_eq!(value.to_string().parse::<CanonicalDate>(), Ok(value));
            prop_assert_eq!(picker.display_text().len(), 10);
        }
    }

    #[test]
    fn arbitrary_text_never_commits_an_out_of_bounds_date(raw in "[0-9/a-z]{0,14}") {
        let min = ymd(2020, 1, 1);
        let max = ymd(2029, 12, 31);
        let mut c = bounded(min, max);
        let events = c.on_text_input(&raw);
        prop_assert!(c.display_text().len() <= 10);
        if let Some(value) = last_change(&events) {
            if let Some(date) = value.date() {
                prop_assert!(min <= date && date <= max);
            }
        }
    }
}
