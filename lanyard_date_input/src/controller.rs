// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The date field state machine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chrono::NaiveDate;
use lanyard_date::{
    CanonicalDate, Clock, DISPLAY_LEN, DateError, ViewMonth, format_display, parse_display,
    reformat_partial,
};

use crate::dismiss::{DismissRegistry, DismissSubscription, SubscriptionId};
use crate::grid::{self, DayCell, MonthGrid, YearCell};
use crate::keys::Shortcut;
use crate::{DateInputConfig, DateInputEvent, Events, Key, Modifiers};

/// Direction for paging the calendar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MonthStep {
    /// One month back.
    Previous,
    /// One month forward.
    Next,
}

/// Headless controller for a `dd/mm/yyyy` date field with a popup calendar.
///
/// The controller owns the text shown in the field, the month the calendar
/// displays, and the popup state. The committed value belongs to the host:
/// the controller reports candidate commits as [`DateInputEvent::Changed`] and
/// the host pushes values back with
/// [`set_from_external_value`](Self::set_from_external_value).
///
/// Every mutating operation returns the [`Events`] it produced, in order.
///
/// ```
/// use lanyard_date::{CanonicalDate, FixedClock, NaiveDate};
/// use lanyard_date_input::{DateInputConfig, DateInputController, DateInputEvent, last_change};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let mut input = DateInputController::new(DateInputConfig::new(), FixedClock(today));
///
/// assert!(input.on_text_input("1205").is_empty());
/// assert_eq!(input.display_text(), "12/05");
///
/// let events = input.on_text_input("12/05/2024");
/// assert_eq!(
///     last_change(&events),
///     Some("2024-05-12".parse::<CanonicalDate>().unwrap())
/// );
///
/// // Leaving the field with half a date discards it.
/// input.on_text_input("3");
/// let events = input.on_blur();
/// assert_eq!(
///     events.as_slice(),
///     [DateInputEvent::Changed(CanonicalDate::EMPTY), DateInputEvent::Blurred]
/// );
/// ```
#[derive(Debug)]
pub struct DateInputController<C> {
    config: DateInputConfig,
    clock: C,
    value: CanonicalDate,
    text: String,
    view: ViewMonth,
    open: bool,
    year_picker: bool,
    registry: Option<DismissRegistry>,
    subscription: Option<DismissSubscription>,
}

impl<C: Clock> DateInputController<C> {
    /// Creates an empty field whose calendar shows the current month.
    #[must_use]
    pub fn new(config: DateInputConfig, clock: C) -> Self {
        let view = ViewMonth::of(clock.today());
        Self {
            config,
            clock,
            value: CanonicalDate::EMPTY,
            text: String::new(),
            view,
            open: false,
            year_picker: false,
            registry: None,
            subscription: None,
        }
    }

    /// Attaches an outside-click registry; the popup subscribes to it while open.
    #[must_use]
    pub fn with_dismiss_registry(mut self, registry: DismissRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replaces the configuration. Disabling the field closes the popup.
    pub fn set_config(&mut self, config: DateInputConfig) -> Events {
        self.config = config;
        let mut events = Events::new();
        if self.config.disabled {
            self.close_into(&mut events);
        }
        events
    }

    /// Synchronizes with a value supplied by the host.
    ///
    /// A date is shown as `dd/mm/yyyy` and the calendar moves to its month.
    /// An empty value clears the field and leaves the calendar where it is.
    /// Nothing is emitted.
    pub fn set_from_external_value(&mut self, value: CanonicalDate) {
        self.value = value;
        match value.date() {
            Some(date) => {
                self.text = format_display(date);
                self.view = ViewMonth::of(date);
            }
            None => self.text.clear(),
        }
    }

    /// Like [`set_from_external_value`](Self::set_from_external_value), for a
    /// raw `YYYY-MM-DD` string. Unparsable strings clear the field.
    pub fn set_from_external_str(&mut self, value: &str) {
        self.set_from_external_value(CanonicalDate::from_external(value));
    }

    /// Handles the field's raw text after an edit.
    ///
    /// The text is normalized with [`reformat_partial`] and always shown.
    /// Emptying the field commits the empty value. A complete string is
    /// committed if it parses to a date within bounds; anything else is kept
    /// as in-progress text without emitting.
    pub fn on_text_input(&mut self, raw: &str) -> Events {
        self.text = reformat_partial(raw);
        let mut events = Events::new();
        if self.text.is_empty() {
            self.commit_into(CanonicalDate::EMPTY, &mut events);
        } else if self.text.len() == DISPLAY_LEN {
            match self.check(&self.text) {
                Ok((date, value)) => {
                    self.view = ViewMonth::of(date);
                    self.commit_into(value, &mut events);
                }
                Err(err) => {
                    tracing::debug!(%err, unparsable = err.is_unparsable(), "typed date dropped");
                }
            }
        }
        events
    }

    fn check(&self, text: &str) -> Result<(NaiveDate, CanonicalDate), DateError> {
        let date = self.config.bounds.check(parse_display(text)?)?;
        Ok((date, CanonicalDate::new(date)?))
    }

    /// Commits a date picked from the calendar and dismisses the popup,
    /// replacing whatever the field held.
    ///
    /// Bounds are the grid's concern; see [`select_cell`](Self::select_cell).
    /// Dates without a four-digit year have no canonical form and are ignored.
    pub fn on_calendar_select(&mut self, date: NaiveDate) -> Events {
        let mut events = Events::new();
        if self.select_into(date, &mut events) {
            events.push(DateInputEvent::BlurRequested);
        }
        events
    }

    /// Commits the date of a grid cell, refusing cells outside the bounds.
    pub fn select_cell(&mut self, cell: &DayCell) -> Events {
        if cell.is_disabled {
            tracing::debug!(date = %cell.date, "disabled cell ignored");
            return Events::new();
        }
        self.on_calendar_select(cell.date)
    }

    /// Handles focus entering the field: the popup opens.
    pub fn on_focus(&mut self) -> Events {
        let mut events = Events::new();
        events.push(DateInputEvent::Focused);
        self.open_into(&mut events);
        events
    }

    /// Handles focus leaving the field.
    ///
    /// Incomplete text is discarded and the empty value committed.
    pub fn on_blur(&mut self) -> Events {
        let mut events = Events::new();
        if !self.text.is_empty() && self.text.len() < DISPLAY_LEN {
            tracing::debug!(text = %self.text, "incomplete date discarded on blur");
            self.text.clear();
            self.commit_into(CanonicalDate::EMPTY, &mut events);
        }
        events.push(DateInputEvent::Blurred);
        events
    }

    /// Handles a key press in the field.
    ///
    /// Returns `None` when the key is not bound, so the host can route it on.
    pub fn on_key(&mut self, key: Key, modifiers: Modifiers) -> Option<Events> {
        let events = match Shortcut::lookup(key, modifiers)? {
            Shortcut::SelectToday => self.select_today(),
            Shortcut::Dismiss => self.close(),
        };
        Some(events)
    }

    /// Opens the popup if closed, closes it if open. Ignored while disabled.
    pub fn toggle_popup(&mut self) -> Events {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    /// Opens the popup. Ignored while disabled.
    pub fn open(&mut self) -> Events {
        let mut events = Events::new();
        self.open_into(&mut events);
        events
    }

    /// Closes the popup and leaves the year picker.
    pub fn close(&mut self) -> Events {
        let mut events = Events::new();
        self.close_into(&mut events);
        events
    }

    /// Reports a pointer press outside the widget.
    ///
    /// Only acts while the popup holds an outside-click subscription.
    pub fn on_outside_pointer_down(&mut self) -> Events {
        if self.subscription.is_none() {
            return Events::new();
        }
        self.close()
    }

    /// Switches between the day grid and the year picker. Returns the new mode.
    ///
    /// Has no effect while the popup is hidden.
    pub fn toggle_year_picker(&mut self) -> bool {
        if self.is_popup_visible() {
            self.year_picker = !self.year_picker;
        }
        self.year_picker
    }

    /// Moves the calendar to `year`, keeping the month, and returns to the day grid.
    pub fn select_year(&mut self, year: i32) {
        self.view = self.view.with_year(year);
        self.year_picker = false;
    }

    /// Pages the calendar by one month. Bounds do not limit paging.
    pub fn navigate_month(&mut self, step: MonthStep) {
        self.view = match step {
            MonthStep::Previous => self.view.prev(),
            MonthStep::Next => self.view.next(),
        };
    }

    /// Empties the field, commits the empty value and asks for focus back.
    pub fn clear(&mut self) -> Events {
        let mut events = Events::new();
        self.text.clear();
        self.commit_into(CanonicalDate::EMPTY, &mut events);
        self.close_into(&mut events);
        events.push(DateInputEvent::FocusRequested);
        events
    }

    /// Commits the clock's today.
    pub fn select_today(&mut self) -> Events {
        let date = self.clock.today();
        self.quick_select(date)
    }

    /// Commits the first day of the clock's current month.
    pub fn select_start_of_month(&mut self) -> Events {
        let date = self.clock.start_of_month();
        self.quick_select(date)
    }

    /// Commits the first day of the clock's current year.
    pub fn select_start_of_year(&mut self) -> Events {
        let date = self.clock.start_of_year();
        self.quick_select(date)
    }

    fn quick_select(&mut self, date: NaiveDate) -> Events {
        let mut events = Events::new();
        self.select_into(date, &mut events);
        events
    }

    fn select_into(&mut self, date: NaiveDate, events: &mut Events) -> bool {
        let value = match CanonicalDate::new(date) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(%err, "selected date dropped");
                return false;
            }
        };
        self.text = format_display(date);
        self.view = ViewMonth::of(date);
        self.commit_into(value, events);
        self.close_into(events);
        true
    }

    fn commit_into(&mut self, value: CanonicalDate, events: &mut Events) {
        tracing::debug!(%value, "date committed");
        self.value = value;
        events.push(DateInputEvent::Changed(value));
    }

    fn open_into(&mut self, events: &mut Events) {
        if self.open || self.config.disabled {
            return;
        }
        self.open = true;
        self.subscription = self.registry.as_ref().map(DismissRegistry::subscribe);
        tracing::trace!(view = %self.view, "popup opened");
        events.push(DateInputEvent::PopupOpened);
    }

    fn close_into(&mut self, events: &mut Events) {
        self.year_picker = false;
        if !self.open {
            return;
        }
        self.open = false;
        self.subscription = None;
        tracing::trace!("popup closed");
        events.push(DateInputEvent::PopupClosed);
    }

    /// The text currently shown in the field.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.text
    }

    /// The last committed or externally supplied value.
    #[must_use]
    pub fn value(&self) -> CanonicalDate {
        self.value
    }

    /// The month the calendar shows.
    #[must_use]
    pub fn view_month(&self) -> ViewMonth {
        self.view
    }

    /// Returns `true` if the popup has been opened and not closed since.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the popup should be drawn.
    #[must_use]
    pub fn is_popup_visible(&self) -> bool {
        self.open && !self.config.disabled
    }

    /// Returns `true` while the popup shows the year picker instead of days.
    #[must_use]
    pub fn is_year_picker_open(&self) -> bool {
        self.year_picker
    }

    /// Returns `true` if a clear button should be offered.
    #[must_use]
    pub fn show_clear_button(&self) -> bool {
        !self.text.is_empty() && !self.config.disabled
    }

    /// Popup header, such as `October 2026`.
    #[must_use]
    pub fn header_label(&self) -> String {
        self.view.to_string()
    }

    /// The years offered by the year picker.
    #[must_use]
    pub fn year_range(&self) -> Vec<YearCell> {
        grid::year_cells(self.view)
    }

    /// The day grid for the current view.
    #[must_use]
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.view,
            self.config.week_start,
            self.value.date(),
            self.clock.today(),
            &self.config.bounds,
        )
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DateInputConfig {
        &self.config
    }

    /// The clock used for today and the quick shortcuts.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The outside-click subscription held while the popup is open.
    #[must_use]
    pub fn subscription_id(&self) -> Option<SubscriptionId> {
        self.subscription.as_ref().map(DismissSubscription::id)
    }
}
