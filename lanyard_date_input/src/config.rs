// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied configuration for a date field.

use alloc::format;
use alloc::string::String;

use chrono::Weekday;
use lanyard_date::{Bounds, DISPLAY_PLACEHOLDER};

/// Accessible label announced for the text field.
pub const ARIA_LABEL: &str = "Date input (dd/mm/yyyy format)";

/// Configuration a host passes to a [`DateInputController`](crate::DateInputController).
///
/// Apart from [`bounds`](Self::bounds), [`week_start`](Self::week_start) and
/// [`disabled`](Self::disabled), every field is a presentation flag the
/// controller passes through untouched. In particular `error` is never derived
/// from parse failures: hosts set it from their own validation.
///
/// ```
/// use lanyard_date::{Bounds, NaiveDate};
/// use lanyard_date_input::DateInputConfig;
///
/// let config = DateInputConfig::new()
///     .with_id("joining-date")
///     .with_required(true)
///     .with_bounds(
///         Bounds::UNBOUNDED
///             .with_min(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
///             .unwrap(),
///     );
/// assert_eq!(config.placeholder, "dd/mm/yyyy");
/// assert_eq!(config.aria_described_by(), None);
///
/// let config = config.with_error(true);
/// assert_eq!(config.aria_described_by().as_deref(), Some("joining-date-error"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateInputConfig {
    /// Inclusive selectable range applied to typed dates and calendar cells.
    pub bounds: Bounds,
    /// Placeholder text for the empty field.
    pub placeholder: String,
    /// Disables the field: the popup never opens and no clear button is offered.
    pub disabled: bool,
    /// Marks the field as required.
    pub required: bool,
    /// Requests error styling.
    pub error: bool,
    /// Extra style class names.
    pub class_name: String,
    /// Element id, also used to derive the error description id.
    pub id: Option<String>,
    /// First day of the week in calendar grids.
    pub week_start: Weekday,
}

impl Default for DateInputConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::UNBOUNDED,
            placeholder: String::from(DISPLAY_PLACEHOLDER),
            disabled: false,
            required: false,
            error: false,
            class_name: String::new(),
            id: None,
            week_start: Weekday::Sun,
        }
    }
}

impl DateInputConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selectable range.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the required flag.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the error flag.
    #[must_use]
    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Sets extra style class names.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Sets the element id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the first day of the week.
    #[must_use]
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Accessible label for the text field.
    #[must_use]
    pub fn aria_label(&self) -> &'static str {
        ARIA_LABEL
    }

    /// Id of the element describing the error, when error styling is on and an id is set.
    #[must_use]
    pub fn aria_described_by(&self) -> Option<String> {
        match (&self.id, self.error) {
            (Some(id), true) => Some(format!("{id}-error")),
            _ => None,
        }
    }

    /// Whether the helper hint ("type date or click calendar icon") should show.
    #[must_use]
    pub fn shows_hint(&self) -> bool {
        !self.error && !self.disabled
    }
}
