// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications produced by the controller for its host.

use lanyard_date::CanonicalDate;
use smallvec::SmallVec;

/// A notification for the host form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DateInputEvent {
    /// A value was committed. Fired for complete valid typed dates, calendar
    /// selections, shortcuts, clears, and discarded incomplete input.
    Changed(CanonicalDate),
    /// The text field gained focus.
    Focused,
    /// The text field lost focus.
    Blurred,
    /// The controller wants focus placed back in the text field.
    FocusRequested,
    /// The controller wants the text field to give up focus.
    BlurRequested,
    /// The calendar popup opened.
    PopupOpened,
    /// The calendar popup closed.
    PopupClosed,
}

impl DateInputEvent {
    /// The committed value, for [`DateInputEvent::Changed`].
    #[must_use]
    pub fn changed_value(&self) -> Option<CanonicalDate> {
        match self {
            Self::Changed(value) => Some(*value),
            _ => None,
        }
    }
}

/// The events produced by a single controller operation, in order.
pub type Events = SmallVec<[DateInputEvent; 4]>;

/// Returns the last value committed in `events`, if any.
#[must_use]
pub fn last_change(events: &[DateInputEvent]) -> Option<CanonicalDate> {
    events.iter().rev().find_map(DateInputEvent::changed_value)
}
