// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lanyard Date Input: a headless `dd/mm/yyyy` date field with a popup calendar.
//!
//! [`DateInputController`] holds everything a date field needs between
//! frames: the text being typed, the month the calendar shows, whether the
//! popup and its year picker are open, and the outside-click subscription
//! that closes the popup. It renders nothing and owns no event loop. Hosts
//! feed it focus, text and key input, draw from its queries, and react to the
//! [`DateInputEvent`]s each operation returns.
//!
//! The committed value is exchanged in canonical `YYYY-MM-DD` form
//! ([`CanonicalDate`](lanyard_date::CanonicalDate)). Typed text is committed
//! only once it forms a complete valid date within the configured bounds;
//! leaving the field with a partial date discards it.
//!
//! ## Minimal example
//!
//! ```rust
//! use lanyard_date::{FixedClock, NaiveDate};
//! use lanyard_date_input::{
//!     DateInputConfig, DateInputController, DateInputEvent, Key, Modifiers,
//!     dismiss::DismissRegistry, last_change,
//! };
//!
//! let registry = DismissRegistry::new();
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
//! let mut input = DateInputController::new(DateInputConfig::new(), clock)
//!     .with_dismiss_registry(registry.clone());
//!
//! // Focusing the field opens the calendar and subscribes to outside clicks.
//! input.on_focus();
//! assert!(input.is_popup_visible());
//! assert_eq!(registry.len(), 1);
//!
//! // Ctrl+T picks today and closes the popup.
//! let events = input.on_key(Key::Character('t'), Modifiers::CTRL).unwrap();
//! assert_eq!(last_change(&events).unwrap().to_string(), "2026-10-16");
//! assert!(events.contains(&DateInputEvent::PopupClosed));
//! assert_eq!(input.display_text(), "16/10/2026");
//! assert!(registry.is_empty());
//! ```
//!
//! ## Failures
//!
//! No error reaches the host. Text that does not parse, or parses to a date
//! outside the bounds, is simply not committed; the rejection is logged at
//! `debug` level through `tracing` as a [`DateError`].
//!
//! ## Features
//!
//! - `std` (default): forwards to `lanyard_date/std` for the system clock.
//! - `serde`: derives for [`DateInputConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod event;
mod keys;

pub mod dismiss;
pub mod grid;

pub use config::{ARIA_LABEL, DateInputConfig};
pub use controller::{DateInputController, MonthStep};
pub use event::{DateInputEvent, Events, last_change};
pub use keys::{Key, Modifiers};

pub use lanyard_date::DateError;
