// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lanyard Date: calendar-date primitives for form widgets.
//!
//! Date inputs juggle two textual forms of the same value:
//!
//! - A **canonical** `YYYY-MM-DD` value exchanged with the host form
//!   ([`CanonicalDate`]), which is always either empty or a valid date with
//!   a four-digit year.
//! - A human-facing **display** `dd/mm/yyyy` string shown in the text field,
//!   which may be partially typed ([`reformat_partial`], [`parse_display`],
//!   [`format_display`]).
//!
//! On top of that a popup calendar needs a [`ViewMonth`] it can page through
//! without touching the value, optional inclusive [`Bounds`], and a [`Clock`]
//! for "today".
//!
//! ## Minimal example
//!
//! ```rust
//! use lanyard_date::{Bounds, CanonicalDate, format_display, parse_display, reformat_partial};
//!
//! // Host hands us a canonical value; show it as dd/mm/yyyy.
//! let value: CanonicalDate = "2024-05-12".parse().unwrap();
//! let shown = format_display(value.date().unwrap());
//! assert_eq!(shown, "12/05/2024");
//!
//! // User types digits; slashes appear on their own.
//! let typed = reformat_partial("12052024");
//! assert_eq!(typed, "12/05/2024");
//!
//! // Once complete, parse strictly and check bounds before committing.
//! let date = parse_display(&typed).unwrap();
//! assert!(Bounds::UNBOUNDED.check(date).is_ok());
//! assert_eq!(CanonicalDate::new(date), Ok(value));
//! ```
//!
//! ## Errors
//!
//! Parsing and bounds checks report [`DateError`]: either
//! [`DateError::Unparsable`] or [`DateError::OutOfBounds`]. Widgets typically
//! drop the candidate change on either.
//!
//! ## Features
//!
//! - `std` (default): enables [`SystemClock`], backed by the local wall clock.
//! - `serde`: string-form (de)serialization of [`CanonicalDate`], plus derives
//!   for [`Bounds`] and [`ViewMonth`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod canonical;
mod clock;
mod display;
mod error;
mod view_month;

pub use bounds::Bounds;
pub use canonical::{CANONICAL_LEN, CanonicalDate, YEAR_RANGE, is_representable, parse_canonical};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock};
pub use display::{
    DISPLAY_LEN, DISPLAY_PLACEHOLDER, format_display, is_complete, parse_display, reformat_partial,
};
pub use error::{BoundsError, DateError};
pub use view_month::ViewMonth;

pub use chrono::NaiveDate;
