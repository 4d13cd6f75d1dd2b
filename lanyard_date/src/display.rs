// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-facing `dd/mm/yyyy` text: formatting, strict parsing, and the
//! progressive reformatting applied while a user types.
//!
//! ## Progressive reformatting
//!
//! [`reformat_partial`] is applied to every raw value of a text field. It:
//!
//! 1. Drops every character that is not an ASCII digit or `/`.
//! 2. Inserts a `/` after the first two characters when at least two digits
//!    are present and the text contains no separator yet.
//! 3. Inserts a second `/` once the segment after the only separator grows
//!    beyond two characters.
//! 4. Caps the result at [`DISPLAY_LEN`] characters.
//!
//! ```
//! use lanyard_date::reformat_partial;
//!
//! assert_eq!(reformat_partial("12"), "12/");
//! assert_eq!(reformat_partial("1205"), "12/05");
//! assert_eq!(reformat_partial("12052024"), "12/05/2024");
//! assert_eq!(reformat_partial("12-05-2024"), "12/05/2024");
//! ```

use alloc::string::String;
use core::fmt::Write as _;

use chrono::{Datelike, NaiveDate};

use crate::DateError;
use crate::canonical::{calendar_date, digits};

/// Length of a complete `dd/mm/yyyy` string.
pub const DISPLAY_LEN: usize = 10;

/// Placeholder shown by an empty field.
pub const DISPLAY_PLACEHOLDER: &str = "dd/mm/yyyy";

const SEPARATOR: char = '/';

/// Formats a date as `dd/mm/yyyy`.
#[must_use]
pub fn format_display(date: NaiveDate) -> String {
    let mut out = String::with_capacity(DISPLAY_LEN);
    // Writing into a `String` cannot fail.
    let _ = write!(
        out,
        "{:02}/{:02}/{:04}",
        date.day(),
        date.month(),
        date.year()
    );
    out
}

/// Strictly parses a complete `dd/mm/yyyy` string.
///
/// Anything other than two digits, `/`, two digits, `/`, four digits that
/// names a real calendar date is [`DateError::Unparsable`].
pub fn parse_display(text: &str) -> Result<NaiveDate, DateError> {
    let bytes = text.as_bytes();
    if bytes.len() != DISPLAY_LEN || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(DateError::unparsable(text));
    }
    let day = digits(&bytes[0..2]).ok_or_else(|| DateError::unparsable(text))?;
    let month = digits(&bytes[3..5]).ok_or_else(|| DateError::unparsable(text))?;
    let year = digits(&bytes[6..10]).ok_or_else(|| DateError::unparsable(text))?;
    calendar_date(year, month, day).ok_or_else(|| DateError::unparsable(text))
}

/// Filters and progressively reformats raw field input towards `dd/mm/yyyy`.
///
/// See the [module documentation](self) for the exact rules.
#[must_use]
pub fn reformat_partial(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == SEPARATOR)
        .collect();

    let mut formatted = if cleaned.len() >= 2 && !cleaned.contains(SEPARATOR) {
        let (day, rest) = cleaned.split_at(2);
        let mut out = String::with_capacity(cleaned.len() + 1);
        out.push_str(day);
        out.push(SEPARATOR);
        out.push_str(rest);
        out
    } else {
        cleaned
    };

    if formatted.matches(SEPARATOR).count() == 1 {
        if let Some((day, rest)) = formatted.split_once(SEPARATOR) {
            if rest.len() > 2 {
                let (month, year) = rest.split_at(2);
                let mut out = String::with_capacity(formatted.len() + 1);
                out.push_str(day);
                out.push(SEPARATOR);
                out.push_str(month);
                out.push(SEPARATOR);
                out.push_str(year);
                formatted = out;
            }
        }
    }

    // Only ASCII remains, so byte truncation is character truncation.
    formatted.truncate(DISPLAY_LEN);
    formatted
}

/// Returns `true` once `text` has the length of a complete `dd/mm/yyyy` value.
#[must_use]
pub fn is_complete(text: &str) -> bool {
    text.len() == DISPLAY_LEN
}
