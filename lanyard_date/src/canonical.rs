// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The machine-readable `YYYY-MM-DD` value exchanged with a host form.

use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::DateError;

/// Length of a complete `YYYY-MM-DD` string.
pub const CANONICAL_LEN: usize = 10;

/// Years that fit the four-digit year field of both text forms.
pub const YEAR_RANGE: RangeInclusive<i32> = 0..=9999;

/// Returns `true` if `date` can be written as `YYYY-MM-DD` and `dd/mm/yyyy`.
#[must_use]
pub fn is_representable(date: NaiveDate) -> bool {
    YEAR_RANGE.contains(&date.year())
}

/// A date in canonical `YYYY-MM-DD` form, or empty when no date is selected.
///
/// This is the value a host form owns. It is always either empty or a valid
/// calendar date with a four-digit year; there is no way to construct a
/// `CanonicalDate` that formats to a malformed string.
///
/// ```
/// use lanyard_date::CanonicalDate;
///
/// let date: CanonicalDate = "2024-05-12".parse().unwrap();
/// assert_eq!(date.to_string(), "2024-05-12");
///
/// let empty: CanonicalDate = "".parse().unwrap();
/// assert!(empty.is_empty());
/// assert_eq!(empty.to_string(), "");
///
/// // Lenient conversion for values supplied out-of-band.
/// assert!(CanonicalDate::from_external("2024-02-31").is_empty());
///
/// // Years past 9999 have no canonical form.
/// let far = lanyard_date::NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
/// assert!(CanonicalDate::new(far).unwrap_err().is_out_of_bounds());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(Option<NaiveDate>);

impl CanonicalDate {
    /// The empty value.
    pub const EMPTY: Self = Self(None);

    /// Wraps a concrete date.
    ///
    /// Dates whose year falls outside [`YEAR_RANGE`] are
    /// [`DateError::OutOfBounds`].
    pub fn new(date: NaiveDate) -> Result<Self, DateError> {
        if is_representable(date) {
            Ok(Self(Some(date)))
        } else {
            Err(DateError::OutOfBounds { date })
        }
    }

    /// Converts an externally supplied string, degrading anything unparsable to empty.
    #[must_use]
    pub fn from_external(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: DateError| {
            tracing::trace!(%err, "external value degraded to empty");
            Self::EMPTY
        })
    }

    /// Returns the wrapped date, if any.
    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        self.0
    }

    /// Returns `true` if no date is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }
}

impl TryFrom<NaiveDate> for CanonicalDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(
                f,
                "{:04}-{:02}-{:02}",
                date.year(),
                date.month(),
                date.day()
            ),
            None => Ok(()),
        }
    }
}

impl FromStr for CanonicalDate {
    type Err = DateError;

    /// Strictly parses `YYYY-MM-DD`; the empty string parses to [`CanonicalDate::EMPTY`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::EMPTY);
        }
        parse_canonical(s).map(|date| Self(Some(date)))
    }
}

/// Strictly parses a complete `YYYY-MM-DD` string into a calendar date.
pub fn parse_canonical(s: &str) -> Result<NaiveDate, DateError> {
    let bytes = s.as_bytes();
    if bytes.len() != CANONICAL_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DateError::unparsable(s));
    }
    let year = digits(&bytes[0..4]).ok_or_else(|| DateError::unparsable(s))?;
    let month = digits(&bytes[5..7]).ok_or_else(|| DateError::unparsable(s))?;
    let day = digits(&bytes[8..10]).ok_or_else(|| DateError::unparsable(s))?;
    calendar_date(year, month, day).ok_or_else(|| DateError::unparsable(s))
}

/// Reads an all-ASCII-digit field.
pub(crate) fn digits(field: &[u8]) -> Option<u32> {
    field.iter().try_fold(0_u32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

pub(crate) fn calendar_date(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::string::{String, ToString};

    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::CanonicalDate;

    impl Serialize for CanonicalDate {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for CanonicalDate {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(de::Error::custom)
        }
    }
}
