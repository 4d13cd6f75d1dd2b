// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for date parsing and bounds checks.

use alloc::string::String;

use chrono::NaiveDate;

/// Why a candidate date was rejected.
///
/// Widgets built on this crate generally do not surface these to their host;
/// they drop the candidate change instead. The error still carries enough
/// context to be logged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The text does not resolve to a calendar date.
    #[error("`{input}` is not a valid date")]
    Unparsable {
        /// The rejected text.
        input: String,
    },
    /// The text resolves to a calendar date that violates the active bounds.
    #[error("{date} is outside the selectable range")]
    OutOfBounds {
        /// The rejected date.
        date: NaiveDate,
    },
}

impl DateError {
    pub(crate) fn unparsable(input: &str) -> Self {
        Self::Unparsable {
            input: String::from(input),
        }
    }

    /// Returns `true` for [`DateError::Unparsable`].
    #[must_use]
    pub fn is_unparsable(&self) -> bool {
        matches!(self, Self::Unparsable { .. })
    }

    /// Returns `true` for [`DateError::OutOfBounds`].
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

/// Error returned when constructing [`Bounds`](crate::Bounds) with a minimum after the maximum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// `min` is later than `max`, so no date could ever be selected.
    #[error("minimum date {min} is after maximum date {max}")]
    Inverted {
        /// Requested minimum.
        min: NaiveDate,
        /// Requested maximum.
        max: NaiveDate,
    },
}
