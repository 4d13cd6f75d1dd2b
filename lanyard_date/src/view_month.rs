// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The month a calendar popup currently renders.

use core::fmt;

use chrono::{Datelike, Month, NaiveDate};

use crate::canonical::YEAR_RANGE;

/// A year + month pair naming the month a calendar popup displays.
///
/// A view month is independent of any committed date: users
/// page through months and years without changing the value. Navigation
/// ignores selection bounds but saturates at [`ViewMonth::FIRST`] and
/// [`ViewMonth::LAST`], so every day of a view month has a four-digit year.
///
/// ```
/// use lanyard_date::ViewMonth;
///
/// let view = ViewMonth::new(2024, 12).unwrap();
/// assert_eq!(view.next(), ViewMonth::new(2025, 1).unwrap());
/// assert_eq!(view.next().prev(), view);
/// assert_eq!(view.to_string(), "December 2024");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewMonth {
    year: i32,
    month: u32,
}

impl ViewMonth {
    /// January of the first year in [`YEAR_RANGE`].
    pub const FIRST: Self = Self {
        year: *YEAR_RANGE.start(),
        month: 1,
    };

    /// December of the last year in [`YEAR_RANGE`].
    pub const LAST: Self = Self {
        year: *YEAR_RANGE.end(),
        month: 12,
    };

    /// Creates a view month, returning `None` for a month outside `1..=12`
    /// or a year outside [`YEAR_RANGE`].
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !YEAR_RANGE.contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::of)
    }

    /// The month containing `date`, saturating at [`FIRST`](Self::FIRST)
    /// and [`LAST`](Self::LAST).
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
        .clamp(Self::FIRST, Self::LAST)
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month number, `1..=12`.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Month as a [`chrono::Month`].
    #[must_use]
    pub fn month_of_year(self) -> Month {
        // `month` is kept in `1..=12` by every constructor.
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .unwrap_or(Month::January)
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days_in_month())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of days in the month.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year, 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Returns `true` if `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Shifts by `delta` months, saturating at [`FIRST`](Self::FIRST) and
    /// [`LAST`](Self::LAST).
    #[must_use]
    pub fn shifted(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) + 1;
        match i32::try_from(year) {
            Ok(year) => {
                // `rem_euclid(12) + 1` is always in `1..=12`.
                let month = u32::try_from(month).unwrap_or(1);
                Self { year, month }.clamp(Self::FIRST, Self::LAST)
            }
            Err(_) if delta < 0 => Self::FIRST,
            Err(_) => Self::LAST,
        }
    }

    /// The previous month.
    #[must_use]
    pub fn prev(self) -> Self {
        self.shifted(-1)
    }

    /// The next month.
    #[must_use]
    pub fn next(self) -> Self {
        self.shifted(1)
    }

    /// Replaces the year, keeping the month. The year saturates at
    /// [`YEAR_RANGE`].
    #[must_use]
    pub fn with_year(self, year: i32) -> Self {
        Self {
            year: year.clamp(*YEAR_RANGE.start(), *YEAR_RANGE.end()),
            month: self.month,
        }
    }
}

impl From<NaiveDate> for ViewMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for ViewMonth {
    /// Formats as `"<Month name> <year>"`, e.g. `"October 2026"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_of_year().name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn navigation_wraps_years() {
        let jan = ViewMonth::new(2024, 1).unwrap();
        assert_eq!(jan.prev(), ViewMonth::new(2023, 12).unwrap());
        assert_eq!(jan.shifted(-13), ViewMonth::new(2022, 12).unwrap());
        assert_eq!(jan.shifted(24), ViewMonth::new(2026, 1).unwrap());
    }

    #[test]
    fn navigation_saturates_at_four_digit_years() {
        assert_eq!(ViewMonth::LAST.next(), ViewMonth::LAST);
        assert_eq!(ViewMonth::LAST.shifted(i32::MAX), ViewMonth::LAST);
        assert_eq!(ViewMonth::FIRST.prev(), ViewMonth::FIRST);
        assert_eq!(ViewMonth::FIRST.shifted(i32::MIN), ViewMonth::FIRST);
        assert_eq!(ViewMonth::of(NaiveDate::MAX), ViewMonth::LAST);
        assert_eq!(ViewMonth::of(NaiveDate::MIN), ViewMonth::FIRST);
        assert_eq!(ViewMonth::new(10_000, 1), None);
        assert_eq!(ViewMonth::new(-1, 12), None);
    }

    #[test]
    fn with_year_saturates() {
        let view = ViewMonth::new(2024, 10).unwrap();
        assert_eq!(view.with_year(10_000), ViewMonth::new(9999, 10).unwrap());
        assert_eq!(view.with_year(-40), ViewMonth::new(0, 10).unwrap());
        assert_eq!(ViewMonth::new(9999, 12).unwrap().last_day().to_string(), "9999-12-31");
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(ViewMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(ViewMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(ViewMonth::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(ViewMonth::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(ViewMonth::new(2024, 9).unwrap().days_in_month(), 30);
        assert_eq!(
            ViewMonth::new(2024, 2).unwrap().last_day(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn with_year_keeps_month() {
        let view = ViewMonth::new(2024, 2).unwrap().with_year(2019);
        assert_eq!((view.year(), view.month()), (2019, 2));
    }

    #[test]
    fn rejects_invalid_months() {
        assert_eq!(ViewMonth::new(2024, 0), None);
        assert_eq!(ViewMonth::new(2024, 13), None);
    }

    #[test]
    fn label_uses_full_month_name() {
        assert_eq!(ViewMonth::new(2026, 10).unwrap().to_string(), "October 2026");
    }
}
