// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources of "today".

use chrono::{Datelike, NaiveDate};

/// A source of the current calendar date.
///
/// Quick-selection shortcuts (today, start of month, start of year) and
/// "today" highlighting in calendar grids are computed from a `Clock`, which
/// keeps them deterministic under test.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> NaiveDate;

    /// First day of the current month.
    fn start_of_month(&self) -> NaiveDate {
        let today = self.today();
        today.with_day(1).unwrap_or(today)
    }

    /// First day of the current year.
    fn start_of_year(&self) -> NaiveDate {
        let today = self.today();
        today.with_ordinal(1).unwrap_or(today)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// A clock frozen at a given date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The local wall clock.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_dates_follow_today() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(
            clock.start_of_month(),
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
        );
        assert_eq!(
            clock.start_of_year(),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_in_a_plausible_range() {
        let today = SystemClock.today();
        assert!(today.year() >= 2024, "clock reported {today}");
    }
}
