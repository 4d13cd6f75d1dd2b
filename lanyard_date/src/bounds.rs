// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional minimum/maximum constraints on selectable dates.

use chrono::NaiveDate;

use crate::{BoundsError, DateError};

/// Inclusive minimum/maximum constraints on selectable dates.
///
/// A candidate is rejected when it is strictly before `min` or strictly after
/// `max`; the boundary dates themselves are accepted. Either side may be
/// absent.
///
/// ```
/// use chrono::NaiveDate;
/// use lanyard_date::Bounds;
///
/// let min = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let max = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let bounds = Bounds::try_new(Some(min), Some(max)).unwrap();
///
/// assert!(bounds.contains(min));
/// assert!(bounds.contains(max));
/// assert!(!bounds.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl Bounds {
    /// Bounds that accept every date.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Creates bounds, rejecting a minimum that lies after the maximum.
    pub fn try_new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self, BoundsError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(BoundsError::Inverted { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// Returns these bounds with `min` replaced.
    pub fn with_min(self, min: NaiveDate) -> Result<Self, BoundsError> {
        Self::try_new(Some(min), self.max)
    }

    /// Returns these bounds with `max` replaced.
    pub fn with_max(self, max: NaiveDate) -> Result<Self, BoundsError> {
        Self::try_new(self.min, Some(max))
    }

    /// The inclusive minimum, if any.
    #[must_use]
    pub const fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    /// The inclusive maximum, if any.
    #[must_use]
    pub const fn max(&self) -> Option<NaiveDate> {
        self.max
    }

    /// Returns `true` if neither side is constrained.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Returns `true` if `date` satisfies both constraints.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        !self.min.is_some_and(|min| date < min) && !self.max.is_some_and(|max| date > max)
    }

    /// Passes `date` through when it is in range, otherwise [`DateError::OutOfBounds`].
    pub fn check(&self, date: NaiveDate) -> Result<NaiveDate, DateError> {
        if self.contains(date) {
            Ok(date)
        } else {
            Err(DateError::OutOfBounds { date })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unbounded_accepts_everything() {
        assert!(Bounds::UNBOUNDED.contains(NaiveDate::MIN));
        assert!(Bounds::UNBOUNDED.contains(NaiveDate::MAX));
        assert!(Bounds::default().is_unbounded());
    }

    #[test]
    fn boundaries_are_inclusive() {
        let bounds = Bounds::try_new(Some(ymd(2024, 3, 1)), Some(ymd(2024, 3, 31))).unwrap();
        assert!(bounds.contains(ymd(2024, 3, 1)));
        assert!(bounds.contains(ymd(2024, 3, 31)));
        assert!(!bounds.contains(ymd(2024, 2, 29)));
        assert!(!bounds.contains(ymd(2024, 4, 1)));
    }

    #[test]
    fn one_sided_bounds() {
        let bounds = Bounds::UNBOUNDED.with_min(ymd(2000, 1, 1)).unwrap();
        assert!(!bounds.contains(ymd(1999, 12, 31)));
        assert!(bounds.contains(ymd(2999, 1, 1)));
        assert_eq!(bounds.max(), None);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = Bounds::try_new(Some(ymd(2025, 1, 1)), Some(ymd(2024, 1, 1))).unwrap_err();
        assert_eq!(
            err,
            BoundsError::Inverted {
                min: ymd(2025, 1, 1),
                max: ymd(2024, 1, 1)
            }
        );
    }

    #[test]
    fn check_reports_out_of_bounds() {
        let bounds = Bounds::UNBOUNDED.with_max(ymd(2024, 1, 1)).unwrap();
        let err = bounds.check(ymd(2024, 1, 2)).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(bounds.check(ymd(2024, 1, 1)), Ok(ymd(2024, 1, 1)));
    }
}
