// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar grids for the popup: the six-week day grid and the year picker.
//!
//! The day grid always has [`GRID_CELLS`] cells so the popup height never
//! jumps while paging between months. Days from the adjacent months fill the
//! leading and trailing positions and are flagged with
//! [`DayCell::in_view_month`] set to `false`.
//!
//! ```
//! use chrono::Weekday;
//! use lanyard_date::{Bounds, NaiveDate, ViewMonth};
//! use lanyard_date_input::grid::MonthGrid;
//!
//! let view = ViewMonth::new(2024, 5).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
//! let grid = MonthGrid::build(view, Weekday::Sun, None, today, &Bounds::UNBOUNDED);
//!
//! // 1 May 2024 is a Wednesday, so three April days lead the first week.
//! let first_week = grid.weeks().next().unwrap();
//! assert_eq!(first_week[0].date, NaiveDate::from_ymd_opt(2024, 4, 28).unwrap());
//! assert!(!first_week[0].in_view_month);
//! assert!(grid.find(today).unwrap().is_today);
//! ```

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use lanyard_date::{Bounds, ViewMonth, YEAR_RANGE, is_representable};

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Cells in a full grid: six weeks.
pub const GRID_CELLS: usize = DAYS_PER_WEEK * 6;

/// Number of years offered by the year picker.
pub const YEAR_PICKER_SPAN: i32 = 12;

/// How many years before the view year the year picker starts.
pub const YEAR_PICKER_LEAD: i32 = 5;

/// One day in a [`MonthGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DayCell {
    /// The calendar date of the cell.
    pub date: NaiveDate,
    /// `false` for the leading and trailing days of adjacent months.
    pub in_view_month: bool,
    /// The cell holds the committed value.
    pub is_selected: bool,
    /// The cell is the clock's today.
    pub is_today: bool,
    /// The cell lies outside the configured bounds, or has no four-digit
    /// year, and cannot be selected.
    pub is_disabled: bool,
}

/// A six-week grid of days around a [`ViewMonth`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    view: ViewMonth,
    week_start: Weekday,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Lays out the grid for `view`, starting rows on `week_start`.
    #[must_use]
    pub fn build(
        view: ViewMonth,
        week_start: Weekday,
        selected: Option<NaiveDate>,
        today: NaiveDate,
        bounds: &Bounds,
    ) -> Self {
        let first = view.first_day();
        let lead = (first.weekday().num_days_from_sunday() + 7
            - week_start.num_days_from_sunday())
            % 7;

        let mut cells = Vec::with_capacity(GRID_CELLS);
        let mut next = first.checked_sub_days(Days::new(u64::from(lead)));
        while let Some(date) = next {
            if cells.len() == GRID_CELLS {
                break;
            }
            cells.push(DayCell {
                date,
                in_view_month: view.contains(date),
                is_selected: selected == Some(date),
                is_today: date == today,
                is_disabled: !bounds.contains(date) || !is_representable(date),
            });
            next = date.succ_opt();
        }

        Self {
            view,
            week_start,
            cells,
        }
    }

    /// The month this grid is centred on.
    #[must_use]
    pub fn view(&self) -> ViewMonth {
        self.view
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The grid split into rows of seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> + '_ {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Two-letter weekday labels in column order.
    #[must_use]
    pub fn weekday_labels(&self) -> [&'static str; DAYS_PER_WEEK] {
        let mut day = self.week_start;
        core::array::from_fn(|_| {
            let label = short_label(day);
            day = day.succ();
            label
        })
    }

    /// The cell for `date`, if the grid shows it.
    #[must_use]
    pub fn find(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}

fn short_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// One year in the year picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct YearCell {
    /// The year.
    pub year: i32,
    /// The year currently shown by the calendar.
    pub is_current: bool,
}

/// The years offered when picking a year for `view`.
///
/// The window slides to stay inside [`YEAR_RANGE`].
#[must_use]
pub fn year_range(view: ViewMonth) -> RangeInclusive<i32> {
    let start = (view.year() - YEAR_PICKER_LEAD)
        .clamp(*YEAR_RANGE.start(), *YEAR_RANGE.end() - (YEAR_PICKER_SPAN - 1));
    start..=start + (YEAR_PICKER_SPAN - 1)
}

/// The year picker cells for `view`.
#[must_use]
pub fn year_cells(view: ViewMonth) -> Vec<YearCell> {
    year_range(view)
        .map(|year| YearCell {
            year,
            is_current: year == view.year(),
        })
        .collect()
}
