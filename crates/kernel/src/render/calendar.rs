//! Month grid for the calendar block.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A Monday-first month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,

    /// Weeks of seven cells; `None` pads before the 1st and after the last day.
    pub weeks: Vec<Vec<Option<u32>>>,

    /// Day of month to highlight, when `today` falls in this month.
    pub today: Option<u32>,
}

impl MonthGrid {
    /// Grid for the month containing `today`.
    pub fn for_date(today: NaiveDate) -> Self {
        Self::build(today.year(), today.month(), Some(today))
    }

    /// Grid for an arbitrary month, highlighting `today` if it falls inside.
    ///
    /// Returns `None` for an invalid year/month pair.
    pub fn for_month(year: i32, month: u32, today: NaiveDate) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self::build(year, month, Some(today)))
    }

    fn build(year: i32, month: u32, today: Option<NaiveDate>) -> Self {
        let days = days_in_month(year, month);
        let leading = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| first.weekday().num_days_from_monday())
            .unwrap_or(0);

        let mut cells: Vec<Option<u32>> = Vec::with_capacity(42);
        cells.extend((0..leading).map(|_| None));
        cells.extend((1..=days).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        let highlight = today
            .filter(|t| t.year() == year && t.month() == month)
            .map(|t| t.day());

        Self {
            year,
            month,
            weeks: cells.chunks(7).map(<[Option<u32>]>::to_vec).collect(),
            today: highlight,
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(30)
}
