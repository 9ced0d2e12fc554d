use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::{CoreError, Result};

/// Half-open date interval `[start, end)` representing one custom month.
///
/// Never persisted; recomputed from the reference date and settings on every
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Builds an arbitrary window, rejecting empty or inverted bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(CoreError::InvalidInput(
                "period end must be after start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Resolves the custom month containing `reference`.
    ///
    /// The period runs from day `month_start_day` of one calendar month to
    /// the same day of the next. When the reference day-of-month is before
    /// the start day, the period began in the previous calendar month.
    /// `month_start_day` is expected in 1-28 so every month has that day.
    pub fn containing(reference: NaiveDate, month_start_day: u32) -> Self {
        let anchor = date_in_month(reference.year(), reference.month(), month_start_day);
        let start = if reference.day() >= month_start_day {
            anchor
        } else {
            shift_month(anchor, -1)
        };
        Self {
            start,
            end: shift_month(start, 1),
        }
    }

    /// The fixed calendar-month window for `year`/`month`.
    pub fn calendar_month(year: i32, month: u32) -> Self {
        let start = date_in_month(year, month, 1);
        Self {
            start,
            end: shift_month(start, 1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Last calendar day inside the period (`end` is exclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.end - Duration::days(1)
    }

    /// The same custom month shifted by whole months, for period navigation.
    pub fn shifted(&self, months: i32) -> Self {
        let start = shift_month(self.start, months);
        Self {
            start,
            end: shift_month(start, 1),
        }
    }
}

/// Builds a date in the given month, clamping the day into the month's range.
pub fn date_in_month(year: i32, month: u32, day: u32) -> NaiveDate {
    let clamped = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, clamped).unwrap()
}

pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
