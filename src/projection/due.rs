use chrono::{Datelike, NaiveDate};

use super::period::{date_in_month, Period};

/// Day of month assumed when a recurring item does not specify one. Shared by
/// every component that derives a due date so defaults cannot diverge.
pub const DEFAULT_PAY_DAY: u32 = 1;

/// Resolves the concrete due date of a recurring item in a calendar month.
///
/// Days past the month's end clamp to its last day, so day 31 resolves to
/// Feb 29 in a leap year.
pub fn due_date_in_month(year: i32, month: u32, pay_day: Option<u32>) -> NaiveDate {
    date_in_month(year, month, pay_day.unwrap_or(DEFAULT_PAY_DAY))
}

/// Finds the due date of a recurring item inside a custom period.
///
/// A custom period can span two calendar months, so both the month of the
/// period start and the month of the last in-period day contribute a
/// candidate; the earlier candidate inside the period wins.
pub fn due_date_within(pay_day: Option<u32>, period: &Period) -> Option<NaiveDate> {
    let head = period.start;
    let first = due_date_in_month(head.year(), head.month(), pay_day);
    if period.contains(first) {
        return Some(first);
    }
    let tail = period.last_day();
    let second = due_date_in_month(tail.year(), tail.month(), pay_day);
    if period.contains(second) {
        Some(second)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_pay_day_defaults_to_first() {
        assert_eq!(
            due_date_in_month(2024, 3, None),
            sample_date(2024, 3, 1)
        );
    }

    #[test]
    fn pay_day_clamps_to_month_length() {
        assert_eq!(
            due_date_in_month(2024, 2, Some(31)),
            sample_date(2024, 2, 29)
        );
        assert_eq!(
            due_date_in_month(2023, 2, Some(31)),
            sample_date(2023, 2, 28)
        );
        assert_eq!(
            due_date_in_month(2024, 4, Some(31)),
            sample_date(2024, 4, 30)
        );
    }

    #[test]
    fn due_date_lands_in_second_calendar_month_when_day_precedes_start() {
        // Period [2024-02-25, 2024-03-25): day 15 belongs to March, not February.
        let period = Period::containing(sample_date(2024, 3, 10), 25);
        assert_eq!(
            due_date_within(Some(15), &period),
            Some(sample_date(2024, 3, 15))
        );
    }

    #[test]
    fn due_date_lands_in_first_calendar_month_when_day_follows_start() {
        let period = Period::containing(sample_date(2024, 3, 10), 25);
        assert_eq!(
            due_date_within(Some(27), &period),
            Some(sample_date(2024, 2, 27))
        );
    }

    #[test]
    fn first_of_month_period_uses_single_calendar_month() {
        let period = Period::containing(sample_date(2024, 3, 10), 1);
        assert_eq!(
            due_date_within(Some(31), &period),
            Some(sample_date(2024, 3, 31))
        );
        assert_eq!(
            due_date_within(None, &period),
            Some(sample_date(2024, 3, 1))
        );
    }
}
