use crate::domain::Item;

use super::period::Period;

/// Whether a recurring item's validity window overlaps the given interval.
///
/// A missing start date means the item has always been active, a missing end
/// date means it stays active indefinitely. The end date is inclusive of its
/// whole calendar day. One-time items bypass this check entirely; their
/// single pay date decides inclusion.
pub fn is_active_during(item: &Item, window: &Period) -> bool {
    let starts_before_window_end = item.start_date.map_or(true, |start| start < window.end);
    let ends_after_window_start = item.end_date.map_or(true, |end| end >= window.start);
    starts_before_window_end && ends_after_window_start
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Cycle, ItemKind};

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window() -> Period {
        Period::containing(sample_date(2024, 3, 10), 25)
    }

    fn subscription(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Item {
        Item::new("Streaming", ItemKind::Expense, 15.0, Cycle::Monthly).with_window(start, end)
    }

    #[test]
    fn unbounded_item_is_always_active() {
        assert!(is_active_during(&subscription(None, None), &window()));
    }

    #[test]
    fn item_starting_after_window_is_inactive() {
        let item = subscription(Some(sample_date(2024, 3, 25)), None);
        assert!(!is_active_during(&item, &window()));
        let item = subscription(Some(sample_date(2024, 3, 24)), None);
        assert!(is_active_during(&item, &window()));
    }

    #[test]
    fn end_date_is_inclusive_of_its_day() {
        let item = subscription(None, Some(sample_date(2024, 2, 25)));
        assert!(is_active_during(&item, &window()));
        let item = subscription(None, Some(sample_date(2024, 2, 24)));
        assert!(!is_active_during(&item, &window()));
    }

    #[test]
    fn window_fully_inside_activity_bounds_is_active() {
        let item = subscription(
            Some(sample_date(2023, 1, 1)),
            Some(sample_date(2025, 12, 31)),
        );
        assert!(is_active_during(&item, &window()));
    }
}
