use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Cycle, Item, ItemKind, Settings};

use super::activity::is_active_during;
use super::due::due_date_within;
use super::period::Period;

/// A dated, signed cash movement inside a period.
///
/// `amount` carries the kind sign: income positive, expense negative.
/// Recurring cycles emit their full amount as a single event; amortization
/// applies only to aggregate totals, never to discrete events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashEvent {
    pub date: NaiveDate,
    pub item_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub kind: ItemKind,
}

/// Sequences the item list into date-ordered cash events for the custom
/// month containing `reference`. Same-day events keep their input order.
pub fn events_in_period(items: &[Item], settings: &Settings, reference: NaiveDate) -> Vec<CashEvent> {
    let period = Period::containing(reference, settings.month_start_day);
    let mut events = Vec::new();

    for item in items {
        if !item.has_countable_amount() {
            continue;
        }
        let date = match item.cycle {
            Cycle::OneTime => match item.pay_date {
                Some(pay) if period.contains(pay) => pay,
                _ => continue,
            },
            Cycle::Monthly | Cycle::Yearly => {
                if !is_active_during(item, &period) {
                    continue;
                }
                match due_date_within(item.pay_day, &period) {
                    Some(due) => due,
                    None => continue,
                }
            }
        };
        events.push(CashEvent {
            date,
            item_id: item.id,
            name: item.name.clone(),
            amount: item.signed_amount(),
            kind: item.kind,
        });
    }

    events.sort_by_key(|event| event.date);
    events
}
