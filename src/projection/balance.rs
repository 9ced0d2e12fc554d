use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Item, Settings};

use super::events::{events_in_period, CashEvent};

/// Known balance point a projection walks from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceAnchor {
    /// Balance at the very start of the period.
    PeriodStart { balance: f64 },
    /// Balance observed on a given day. The period-start balance is derived
    /// by backing out every event dated on or before that day, then the walk
    /// replays the whole period, past and future events alike.
    AsOfDate { balance: f64, date: NaiveDate },
}

/// One step of the running balance walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRow {
    pub event: CashEvent,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceProjection {
    pub start_balance: f64,
    pub rows: Vec<BalanceRow>,
    pub min_balance: f64,
    /// First date the running balance dips below zero, if it ever does.
    pub first_negative: Option<NaiveDate>,
}

impl BalanceProjection {
    /// Balance after the last in-period event.
    pub fn end_balance(&self) -> f64 {
        self.rows.last().map_or(self.start_balance, |row| row.balance)
    }
}

/// Walks the date-ordered events from the anchored start balance.
///
/// The walk is a strict left-to-right fold: no reordering, minimum and
/// first-negative tracked incrementally. With no events the minimum is the
/// start balance itself.
pub fn project_balance(events: Vec<CashEvent>, anchor: BalanceAnchor) -> BalanceProjection {
    let start_balance = match anchor {
        BalanceAnchor::PeriodStart { balance } => balance,
        BalanceAnchor::AsOfDate { balance, date } => {
            let elapsed: f64 = events
                .iter()
                .filter(|event| event.date <= date)
                .map(|event| event.amount)
                .sum();
            balance - elapsed
        }
    };

    let mut rows = Vec::with_capacity(events.len());
    let mut balance = start_balance;
    let mut min_balance = start_balance;
    let mut first_negative = None;

    for event in events {
        balance += event.amount;
        if balance < min_balance {
            min_balance = balance;
        }
        if first_negative.is_none() && balance < 0.0 {
            first_negative = Some(event.date);
        }
        rows.push(BalanceRow { event, balance });
    }

    BalanceProjection {
        start_balance,
        rows,
        min_balance,
        first_negative,
    }
}

/// Sequences the period's events and projects the running balance in one
/// call.
pub fn project_period(
    items: &[Item],
    settings: &Settings,
    reference: NaiveDate,
    anchor: BalanceAnchor,
) -> BalanceProjection {
    project_balance(events_in_period(items, settings, reference), anchor)
}
