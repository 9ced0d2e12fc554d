use chrono::{Datelike, NaiveDate};

use crate::domain::{Cycle, Item, Settings, YearlyMode};

use super::activity::is_active_during;
use super::due::due_date_within;
use super::period::Period;

/// Sums item magnitudes due inside the custom month containing `reference`.
///
/// The result is an unsigned magnitude sum; callers wanting expenses-only or
/// income-only totals pre-filter the item list by kind.
pub fn total_for_period(items: &[Item], settings: &Settings, reference: NaiveDate) -> f64 {
    let period = Period::containing(reference, settings.month_start_day);
    items
        .iter()
        .map(|item| period_contribution(item, settings.yearly_mode, &period))
        .sum()
}

fn period_contribution(item: &Item, yearly_mode: YearlyMode, period: &Period) -> f64 {
    if !item.has_countable_amount() {
        return 0.0;
    }
    match item.cycle {
        Cycle::OneTime => match item.pay_date {
            Some(pay) if period.contains(pay) => item.amount,
            _ => 0.0,
        },
        Cycle::Monthly | Cycle::Yearly => {
            // Inactive items never count, even when a pay day would land
            // inside the period.
            if !is_active_during(item, period) {
                return 0.0;
            }
            if due_date_within(item.pay_day, period).is_none() {
                return 0.0;
            }
            match item.cycle {
                Cycle::Yearly => match yearly_mode {
                    YearlyMode::Cashflow => item.amount,
                    YearlyMode::Forecast => item.amount / 12.0,
                },
                _ => item.amount,
            }
        }
    }
}

/// Totals per calendar month of `year`, index 0 = January.
///
/// Unlike period totals, forecast-mode yearly items spread 1/12 into every
/// active calendar month without a due-date gate, and cashflow-mode yearly
/// items book in full on the month of their start date (January when the
/// start date is absent).
pub fn totals_by_calendar_month(items: &[Item], year: i32, yearly_mode: YearlyMode) -> [f64; 12] {
    let mut totals = [0.0_f64; 12];

    for item in items {
        if !item.has_countable_amount() {
            continue;
        }

        match item.cycle {
            Cycle::OneTime => {
                if let Some(pay) = item.pay_date {
                    if pay.year() == year {
                        totals[pay.month0() as usize] += item.amount;
                    }
                }
            }
            Cycle::Monthly | Cycle::Yearly => {
                for month in 1..=12u32 {
                    let window = Period::calendar_month(year, month);
                    if !is_active_during(item, &window) {
                        continue;
                    }
                    let bucket = (month - 1) as usize;
                    if item.cycle == Cycle::Monthly {
                        totals[bucket] += item.amount;
                    } else {
                        match yearly_mode {
                            YearlyMode::Forecast => totals[bucket] += item.amount / 12.0,
                            YearlyMode::Cashflow => {
                                if month == cashflow_due_month(item) {
                                    totals[bucket] += item.amount;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    totals
}

fn cashflow_due_month(item: &Item) -> u32 {
    item.start_date.map_or(1, |start| start.month())
}
