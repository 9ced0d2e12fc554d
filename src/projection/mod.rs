//! Period alignment and cash-flow projection over the item list.
//!
//! Every function here is a pure computation over borrowed inputs; nothing
//! is persisted and nothing is mutated.

pub mod activity;
pub mod aggregate;
pub mod balance;
pub mod due;
pub mod events;
pub mod period;

pub use activity::is_active_during;
pub use aggregate::{total_for_period, totals_by_calendar_month};
pub use balance::{project_balance, project_period, BalanceAnchor, BalanceProjection, BalanceRow};
pub use due::{due_date_in_month, due_date_within, DEFAULT_PAY_DAY};
pub use events::{events_in_period, CashEvent};
pub use period::{date_in_month, days_in_month, shift_month, Period};
