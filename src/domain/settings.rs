use serde::{Deserialize, Serialize};

/// Accounting convention for yearly items.
///
/// `Forecast` amortizes the annual amount across months; `Cashflow` books it
/// in full on the due month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum YearlyMode {
    #[default]
    Forecast,
    Cashflow,
}

pub const MIN_MONTH_START_DAY: u32 = 1;
pub const MAX_MONTH_START_DAY: u32 = 28;

/// Configuration consumed by every computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Calendar day (1-28) on which a custom month period begins. Capping at
    /// 28 keeps the start day valid in every calendar month.
    #[serde(default = "default_month_start_day")]
    pub month_start_day: u32,
    #[serde(default)]
    pub yearly_mode: YearlyMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            month_start_day: default_month_start_day(),
            yearly_mode: YearlyMode::default(),
        }
    }
}

impl Settings {
    /// Builds settings with the start day clamped into the supported range.
    pub fn new(month_start_day: u32, yearly_mode: YearlyMode) -> Self {
        Self {
            month_start_day: month_start_day.clamp(MIN_MONTH_START_DAY, MAX_MONTH_START_DAY),
            yearly_mode,
        }
    }
}

fn default_month_start_day() -> u32 {
    MIN_MONTH_START_DAY
}

/// Clamp policy for start-day values arriving from untyped storage or input:
/// truncate toward zero, clamp to 1-28, default to 1 on non-finite values.
pub fn sanitize_month_start_day(raw: f64) -> u32 {
    if !raw.is_finite() {
        return MIN_MONTH_START_DAY;
    }
    (raw.trunc() as i64).clamp(MIN_MONTH_START_DAY as i64, MAX_MONTH_START_DAY as i64) as u32
}
