use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::errors::Result;

/// Direction of a cash-flow entry.
///
/// Stored records predating the income feature carry no `kind` field and
/// decode as expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Expense,
    Income,
}

impl ItemKind {
    /// Sign applied wherever a signed total or event is produced.
    pub fn sign(self) -> f64 {
        match self {
            ItemKind::Income => 1.0,
            ItemKind::Expense => -1.0,
        }
    }
}

/// Recurrence pattern of an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Cycle {
    OneTime,
    Monthly,
    Yearly,
}

/// A recurring or one-time cash-flow entry.
///
/// `amount` is a non-negative magnitude; [`ItemKind::sign`] is applied only
/// where signed output is produced. `pay_date` is meaningful for one-time
/// items, `pay_day` for monthly/yearly items; the unused field may still be
/// present in storage and is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    #[serde(default)]
    pub kind: ItemKind,
    pub name: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub cycle: Cycle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, amount: f64, cycle: Cycle) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            amount,
            category: None,
            cycle,
            pay_date: None,
            pay_day: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_pay_date(mut self, pay_date: NaiveDate) -> Self {
        self.pay_date = Some(pay_date);
        self
    }

    pub fn with_pay_day(mut self, pay_day: u32) -> Self {
        self.pay_day = Some(pay_day);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Bounds the window in which a recurring item is considered active.
    /// Both bounds are inclusive of their calendar day.
    pub fn with_window(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Magnitude signed by kind: income positive, expense negative.
    pub fn signed_amount(&self) -> f64 {
        self.amount * self.kind.sign()
    }

    /// Partially entered or corrupted records are skipped, never an error.
    pub fn has_countable_amount(&self) -> bool {
        self.amount.is_finite()
    }
}

impl Identifiable for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Item {
    fn display_label(&self) -> String {
        format!("{} [{:?}]", self.name, self.kind)
    }
}

/// Decodes an item collection from its stored JSON form.
///
/// Legacy records without a `kind` decode as expenses; unknown fields are
/// ignored. Storage itself lives outside the core; this is the boundary
/// through which stored records become typed items.
pub fn items_from_json(data: &str) -> Result<Vec<Item>> {
    Ok(serde_json::from_str(data)?)
}
