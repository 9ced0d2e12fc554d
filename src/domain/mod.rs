//! Persisted-shape data model: items, settings, and shared entity traits.

pub mod common;
pub mod item;
pub mod settings;

pub use common::{upsert, Displayable, Identifiable};
pub use item::{items_from_json, Cycle, Item, ItemKind};
pub use settings::{sanitize_month_start_day, Settings, YearlyMode};
