#![doc(test(attr(deny(warnings))))]

//! Cashflow Core offers the period-alignment and cash-flow projection
//! primitives behind personal budget views: custom-month totals, yearly
//! breakdowns, and running balance projections with shortfall detection.

pub mod domain;
pub mod errors;
pub mod projection;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
