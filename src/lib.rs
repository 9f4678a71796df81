#![doc(test(attr(deny(warnings))))]

//! Budget Report offers per-category ledgers and the textual reports built
//! from them: fixed-width account statements and a percentage spend chart.

pub mod errors;
pub mod ledger;
pub mod render;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Report tracing initialized.");
    });
}
