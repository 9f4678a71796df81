//! Textual report renderers consuming ledger data.

pub mod spend_chart;
pub mod statement;

pub use spend_chart::{create_spend_chart, render_spend_chart, CategorySpend};
pub use statement::render_statement;
