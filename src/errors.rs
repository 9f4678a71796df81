use thiserror::Error;

/// Error type for the spend chart renderer, the only fallible surface.
/// Insufficient funds is a boolean outcome on the ledger, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("no categories to chart")]
    NoCategories,
    #[error("no spending recorded in any category")]
    NothingSpent,
}
