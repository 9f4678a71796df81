//! Ledger domain models: budget categories, their transactions, and
//! cross-category transfers.

pub mod category;
pub mod transaction;
pub mod transfer;

pub use category::Category;
pub use transaction::Transaction;
pub use transfer::transfer;
