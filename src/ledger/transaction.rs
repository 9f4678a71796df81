use serde::{Deserialize, Serialize};

/// A single signed ledger entry. Deposits carry a positive amount,
/// withdrawals and outgoing transfers a negative one. Entries are
/// immutable once appended and are never reordered or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub description: String,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }
}
