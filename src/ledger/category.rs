use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// A named budget category holding an ordered list of transactions.
///
/// The category owns its transaction sequence exclusively; it is mutated
/// only through [`deposit`](Category::deposit),
/// [`withdraw`](Category::withdraw), and
/// [`transfer`](crate::ledger::transfer::transfer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    transactions: Vec<Transaction>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transactions: Vec::new(),
        }
    }

    /// Appends a deposit. Always succeeds; the amount is not validated.
    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        self.record(Transaction::new(amount, description));
    }

    /// Appends a withdrawal if the current balance covers it. Returns
    /// whether the withdrawal took place; on `false` the ledger is
    /// untouched.
    pub fn withdraw(&mut self, amount: f64, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            return false;
        }
        self.record(Transaction::new(-amount, description));
        true
    }

    /// Sum of all transaction amounts, recomputed on every call.
    pub fn balance(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Whether the current balance covers `amount`.
    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= self.balance()
    }

    /// Total money spent: the absolute sum of all negative entries.
    pub fn spent(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.amount < 0.0)
            .map(|t| -t.amount)
            .sum()
    }

    /// Read-only view of the transaction sequence, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Appends without a funds check. The transfer coordinator uses this
    /// once its single up-front check has approved the pair of entries.
    pub(crate) fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}
