use tracing::debug;

use super::category::Category;
use super::transaction::Transaction;

/// Moves `amount` from `source` to `destination` as one logical operation.
///
/// The funds check runs exactly once, up front; if it fails, neither ledger
/// is touched. Once it approves, both entries are appended without
/// re-validation, so a transfer can never half-apply. Returns whether the
/// transfer took place.
pub fn transfer(amount: f64, source: &mut Category, destination: &mut Category) -> bool {
    if !source.check_funds(amount) {
        debug!(
            amount,
            from = %source.name,
            to = %destination.name,
            "transfer rejected: insufficient funds"
        );
        return false;
    }

    source.record(Transaction::new(
        -amount,
        format!("Transfer to {}", destination.name),
    ));
    destination.record(Transaction::new(
        amount,
        format!("Transfer from {}", source.name),
    ));
    debug!(amount, from = %source.name, to = %destination.name, "transfer recorded");
    true
}
