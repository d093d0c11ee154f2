use serde::Serialize;

use super::transaction::Transaction;

/// Outcome of a transfer or deposit: the caller's own record plus the
/// balance now stored for them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction: Transaction,
    pub balance: f64,
}
