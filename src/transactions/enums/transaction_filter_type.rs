use serde::Deserialize;

use crate::transactions::models::transaction::Transaction;

use super::transaction_type::TransactionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilterType {
    Deposit,
    Sent,
    Received,
    Pix,
    Ted,
}

impl TransactionFilterType {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match *self {
            Self::Deposit => transaction.transaction_type == TransactionType::Deposit,
            Self::Sent => transaction.value < 0.0,
            Self::Received => {
                transaction.value > 0.0 && transaction.transaction_type != TransactionType::Deposit
            }
            Self::Pix => transaction.transaction_type == TransactionType::Pix,
            Self::Ted => transaction.transaction_type == TransactionType::Ted,
        }
    }
}
