use serde::{Deserialize, Serialize};

use super::transaction_type::TransactionType;

/// Rails a transfer can travel on. Deposits are not transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferKind {
    #[serde(rename = "PIX")]
    Pix,
    #[serde(rename = "TED")]
    Ted,
}

impl TransferKind {
    pub fn transaction_type(&self) -> TransactionType {
        match *self {
            Self::Pix => TransactionType::Pix,
            Self::Ted => TransactionType::Ted,
        }
    }
}
