use serde::Serialize;

use crate::{transactions::models::transaction::Transaction, users::models::user::User};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    pub label: &'static str,
    #[serde(flatten)]
    pub transaction: Transaction,
}

impl From<Transaction> for RecentTransaction {
    fn from(transaction: Transaction) -> Self {
        Self {
            label: transaction.label(),
            transaction,
        }
    }
}

/// Home screen summary. `newUser` tells the client to offer the first deposit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub name: String,
    pub balance: f64,
    pub new_user: bool,
    pub recent_transactions: Vec<RecentTransaction>,
}

impl Dashboard {
    pub fn new(user: User, transactions: Vec<Transaction>) -> Self {
        Self {
            name: user.name,
            balance: user.balance,
            new_user: user.new_user,
            recent_transactions: transactions.into_iter().map(RecentTransaction::from).collect(),
        }
    }
}
