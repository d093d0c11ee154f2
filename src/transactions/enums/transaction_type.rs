use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "PIX")]
    Pix,
    #[serde(rename = "TED")]
    Ted,
    #[serde(rename = "DEPÓSITO", alias = "DEPOSITO", alias = "DEPOSIT")]
    Deposit,
}

impl TransactionType {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Pix => "PIX",
            Self::Ted => "TED",
            Self::Deposit => "DEPÓSITO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_store_tags() {
        assert_eq!(serde_json::to_value(TransactionType::Pix).unwrap(), "PIX");
        assert_eq!(serde_json::to_value(TransactionType::Ted).unwrap(), "TED");
        assert_eq!(
            serde_json::to_value(TransactionType::Deposit).unwrap(),
            TransactionType::Deposit.value()
        );
    }

    #[test]
    fn accepts_unaccented_deposit_tags() {
        let tag: TransactionType = serde_json::from_str("\"DEPOSITO\"").unwrap();
        assert_eq!(tag, TransactionType::Deposit);

        let tag: TransactionType = serde_json::from_str("\"DEPÓSITO\"").unwrap();
        assert_eq!(tag, TransactionType::Deposit);
    }
}
