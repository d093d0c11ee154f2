use serde::Deserialize;
use validator::Validate;

use crate::transactions::enums::transfer_kind::TransferKind;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransferDto {
    #[serde(rename = "type")]
    pub kind: TransferKind,
    pub beneficiary_cpf_cnpj: String,
    #[validate(length(max = 120, message = "beneficiaryName must be at most 120 characters."))]
    pub beneficiary_name: Option<String>,
    pub bank: Option<String>,
    pub agency: Option<String>,
    pub account: Option<String>,
    #[validate(range(
        min = 0.01,
        max = 1000000000.0,
        message = "value must be between 0.01 and 1000000000."
    ))]
    pub value: f64,
    pub transaction_password: String,
}

impl TransferDto {
    /// A TED needs the destination bank, agency and account spelled out.
    pub fn has_ted_details(&self) -> bool {
        [&self.bank, &self.agency, &self.account]
            .iter()
            .all(|field| field.as_deref().map_or(false, |v| !v.trim().is_empty()))
    }
}
