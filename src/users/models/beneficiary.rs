use serde::Serialize;

use crate::users::util::cpf_cnpj;

use super::user::User;

/// Public view of a transfer recipient, used to prefill the transfer form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub name: String,
    pub cpf_cnpj: String,
    pub bank: Option<String>,
    pub agency: Option<String>,
    pub account: Option<String>,
}

impl From<&User> for Beneficiary {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.to_string(),
            cpf_cnpj: cpf_cnpj::format(&user.cpf_cnpj),
            bank: user.bank.clone(),
            agency: user.agency.clone(),
            account: user.account.clone(),
        }
    }
}
