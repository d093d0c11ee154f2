use serde::Deserialize;
use validator::Validate;

use crate::users::util::cpf_cnpj;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetBeneficiaryDto {
    #[validate(custom = "cpf_cnpj::validate")]
    pub cpf_cnpj: String,
}
