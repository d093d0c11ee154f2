use serde::Deserialize;
use validator::Validate;

use crate::users::util::cpf_cnpj;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[validate(length(
        min = 1,
        max = 120,
        message = "name must be between 1 and 120 characters."
    ))]
    pub name: String,
    #[validate(email(message = "email must be a valid address."))]
    pub email: String,
    #[validate(custom = "super::validate_password")]
    pub password: String,
    #[validate(custom = "super::validate_transaction_password")]
    pub transaction_password: String,
    #[validate(custom = "cpf_cnpj::validate")]
    pub cpf_cnpj: String,
}
