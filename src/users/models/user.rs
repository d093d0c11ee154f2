use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    app::env::Envy,
    auth::dtos::register_dto::RegisterDto,
    store::models::resource_id::ResourceId,
    users::util::cpf_cnpj,
};

pub static ACCOUNT_NUMBER_DIGITS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ResourceId,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub cpf_cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default, skip_serializing)]
    pub transaction_password: String,
    #[serde(default)]
    pub new_user: bool,
}

/// Body posted to the store when an account is opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub cpf_cnpj: String,
    pub bank: String,
    pub agency: String,
    pub account: String,
    pub balance: f64,
    pub transaction_password: String,
    pub new_user: bool,
}

impl NewUser {
    pub fn new(dto: &RegisterDto, envy: &Envy) -> Self {
        return Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.password.to_string(),
            name: dto.name.trim().to_string(),
            cpf_cnpj: cpf_cnpj::strip(&dto.cpf_cnpj),
            bank: envy.bank_name().to_string(),
            agency: envy.agency().to_string(),
            account: generate_account_number(),
            balance: envy.initial_balance(),
            transaction_password: dto.transaction_password.to_string(),
            new_user: true,
        };
    }
}

fn generate_account_number() -> String {
    let mut rng = rand::thread_rng();

    (0..ACCOUNT_NUMBER_DIGITS)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
