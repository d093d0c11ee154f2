use serde::Serialize;

/// Query sent to `GET /users`. The store matches every present field
/// exactly; absent fields are left out of the query string.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersFilterDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj: Option<String>,
}

impl GetUsersFilterDto {
    /// Email is matched as typed; registration is what lowercases it.
    pub fn by_credentials(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.trim().to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    pub fn by_email(email: &str) -> Self {
        Self {
            email: Some(email.trim().to_lowercase()),
            ..Default::default()
        }
    }

    pub fn by_cpf_cnpj(cpf_cnpj: &str) -> Self {
        Self {
            cpf_cnpj: Some(cpf_cnpj.to_string()),
            ..Default::default()
        }
    }
}
