use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum UsersApiError {
    UserNotFound,
    BeneficiaryNotFound,
    EmailTaken,
    CpfCnpjTaken,
}

impl UsersApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::UserNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "User not found.".to_string(),
            },
            Self::BeneficiaryNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Beneficiary not found.".to_string(),
            },
            Self::EmailTaken => ApiError {
                code: StatusCode::CONFLICT,
                message: "Email already exists.".to_string(),
            },
            Self::CpfCnpjTaken => ApiError {
                code: StatusCode::CONFLICT,
                message: "CPF/CNPJ already registered.".to_string(),
            },
        }
    }
}
