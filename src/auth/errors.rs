use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    BadLogin,
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::BadLogin => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid email or password.".to_string(),
            },
            Self::MissingToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Missing bearer token.".to_string(),
            },
            Self::InvalidToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid token.".to_string(),
            },
            Self::ExpiredToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Token expired.".to_string(),
            },
        }
    }
}
