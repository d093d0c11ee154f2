use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum StoreApiError {
    Unreachable,
    UnexpectedStatus,
    MalformedPayload,
}

impl StoreApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::Unreachable => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Resource store request failed.".to_string(),
            },
            Self::UnexpectedStatus => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Resource store rejected the request.".to_string(),
            },
            Self::MalformedPayload => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Resource store returned an unexpected payload.".to_string(),
            },
        }
    }
}
