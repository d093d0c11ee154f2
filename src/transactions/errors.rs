use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    InsufficientBalance,
    InvalidTransactionPassword,
    SelfTransfer,
    MissingTedDetails,
    OperationInProgress,
    InvalidAmount,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InsufficientBalance => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Insufficient balance.".to_string(),
            },
            Self::InvalidTransactionPassword => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid transaction password.".to_string(),
            },
            Self::SelfTransfer => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Cannot transfer to your own account.".to_string(),
            },
            Self::MissingTedDetails => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "TED transfers require bank, agency and account.".to_string(),
            },
            Self::OperationInProgress => ApiError {
                code: StatusCode::CONFLICT,
                message: "Another operation is in progress for this account.".to_string(),
            },
            Self::InvalidAmount => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Amount out of range.".to_string(),
            },
        }
    }
}
