use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    app::models::{
        api_error::ApiError, json_from_request::JsonFromRequest,
        query_from_request::QueryFromRequest,
    },
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{
    dtos::{
        deposit_dto::DepositDto, get_transactions_filter_dto::GetTransactionsFilterDto,
        transfer_dto::TransferDto,
    },
    models::{transaction::Transaction, transaction_receipt::TransactionReceipt},
    service,
};

pub async fn get_transactions(
    State(state): State<AppState>,
    claims: Claims,
    QueryFromRequest(dto): QueryFromRequest<GetTransactionsFilterDto>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::get_transactions(
            &dto,
            &claims.user_id(),
            state.store.as_ref(),
            Utc::now(),
        )
        .await
        {
            Ok(transactions) => Ok(Json(transactions)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn transfer(
    State(state): State<AppState>,
    claims: Claims,
    JsonFromRequest(dto): JsonFromRequest<TransferDto>,
) -> Result<(StatusCode, Json<TransactionReceipt>), ApiError> {
    match dto.validate() {
        Ok(_) => match service::transfer(&dto, &claims.user_id(), &state).await {
            Ok(receipt) => Ok((StatusCode::CREATED, Json(receipt))),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn deposit(
    State(state): State<AppState>,
    claims: Claims,
    JsonFromRequest(dto): JsonFromRequest<DepositDto>,
) -> Result<(StatusCode, Json<TransactionReceipt>), ApiError> {
    match dto.validate() {
        Ok(_) => match service::deposit(&dto, &claims.user_id(), &state).await {
            Ok(receipt) => Ok((StatusCode::CREATED, Json(receipt))),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
