use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, query_from_request::QueryFromRequest},
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{
    dtos::get_beneficiary_dto::GetBeneficiaryDto,
    models::{beneficiary::Beneficiary, user::User},
    service,
};

pub async fn get_user_from_request(
    State(state): State<AppState>,
    claims: Claims,
) -> Result<Json<User>, ApiError> {
    match service::get_user_by_id(&claims.user_id(), state.store.as_ref()).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e),
    }
}

pub async fn get_beneficiary(
    State(state): State<AppState>,
    _claims: Claims,
    QueryFromRequest(dto): QueryFromRequest<GetBeneficiaryDto>,
) -> Result<Json<Beneficiary>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::get_beneficiary(&dto.cpf_cnpj, state.store.as_ref()).await {
            Ok(beneficiary) => Ok(Json(beneficiary)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
