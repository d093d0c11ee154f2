use axum::{extract::State, Json};

use crate::{app::models::api_error::ApiError, auth::jwt::models::claims::Claims, AppState};

use super::{models::dashboard::Dashboard, service};

pub async fn get_dashboard(
    State(state): State<AppState>,
    claims: Claims,
) -> Result<Json<Dashboard>, ApiError> {
    match service::get_dashboard(&claims.user_id(), state.store.as_ref()).await {
        Ok(dashboard) => Ok(Json(dashboard)),
        Err(e) => Err(e),
    }
}
