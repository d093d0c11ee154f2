use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    users::{self, models::user::User},
    AppState,
};

use super::{
    dtos::{login_dto::LoginDto, register_dto::RegisterDto},
    errors::AuthApiError,
    jwt::util::sign_jwt,
    models::access_info::AccessInfo,
};

pub async fn register(dto: &RegisterDto, state: &AppState) -> Result<User, ApiError> {
    users::service::create_user(dto, &state.envy, state.store.as_ref()).await
}

pub async fn login(dto: &LoginDto, state: &AppState) -> Result<AccessInfo, ApiError> {
    let Some(user) = users::service::get_user_by_login_dto(dto, state.store.as_ref()).await?
    else {
        return Err(AuthApiError::BadLogin.value());
    };

    match sign_jwt(&user.id, &state.envy.jwt_secret, state.envy.jwt_exp()) {
        Ok(access_token) => {
            tracing::info!(user_id = %user.id, "user logged in");

            Ok(AccessInfo { access_token, user })
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
