use axum::{
    async_trait,
    extract::FromRequestParts,
    headers::{authorization::Bearer, Authorization},
    http::request::Parts,
    TypedHeader,
};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};

use crate::{
    app::models::api_error::ApiError,
    auth::{errors::AuthApiError, jwt::util::decode_jwt},
    store::models::resource_id::ResourceId,
    AppState,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub iat: u64,
    pub exp: u64,
}

impl Claims {
    pub fn from_header(authorization: Authorization<Bearer>, secret: &str) -> Result<Self, ApiError> {
        match decode_jwt(authorization.token(), secret) {
            Ok(claims) => Ok(claims),
            Err(ErrorKind::ExpiredSignature) => Err(AuthApiError::ExpiredToken.value()),
            Err(_) => Err(AuthApiError::InvalidToken.value()),
        }
    }

    pub fn user_id(&self) -> ResourceId {
        ResourceId::parse(&self.id)
    }
}

/// Guards a route: handlers taking `Claims` only run for a valid bearer token.
#[async_trait]
impl FromRequestParts<AppState> for Claims {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(authorization)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Err(AuthApiError::MissingToken.value());
        };

        Claims::from_header(authorization, &state.envy.jwt_secret)
    }
}
