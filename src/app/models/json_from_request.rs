use axum::Json;
use axum_macros::FromRequest;

use super::api_error::ApiError;

/// `Json` whose rejections render like every other error: status plus
/// `{"message": ...}`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);
