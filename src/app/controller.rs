use super::models::api_error::ApiError;

/// Liveness probe; does not touch the resource store.
pub async fn get_root() -> Result<(), ApiError> {
    Ok(())
}
