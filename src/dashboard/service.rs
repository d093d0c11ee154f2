use crate::{
    app::models::api_error::ApiError,
    store::{models::resource_id::ResourceId, ResourceStore},
    transactions, users,
};

use super::models::dashboard::Dashboard;

pub async fn get_dashboard(
    user_id: &ResourceId,
    store: &dyn ResourceStore,
) -> Result<Dashboard, ApiError> {
    let user = users::service::get_user_by_id(user_id, store).await?;
    let recent = transactions::service::get_recent_transactions(user_id, store).await?;

    Ok(Dashboard::new(user, recent))
}
