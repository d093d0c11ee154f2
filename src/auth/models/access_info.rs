use serde::Serialize;

use crate::users::models::user::User;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessInfo {
    pub access_token: String,
    pub user: User,
}
