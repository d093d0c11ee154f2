use serde::Serialize;

use crate::users::models::user::User;

/// Partial update sent with `PATCH /users/:id`.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_user: Option<bool>,
}

impl EditUserDto {
    pub fn balance(balance: f64) -> Self {
        Self {
            balance: Some(balance),
            ..Default::default()
        }
    }

    /// Puts back the fields a balance-changing operation may have touched.
    pub fn restore(user: &User) -> Self {
        Self {
            balance: Some(user.balance),
            new_user: Some(user.new_user),
        }
    }
}
