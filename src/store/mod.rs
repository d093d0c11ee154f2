use async_trait::async_trait;

use crate::{
    app::models::api_error::ApiError,
    transactions::models::transaction::{NewTransaction, Transaction},
    users::{
        dtos::{edit_user_dto::EditUserDto, get_users_filter_dto::GetUsersFilterDto},
        models::user::{NewUser, User},
    },
};

use self::models::resource_id::ResourceId;

pub mod client;
pub mod config;
pub mod errors;
#[cfg(test)]
pub mod memory;
pub mod models;

/// The external JSON resource store that owns users and transactions.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    async fn find_users(&self, dto: &GetUsersFilterDto) -> Result<Vec<User>, ApiError>;

    /// `Ok(None)` when the store answers 404.
    async fn get_user(&self, id: &ResourceId) -> Result<Option<User>, ApiError>;

    async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError>;

    async fn patch_user(&self, id: &ResourceId, dto: &EditUserDto) -> Result<User, ApiError>;

    async fn find_transactions(&self, user_id: &ResourceId) -> Result<Vec<Transaction>, ApiError>;

    async fn create_transaction(
        &self,
        new_transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError>;
}
