use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    app::models::api_error::ApiError,
    transactions::models::transaction::{NewTransaction, Transaction},
    users::{
        dtos::{edit_user_dto::EditUserDto, get_users_filter_dto::GetUsersFilterDto},
        models::user::{NewUser, User},
    },
};

use super::{config::Config, errors::StoreApiError, models::resource_id::ResourceId, ResourceStore};

#[derive(Clone, Debug)]
pub struct StoreClient {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl StoreClient {
    pub fn new(config: Config) -> Result<StoreClient, reqwest::Error> {
        let http_client = reqwest::ClientBuilder::new()
            .timeout(config.timeout)
            .build()?;

        Ok(StoreClient {
            config,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        [&self.config.base_url, path].concat()
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let res = match request.send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(%e);
                return Err(StoreApiError::Unreachable.value());
            }
        };

        let status = res.status();
        if !status.is_success() {
            tracing::error!(%status, url = %res.url(), "resource store rejected request");
            return Err(StoreApiError::UnexpectedStatus.value());
        }

        match res.json::<T>().await {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::error!(%e);
                Err(StoreApiError::MalformedPayload.value())
            }
        }
    }
}

#[async_trait]
impl ResourceStore for StoreClient {
    async fn find_users(&self, dto: &GetUsersFilterDto) -> Result<Vec<User>, ApiError> {
        tracing::debug!("GET /users");

        self.send(self.http_client.get(self.url("/users")).query(dto))
            .await
    }

    async fn get_user(&self, id: &ResourceId) -> Result<Option<User>, ApiError> {
        let path = ["/users/", &id.to_string()].concat();
        tracing::debug!(%path, "GET");

        let res = match self.http_client.get(self.url(&path)).send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(%e);
                return Err(StoreApiError::Unreachable.value());
            }
        };

        match res.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => match res.json::<User>().await {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    tracing::error!(%e);
                    Err(StoreApiError::MalformedPayload.value())
                }
            },
            status => {
                tracing::error!(%status, %path, "resource store rejected request");
                Err(StoreApiError::UnexpectedStatus.value())
            }
        }
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        tracing::debug!("POST /users");

        self.send(self.http_client.post(self.url("/users")).json(new_user))
            .await
    }

    async fn patch_user(&self, id: &ResourceId, dto: &EditUserDto) -> Result<User, ApiError> {
        let path = ["/users/", &id.to_string()].concat();
        tracing::debug!(%path, "PATCH");

        self.send(self.http_client.patch(self.url(&path)).json(dto))
            .await
    }

    async fn find_transactions(&self, user_id: &ResourceId) -> Result<Vec<Transaction>, ApiError> {
        tracing::debug!(%user_id, "GET /transactions");

        self.send(
            self.http_client
                .get(self.url("/transactions"))
                .query(&[("userId", user_id.to_string())]),
        )
        .await
    }

    async fn create_transaction(
        &self,
        new_transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        tracing::debug!(user_id = %new_transaction.user_id, "POST /transactions");

        self.send(
            self.http_client
                .post(self.url("/transactions"))
                .json(new_transaction),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::{net::TcpListener, time::Duration};

    use axum::{
        extract::{Path, Query},
        http::StatusCode as AxumStatusCode,
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;

    async fn list_users(Query(query): Query<Vec<(String, String)>>) -> Json<Value> {
        let by_email = query
            .iter()
            .any(|(k, v)| k == "email" && v == "ana@example.com");

        match by_email {
            true => Json(json!([{
                "id": 1,
                "email": "ana@example.com",
                "password": "123456",
                "name": "Ana",
                "cpfCnpj": "12345678909",
                "balance": 100.0,
                "transactionPassword": "1234",
                "newUser": false
            }])),
            false => Json(json!([])),
        }
    }

    async fn show_user(Path(id): Path<String>) -> Result<Json<Value>, AxumStatusCode> {
        match id.as_str() {
            "1" => Ok(Json(json!({ "id": 1, "email": "ana@example.com", "name": "Ana" }))),
            "broken" => Ok(Json(json!({ "unexpected": true }))),
            _ => Err(AxumStatusCode::NOT_FOUND),
        }
    }

    async fn list_transactions() -> AxumStatusCode {
        AxumStatusCode::INTERNAL_SERVER_ERROR
    }

    fn spawn_fake_store() -> StoreClient {
        let app = Router::new()
            .route("/users", get(list_users))
            .route("/users/:id", get(show_user))
            .route("/transactions", get(list_transactions));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service()),
        );

        StoreClient::new(Config::new(
            format!("http://{}/", addr),
            Duration::from_secs(5),
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn finds_users_by_query() {
        let client = spawn_fake_store();

        let users = client
            .find_users(&GetUsersFilterDto::by_email("ana@example.com"))
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, ResourceId::Number(1));
        assert_eq!(users[0].transaction_password, "1234");

        let users = client
            .find_users(&GetUsersFilterDto::by_email("nobody@example.com"))
            .await
            .unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn get_user_maps_not_found_to_none() {
        let client = spawn_fake_store();

        let user = client.get_user(&ResourceId::Number(1)).await.unwrap();
        assert_eq!(user.map(|u| u.name), Some("Ana".to_string()));

        let user = client.get_user(&ResourceId::Number(99)).await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn store_failures_become_bad_gateway() {
        let client = spawn_fake_store();

        let error = client
            .find_transactions(&ResourceId::Number(1))
            .await
            .unwrap_err();
        assert_eq!(error.code, AxumStatusCode::BAD_GATEWAY);

        let error = client
            .get_user(&ResourceId::Text("broken".to_string()))
            .await
            .unwrap_err();
        assert_eq!(error.code, AxumStatusCode::BAD_GATEWAY);
    }
}
