use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    app::{env::Envy, errors::DefaultApiError},
    store::{client::StoreClient, config::Config, ResourceStore},
    transactions::util::in_flight::InFlight,
};

mod app;
mod auth;
mod dashboard;
mod store;
mod transactions;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResourceStore>,
    pub envy: Arc<Envy>,
    pub in_flight: InFlight,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // auth
        .route("/auth/register", post(auth::controller::register))
        .route("/auth/login", post(auth::controller::login))
        // users
        .route("/users/me", get(users::controller::get_user_from_request))
        .route(
            "/users/beneficiary",
            get(users::controller::get_beneficiary),
        )
        // dashboard
        .route("/dashboard", get(dashboard::controller::get_dashboard))
        // transactions
        .route(
            "/transactions",
            get(transactions::controller::get_transactions),
        )
        .route(
            "/transactions/transfer",
            post(transactions::controller::transfer),
        )
        .route(
            "/transactions/deposit",
            post(transactions::controller::deposit),
        )
        // layers
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));

    // tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banco_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();

    let store = match StoreClient::new(Config::new(
        envy.store_url.to_string(),
        envy.store_timeout(),
    )) {
        Ok(client) => client,
        Err(e) => panic!("failed to build resource store client: {}", e),
    };

    tracing::info!(store_url = %store.config.base_url, env = %envy.app_env, "resource store configured");

    let state = AppState {
        store: Arc::new(store),
        envy: Arc::new(envy),
        in_flight: InFlight::default(),
    };

    // app
    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|err: BoxError| async move {
                tracing::warn!(%err, "request rejected by rate limiter");
                DefaultApiError::TooManyRequests.value()
            }))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e, "server stopped");
    }
}
