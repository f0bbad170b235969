pub mod auth;
pub mod cache;
pub mod config;
pub mod dao;
pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, Request, Response};
use axum::Router;
use sqlx::PgPool;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::cache::UserCache;
use crate::config::Config;
use crate::dao::{PgUserDao, UserDao};
use crate::services::UserService;
use crate::state::{AppState, SharedState};

/// Wires the Postgres-backed DAO into the router.
pub fn build_app(pool: PgPool, config: Config) -> Router {
    let cache = UserCache::new(config.cache_enabled);
    if config.cache_enabled {
        tracing::info!("User read cache enabled");
    }
    let dao: Arc<dyn UserDao> = Arc::new(PgUserDao::new(pool, cache));
    build_router(dao)
}

/// Router over any `UserDao`, used directly by tests.
pub fn build_router(dao: Arc<dyn UserDao>) -> Router {
    let state: SharedState = Arc::new(AppState {
        users: UserService::new(dao),
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/ping", axum::routing::get(ping))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    tracing::info_span!("http_request", method = %req.method(), uri = %req.uri())
                })
                .on_response(
                    |res: &Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(%status, ?latency, "response");
                        } else {
                            tracing::info!(%status, ?latency, "response");
                        }
                    },
                ),
        )
        .with_state(state)
}

async fn ping() -> &'static str {
    "pong"
}
