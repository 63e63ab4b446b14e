pub mod config;
pub mod error;
pub mod handlers;
pub mod json_store;
pub mod models;
pub mod password;
pub mod service;
pub mod store;
pub mod util;

use axum::{
    routing::{get, post},
    Router,
};
use service::CredentialService;

#[derive(Clone)]
pub struct AppState {
    pub service: CredentialService,
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build the full application router (used by main and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(health_routes())
        .with_state(state)
}
