pub mod config;
pub mod discount;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod registry;
pub mod schemas;
pub mod signature;
pub mod timestamp;
pub mod validation;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::validation::RequestValidator;

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<RequestValidator>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/submittrxmessage",
            post(handlers::transaction::submit),
        )
        .layer(axum_middleware::from_fn(
            middleware::request_logger::request_logger_middleware,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
