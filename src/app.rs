use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/country/:id", get(handlers::country))
        .route("/api/home", get(handlers::get_home))
        .route("/api/country/:id", get(handlers::get_country))
        .route("/api/select", get(handlers::select))
        .route("/api/olympics", get(handlers::get_olympics))
        .with_state(state)
}
