// src/routes.rs
use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::tags;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tags", get(tags::tags_page))
        .route("/projects/:project/tags", get(tags::project_tags_page))
        .route("/health", get(tags::health))
        .with_state(state)
}
