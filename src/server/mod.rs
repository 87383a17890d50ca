//! The web front: routes, handlers and the page shell.

pub mod handlers;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::playground::SessionRegistry;
use handlers::{
    health_handler, index_handler, playground_form_handler, playground_reset_handler, playground_state_handler,
    playground_submit_handler,
};

#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Playground per visitor session
    pub sessions: Arc<SessionRegistry>,
}

/// Build the router for the whole site
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/playground", post(playground_form_handler))
        .route("/playground/reset", post(playground_reset_handler))
        .route("/api/playground", get(playground_state_handler).post(playground_submit_handler))
        .route("/health", get(health_handler))
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
