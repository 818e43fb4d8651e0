//! Project board development backend.
//!
//! Implements the HTTP contract the frontend consumes (`/token` and
//! `/projects`) on an in-memory store, and serves the built frontend.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use routes::{
    create_project, delete_project, get_project, issue_token, list_projects, update_project,
};
use state::AppState;

/// API routes only.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/token", post(issue_token))
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(state)
}

/// Full application: API, static frontend, CORS and request tracing.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown paths fall through to index.html so client routes resolve.
    let frontend = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    api_router(state)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
