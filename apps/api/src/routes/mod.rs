pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Everything that isn't an API route is a static asset; "/" resolves to index.html.
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-email",
            post(handlers::handle_generate_email),
        )
        .fallback_service(static_files)
        .with_state(state)
}
