use axum::{handler::Handler, routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    // Static assets first; anything they don't cover, for any method, gets
    // the not-found page.
    let static_files = ServeDir::new(&state.config.server.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::not_found.with_state(state.clone()));

    Router::new()
        .route(
            "/.well-known/apple-app-site-association",
            get(handlers::apple_app_site_association),
        )
        // Preview links also resolve with a trailing slash.
        .route("/entity/{handle}", get(handlers::entity_preview))
        .route("/entity/{handle}/", get(handlers::entity_preview))
        .route("/event/{event_id}", get(handlers::event_preview))
        .route("/event/{event_id}/", get(handlers::event_preview))
        .route("/health", get(handlers::health_check))
        .method_not_allowed_fallback(handlers::not_found)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
