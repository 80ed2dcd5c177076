use axum::{extract::State, http::HeaderMap};

use super::page_not_found;
use crate::api::AppState;
use crate::render::NotFoundPage;

/// Catch-all for paths no route or static file claims.
pub async fn not_found(State(state): State<AppState>, headers: HeaderMap) -> NotFoundPage {
    let base_url = state.base_url(&headers);
    page_not_found(&state, base_url)
}
