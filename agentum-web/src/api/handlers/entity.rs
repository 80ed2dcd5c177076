//! Profile preview: `GET /entity/@{username}`.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};

use super::{lookup_failed, missing_record, page_not_found};
use crate::api::AppState;
use crate::error::Result;
use crate::format::{display_name, resolve_avatar_url};
use crate::models::Profile;
use crate::render::ProfilePage;
use crate::supabase::RecordQuery;

pub async fn entity_preview(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
) -> Response {
    let base_url = state.base_url(&headers);

    // Only `@username` segments are profile links.
    let Some(username) = handle.strip_prefix('@').filter(|u| !u.is_empty()) else {
        return page_not_found(&state, base_url).into_response();
    };

    match load_profile_page(&state, username, &base_url).await {
        Ok(Some(page)) => Html(page.render().into_string()).into_response(),
        Ok(None) => missing_record(&state, "Profile not found", base_url).into_response(),
        Err(e) => {
            tracing::error!(error = %e, username, "Error fetching entity");
            lookup_failed(&state, base_url).into_response()
        }
    }
}

async fn load_profile_page(
    state: &AppState,
    username: &str,
    base_url: &str,
) -> Result<Option<ProfilePage>> {
    let query = RecordQuery::new()
        .ilike("username", username)
        .select(Profile::FIELDS);

    let Some(profile) = state
        .supabase
        .fetch_one::<Profile>(Profile::TABLE, &query)
        .await?
        .into_option()
    else {
        return Ok(None);
    };

    let links = &state.config.links;
    // The stored handle wins over whatever casing the visitor typed.
    let handle = profile
        .username
        .clone()
        .unwrap_or_else(|| username.to_string());

    Ok(Some(ProfilePage {
        display_name: display_name(&profile),
        avatar_src: resolve_avatar_url(&state.config.supabase.url, profile.avatar.as_deref()),
        deep_link: links.entity_deep_link(&handle),
        canonical_url: format!("{base_url}/entity/@{handle}"),
        app_store_url: links.app_store_url.clone(),
        testflight_url: links.testflight_url.clone(),
        profile,
    }))
}
