//! Event preview: `GET /event/{event_id}`.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};

use super::{lookup_failed, missing_record};
use crate::api::AppState;
use crate::error::Result;
use crate::format::{format_date_time, resolve_avatar_url, truncate_description, DESCRIPTION_LIMIT};
use crate::models::Event;
use crate::render::EventPage;
use crate::supabase::RecordQuery;

pub async fn event_preview(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let base_url = state.base_url(&headers);

    match load_event_page(&state, &event_id, &base_url).await {
        Ok(Some(page)) => Html(page.render().into_string()).into_response(),
        Ok(None) => missing_record(&state, "Event not found", base_url).into_response(),
        Err(e) => {
            tracing::error!(error = %e, event_id = %event_id, "Error fetching event");
            lookup_failed(&state, base_url).into_response()
        }
    }
}

async fn load_event_page(
    state: &AppState,
    event_id: &str,
    base_url: &str,
) -> Result<Option<EventPage>> {
    let query = RecordQuery::new().eq("id", event_id).select(Event::FIELDS);

    let Some(event) = state
        .supabase
        .fetch_one::<Event>(Event::TABLE, &query)
        .await?
        .into_option()
    else {
        return Ok(None);
    };

    let links = &state.config.links;
    let tz = state.config.display.timezone;
    let id = event.id.clone().unwrap_or_else(|| event_id.to_string());

    Ok(Some(EventPage {
        is_private: event.is_private(),
        avatar_src: resolve_avatar_url(&state.config.supabase.url, event.avatar.as_deref()),
        formatted_date: format_date_time(event.start_time.as_deref(), tz),
        formatted_end_date: format_date_time(event.end_time.as_deref(), tz),
        description: truncate_description(event.description.as_deref(), DESCRIPTION_LIMIT),
        deep_link: links.event_deep_link(&id),
        canonical_url: format!("{base_url}/event/{id}"),
        app_store_url: links.app_store_url.clone(),
        testflight_url: links.testflight_url.clone(),
        event,
    }))
}
