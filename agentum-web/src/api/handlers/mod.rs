mod entity;
mod event;
mod fallback;
mod health;
mod manifest;

pub use entity::entity_preview;
pub use event::event_preview;
pub use fallback::not_found;
pub use health::health_check;
pub use manifest::apple_app_site_association;

use axum::http::StatusCode;

use crate::api::AppState;
use crate::render::NotFoundPage;

/// The lookup ran and found nothing.
fn missing_record(state: &AppState, message: &str, base_url: String) -> NotFoundPage {
    NotFoundPage {
        status: StatusCode::NOT_FOUND,
        message: message.to_string(),
        base_url,
        app_store_url: Some(state.config.links.app_store_url.clone()),
        testflight_url: Some(state.config.links.testflight_url.clone()),
    }
}

/// The lookup itself failed. Details stay in the server log.
fn lookup_failed(state: &AppState, base_url: String) -> NotFoundPage {
    NotFoundPage {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Something went wrong".to_string(),
        base_url,
        app_store_url: Some(state.config.links.app_store_url.clone()),
        testflight_url: None,
    }
}

fn page_not_found(state: &AppState, base_url: String) -> NotFoundPage {
    NotFoundPage {
        status: StatusCode::NOT_FOUND,
        message: "Page not found".to_string(),
        base_url,
        app_store_url: Some(state.config.links.app_store_url.clone()),
        testflight_url: None,
    }
}
