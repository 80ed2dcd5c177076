//! Display helpers shared by the preview pages.
//!
//! Every function here is total: bad or missing input degrades to an empty
//! or fallback value instead of failing the request.

use axum::http::{header, HeaderMap};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use unicode_segmentation::UnicodeSegmentation;

use crate::models::Profile;

/// Default cut-off for event descriptions in previews.
pub const DESCRIPTION_LIMIT: usize = 200;

const ELLIPSIS: &str = "...";
const ANONYMOUS: &str = "Anonymous";
const DATE_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p %Z";

/// Turn an avatar reference into a URL a crawler can fetch.
///
/// Absolute URLs pass through; anything else is a path in the public
/// `avatars` bucket of the storage service at `storage_base`.
pub fn resolve_avatar_url(storage_base: &str, avatar: Option<&str>) -> Option<String> {
    let avatar = avatar.filter(|value| !value.is_empty())?;

    if avatar.starts_with("http://") || avatar.starts_with("https://") {
        return Some(avatar.to_string());
    }

    Some(format!(
        "{}/storage/v1/object/public/avatars/{}",
        storage_base.trim_end_matches('/'),
        avatar.trim_start_matches('/')
    ))
}

pub fn display_name(profile: &Profile) -> String {
    let given = non_empty(profile.given_name.as_deref());
    let family = non_empty(profile.family_name.as_deref());

    match (given, family) {
        (Some(given), Some(family)) => format!("{given} {family}"),
        (Some(name), None) | (None, Some(name)) => name.to_string(),
        (None, None) => non_empty(profile.username.as_deref())
            .unwrap_or(ANONYMOUS)
            .to_string(),
    }
}

/// Long-form en-US date and time in `tz`, e.g.
/// `Friday, March 15, 2024 at 7:00 PM UTC`.
///
/// Timestamps without an offset are taken as UTC. Unparseable input is
/// returned as-is so the page still shows something.
pub fn format_date_time(timestamp: Option<&str>, tz: Tz) -> String {
    let Some(raw) = non_empty(timestamp) else {
        return String::new();
    };

    match parse_timestamp(raw) {
        Some(instant) => instant.with_timezone(&tz).format(DATE_FORMAT).to_string(),
        None => {
            tracing::debug!(timestamp = raw, "Unparseable timestamp");
            raw.to_string()
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    // Postgres text form: "2024-03-15 19:00:00+00"
    if let Ok(instant) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(instant.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Cut `text` to `limit` grapheme clusters, appending `...` when shortened.
pub fn truncate_description(text: Option<&str>, limit: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut graphemes = text.grapheme_indices(true);
    match graphemes.nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// `<proto>://<host>` as seen by the visitor, honouring a reverse proxy's
/// `X-Forwarded-Proto`.
pub fn resolve_base_url(headers: &HeaderMap, fallback_host: &str) -> String {
    let proto = header_value(headers, "x-forwarded-proto")
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("http");

    let host = header_value(headers, header::HOST.as_str())
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback_host);

    format!("{proto}://{host}")
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
