//! HTML preview pages.
//!
//! Each page carries Open Graph and Twitter card metadata for link
//! unfurlers, plus a deep link into the app with App Store fallbacks.
//! All dynamic text goes through maud and is HTML-escaped.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::{Event, Profile};

const SITE_NAME: &str = "Agentum";

const STYLES: &str = "\
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;\
background:#0b0b0f;color:#f2f2f7;display:flex;min-height:100vh;align-items:center;justify-content:center}\
main{max-width:420px;width:100%;padding:32px 24px;text-align:center}\
.avatar{width:112px;height:112px;border-radius:50%;object-fit:cover;margin-bottom:16px}\
.cover{width:100%;border-radius:16px;object-fit:cover;margin-bottom:16px}\
h1{font-size:26px;margin:0 0 8px}\
.meta{color:#a1a1aa;margin:4px 0}\
.description{color:#d4d4d8;line-height:1.5;margin:16px 0}\
.actions{display:flex;flex-direction:column;gap:12px;margin-top:24px}\
.button{display:block;padding:14px 18px;border-radius:12px;text-decoration:none;font-weight:600}\
.primary{background:#6d5dfc;color:#fff}\
.secondary{background:#1f1f27;color:#f2f2f7}";

/// Values shared by every page's `<head>`.
struct PageMeta<'a> {
    title: &'a str,
    description: &'a str,
    image: Option<&'a str>,
    url: Option<&'a str>,
    og_type: &'a str,
}

#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub profile: Profile,
    pub display_name: String,
    pub avatar_src: Option<String>,
    pub deep_link: String,
    pub canonical_url: String,
    pub app_store_url: String,
    pub testflight_url: String,
}

#[derive(Debug, Clone)]
pub struct EventPage {
    pub event: Event,
    /// Private events render a generic card; the record itself is still
    /// passed through untouched.
    pub is_private: bool,
    pub avatar_src: Option<String>,
    pub formatted_date: String,
    pub formatted_end_date: String,
    /// Already truncated for display.
    pub description: String,
    pub deep_link: String,
    pub canonical_url: String,
    pub app_store_url: String,
    pub testflight_url: String,
}

#[derive(Debug, Clone)]
pub struct NotFoundPage {
    pub status: StatusCode,
    pub message: String,
    pub base_url: String,
    pub app_store_url: Option<String>,
    pub testflight_url: Option<String>,
}

impl ProfilePage {
    pub fn render(&self) -> Markup {
        let summary = profile_summary(&self.profile);
        let description = if summary.is_empty() {
            format!("Connect with {} on {SITE_NAME}.", self.display_name)
        } else {
            summary.clone()
        };
        let title = format!("{} on {SITE_NAME}", self.display_name);
        let meta = PageMeta {
            title: &title,
            description: &description,
            image: self.avatar_src.as_deref(),
            url: Some(self.canonical_url.as_str()),
            og_type: "profile",
        };

        layout(
            &meta,
            html! {
                @if let Some(src) = &self.avatar_src {
                    img class="avatar" src=(src) alt=(self.display_name);
                }
                h1 { (self.display_name) }
                @if let Some(username) = &self.profile.username {
                    p class="meta" { "@" (username) }
                }
                @if !summary.is_empty() {
                    p class="meta" { (summary) }
                }
                (app_actions(&self.deep_link, &self.app_store_url, Some(self.testflight_url.as_str())))
            },
        )
    }
}

impl EventPage {
    pub fn render(&self) -> Markup {
        let title = if self.is_private {
            "Private event".to_string()
        } else {
            self.event
                .title
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Event".to_string())
        };

        let description = if self.is_private {
            format!("You've been invited to a private event on {SITE_NAME}. Open the app to see the details.")
        } else if !self.description.is_empty() {
            self.description.clone()
        } else if !self.formatted_date.is_empty() {
            self.formatted_date.clone()
        } else {
            format!("Join this event on {SITE_NAME}.")
        };

        let image = if self.is_private {
            None
        } else {
            self.avatar_src.as_deref()
        };

        let meta = PageMeta {
            title: &title,
            description: &description,
            image,
            url: Some(self.canonical_url.as_str()),
            og_type: "website",
        };

        layout(
            &meta,
            html! {
                @if let Some(src) = image {
                    img class="cover" src=(src) alt=(title);
                }
                h1 { (title) }
                @if self.is_private {
                    p class="description" { (description) }
                } @else {
                    @if !self.formatted_date.is_empty() {
                        p class="meta" { time datetime=[self.event.start_time.as_deref()] { (self.formatted_date) } }
                    }
                    @if !self.formatted_end_date.is_empty() {
                        p class="meta" { "Until " time datetime=[self.event.end_time.as_deref()] { (self.formatted_end_date) } }
                    }
                    @if let Some(location) = self.event.location.as_deref().filter(|l| !l.is_empty()) {
                        p class="meta" { (location) }
                    }
                    @if !self.description.is_empty() {
                        p class="description" { (self.description) }
                    }
                }
                (app_actions(&self.deep_link, &self.app_store_url, Some(self.testflight_url.as_str())))
            },
        )
    }
}

impl NotFoundPage {
    pub fn render(&self) -> Markup {
        let meta = PageMeta {
            title: &self.message,
            description: "This link may have expired or never existed.",
            image: None,
            url: None,
            og_type: "website",
        };

        layout(
            &meta,
            html! {
                h1 { (self.message) }
                p class="meta" { "This link may have expired or never existed." }
                div class="actions" {
                    a class="button secondary" href=(self.base_url) { "Go to " (SITE_NAME) }
                    @if let Some(url) = &self.app_store_url {
                        a class="button primary" href=(url) { "Download on the App Store" }
                    }
                    @if let Some(url) = &self.testflight_url {
                        a class="button secondary" href=(url) { "Join the TestFlight beta" }
                    }
                }
            },
        )
    }
}

impl IntoResponse for NotFoundPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.render().into_string())).into_response()
    }
}

/// "Title at Organization · Location", skipping whatever is missing.
fn profile_summary(profile: &Profile) -> String {
    let filled = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

    let role = match (filled(&profile.title), filled(&profile.organization_name)) {
        (Some(title), Some(org)) => Some(format!("{title} at {org}")),
        (title, org) => title.or(org),
    };

    [role, filled(&profile.location)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ")
}

fn layout(meta: &PageMeta<'_>, body: Markup) -> Markup {
    let twitter_card = if meta.image.is_some() {
        "summary_large_image"
    } else {
        "summary"
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                @if let Some(url) = meta.url {
                    link rel="canonical" href=(url);
                }
                meta property="og:site_name" content=(SITE_NAME);
                meta property="og:type" content=(meta.og_type);
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                @if let Some(url) = meta.url {
                    meta property="og:url" content=(url);
                }
                @if let Some(image) = meta.image {
                    meta property="og:image" content=(image);
                }
                meta name="twitter:card" content=(twitter_card);
                meta name="twitter:title" content=(meta.title);
                meta name="twitter:description" content=(meta.description);
                @if let Some(image) = meta.image {
                    meta name="twitter:image" content=(image);
                }
                style { (PreEscaped(STYLES)) }
            }
            body {
                main { (body) }
            }
        }
    }
}

fn app_actions(deep_link: &str, app_store_url: &str, testflight_url: Option<&str>) -> Markup {
    html! {
        div class="actions" {
            a class="button primary" href=(deep_link) { "Open in " (SITE_NAME) }
            a class="button secondary" href=(app_store_url) { "Download on the App Store" }
            @if let Some(url) = testflight_url {
                a class="button secondary" href=(url) { "Join the TestFlight beta" }
            }
        }
        script { (PreEscaped(open_app_script(deep_link, app_store_url))) }
    }
}

/// On phones, try the custom scheme first and fall back to the App Store if
/// the page is still visible afterwards.
fn open_app_script(deep_link: &str, app_store_url: &str) -> String {
    format!(
        "(function(){{var d={},s={};\
if(!/iPhone|iPad|iPod|Android/i.test(navigator.userAgent))return;\
var t=Date.now();window.location.href=d;\
setTimeout(function(){{if(!document.hidden&&Date.now()-t<2500)window.location.href=s;}},1500);}})();",
        js_string(deep_link),
        js_string(app_store_url)
    )
}

/// JSON string literal that cannot close the surrounding `<script>`.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}
