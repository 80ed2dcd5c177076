//! Apple app site association, served from the well-known path so iOS can
//! verify universal links for profile and event URLs.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::config::AppLinksConfig;

#[derive(Debug, Clone, Serialize)]
pub struct AppSiteAssociation {
    pub applinks: AppLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppLinks {
    pub details: Vec<AppLinkDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppLinkDetail {
    #[serde(rename = "appIDs")]
    pub app_ids: Vec<String>,
    pub components: Vec<AppLinkComponent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppLinkComponent {
    #[serde(rename = "/")]
    pub path: &'static str,
    pub comment: &'static str,
}

impl AppSiteAssociation {
    pub fn for_app(links: &AppLinksConfig) -> Self {
        Self {
            applinks: AppLinks {
                details: vec![AppLinkDetail {
                    app_ids: vec![links.app_id()],
                    components: vec![
                        AppLinkComponent {
                            path: "/entity/@*",
                            comment: "Entity profile pages",
                        },
                        AppLinkComponent {
                            path: "/event/*",
                            comment: "Event detail pages",
                        },
                    ],
                }],
            },
        }
    }
}

/// `GET /.well-known/apple-app-site-association`
pub async fn apple_app_site_association(
    State(state): State<AppState>,
) -> Json<AppSiteAssociation> {
    Json(AppSiteAssociation::for_app(&state.config.links))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn manifest_matches_apple_schema() {
        let manifest = AppSiteAssociation::for_app(&AppLinksConfig::default());
        let value = serde_json::to_value(&manifest).expect("serialize");

        assert_eq!(
            value,
            json!({
                "applinks": {
                    "details": [{
                        "appIDs": ["P664VA8R4Y.vc.cerebro.Agentum"],
                        "components": [
                            { "/": "/entity/@*", "comment": "Entity profile pages" },
                            { "/": "/event/*", "comment": "Event detail pages" }
                        ]
                    }]
                }
            })
        );
    }
}
