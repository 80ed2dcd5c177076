mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::config::{AppLinksConfig, Config, DisplayConfig, ServerConfig, SupabaseConfig};

    fn test_state() -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                static_dir: "does-not-exist".to_string(),
            },
            // Never contacted by these tests.
            supabase: SupabaseConfig {
                url: "http://127.0.0.1:1".to_string(),
                anon_key: String::new(),
            },
            links: AppLinksConfig::default(),
            display: DisplayConfig {
                timezone: chrono_tz::Tz::UTC,
            },
        };

        AppState::new(config).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok_without_supabase() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        let timestamp = json["timestamp"].as_str().expect("timestamp should be a string");
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn manifest_is_served_as_json() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/.well-known/apple-app-site-association")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            json["applinks"]["details"][0]["appIDs"][0],
            "P664VA8R4Y.vc.cerebro.Agentum"
        );
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_page() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nowhere")
                    .header(header::HOST, "agentum.app")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_string(response).await;
        assert!(html.contains("Page not found"));
        assert!(html.contains(r#"href="http://agentum.app""#));
    }

    #[tokio::test]
    async fn entity_path_without_at_sign_is_not_found() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/entity/ana")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn non_get_requests_render_not_found_page() {
        for (verb, uri) in [("POST", "/nowhere"), ("POST", "/health"), ("DELETE", "/entity/@ana")] {
            let app = create_router(test_state());

            let response = app
                .oneshot(
                    Request::builder()
                        .method(verb)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{verb} {uri}");
            assert!(body_string(response).await.contains("Page not found"), "{verb} {uri}");
        }
    }

    #[tokio::test]
    async fn unreachable_supabase_yields_server_error_page() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/event/evt_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_string(response).await;
        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("TestFlight"));
    }
}
