// Shared helpers for integration tests
#![allow(dead_code)]

use std::sync::Once;

use agentum_web::config::{AppLinksConfig, Config, DisplayConfig, ServerConfig, SupabaseConfig};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Config pointing Supabase at `supabase_url` (usually a wiremock server).
pub fn test_config(supabase_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: "does-not-exist".to_string(),
        },
        supabase: SupabaseConfig {
            url: supabase_url.to_string(),
            anon_key: "test-anon-key".to_string(),
        },
        links: AppLinksConfig {
            app_store_url: "https://apps.apple.com/app/agentum".to_string(),
            testflight_url: "https://testflight.apple.com/join/TEST".to_string(),
            ..AppLinksConfig::default()
        },
        display: DisplayConfig {
            timezone: chrono_tz::Tz::UTC,
        },
    }
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
