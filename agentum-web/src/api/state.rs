use std::sync::Arc;

use axum::http::HeaderMap;

use crate::config::Config;
use crate::error::Result;
use crate::format::resolve_base_url;
use crate::supabase::SupabaseClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub supabase: SupabaseClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let supabase = SupabaseClient::new(&config.supabase)?;

        Ok(Self {
            config: Arc::new(config),
            supabase,
        })
    }

    /// Public origin of this server for the current request.
    pub fn base_url(&self, headers: &HeaderMap) -> String {
        let fallback_host = format!("localhost:{}", self.config.server.port);
        resolve_base_url(headers, &fallback_host)
    }
}
