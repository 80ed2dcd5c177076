use chrono_tz::Tz;
use std::env;

/// Apple developer team that signs the iOS app.
pub const TEAM_ID: &str = "P664VA8R4Y";

/// Bundle identifier of the iOS app.
pub const BUNDLE_ID: &str = "vc.cerebro.Agentum";

/// Custom URL scheme registered by the mobile app.
pub const DEEP_LINK_SCHEME: &str = "agentum";

const DEFAULT_SUPABASE_URL: &str = "https://btcsqdatmuwbqobiilfb.supabase.co";
const DEFAULT_APP_STORE_URL: &str = "https://apps.apple.com/app/agentum";
const DEFAULT_TESTFLIGHT_URL: &str = "https://testflight.apple.com/join/REPLACE_ME";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
    pub links: AppLinksConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of static assets served for paths no route claims.
    pub static_dir: String,
}

/// Connection settings for the Supabase project backing profiles and events.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, without a trailing slash. Also the base of the
    /// public storage bucket used for avatars.
    pub url: String,
    pub anon_key: String,
}

/// Everything needed to send a visitor into the mobile app.
#[derive(Debug, Clone)]
pub struct AppLinksConfig {
    pub app_store_url: String,
    pub testflight_url: String,
    pub deep_link_scheme: String,
    pub team_id: String,
    pub bundle_id: String,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Zone used when rendering event start/end times.
    pub timezone: Tz,
}

impl Default for AppLinksConfig {
    fn default() -> Self {
        Self {
            app_store_url: DEFAULT_APP_STORE_URL.to_string(),
            testflight_url: DEFAULT_TESTFLIGHT_URL.to_string(),
            deep_link_scheme: DEEP_LINK_SCHEME.to_string(),
            team_id: TEAM_ID.to_string(),
            bundle_id: BUNDLE_ID.to_string(),
        }
    }
}

impl AppLinksConfig {
    /// Identifier Apple uses to match the site association to the app.
    pub fn app_id(&self) -> String {
        format!("{}.{}", self.team_id, self.bundle_id)
    }

    pub fn entity_deep_link(&self, username: &str) -> String {
        format!("{}://entity/@{}", self.deep_link_scheme, username)
    }

    pub fn event_deep_link(&self, event_id: &str) -> String {
        format!("{}://event/{}", self.deep_link_scheme, event_id)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PORT", 3000),
                static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            },
            supabase: SupabaseConfig {
                url: env::var("SUPABASE_URL")
                    .unwrap_or_else(|_| DEFAULT_SUPABASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
            },
            links: AppLinksConfig {
                app_store_url: env::var("APP_STORE_URL")
                    .unwrap_or_else(|_| DEFAULT_APP_STORE_URL.to_string()),
                testflight_url: env::var("TESTFLIGHT_URL")
                    .unwrap_or_else(|_| DEFAULT_TESTFLIGHT_URL.to_string()),
                ..AppLinksConfig::default()
            },
            display: DisplayConfig {
                timezone: parse_env_or("DISPLAY_TIMEZONE", Tz::UTC),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
