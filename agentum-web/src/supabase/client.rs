use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::query::RecordQuery;
use crate::config::SupabaseConfig;
use crate::error::{PreviewError, Result};

/// Outcome of a single-record lookup.
///
/// Missing rows and rejected requests both come back as `Absent`; only
/// transport failures and unreadable bodies are errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Absent,
}

impl<T> Lookup<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::Absent => None,
        }
    }
}

#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    rest_url: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        let base = Url::parse(&config.url)?;
        let rest_url = format!("{}/rest/v1", base.as_str().trim_end_matches('/'));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if !config.anon_key.is_empty() {
            headers.insert(
                HeaderName::from_static("apikey"),
                HeaderValue::from_str(&config.anon_key)
                    .map_err(|e| PreviewError::Config(format!("Invalid API key header: {e}")))?,
            );
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
                    .map_err(|e| PreviewError::Config(format!("Invalid API key header: {e}")))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| PreviewError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, rest_url })
    }

    /// Fetch the first row of `table` matching `query`.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &RecordQuery,
    ) -> Result<Lookup<T>> {
        let url = format!("{}/{}", self.rest_url, table);
        tracing::debug!(table, "Fetching record");

        let response = self
            .client
            .get(&url)
            .query(&query.to_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(table, status = %status, "Supabase lookup rejected");
            return Ok(Lookup::Absent);
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        match first_record(table, body)? {
            Some(record) => Ok(Lookup::Found(serde_json::from_value(record)?)),
            None => Ok(Lookup::Absent),
        }
    }
}

/// Collapse the list and single-object response shapes into one record.
fn first_record(table: &str, body: Value) -> Result<Option<Value>> {
    match body {
        Value::Array(rows) => Ok(rows.into_iter().next()),
        Value::Object(_) => Ok(Some(body)),
        Value::Null => Ok(None),
        other => Err(PreviewError::UnexpectedResponse {
            table: table.to_string(),
            detail: format!("expected an object or array, got {other}"),
        }),
    }
}
