//! Supabase-backed `RecordStore` implementation.
//!
//! Talks PostgREST directly: `GET`/`POST` against
//! `{base}/rest/v1/{table}` with the project key in both the `apikey`
//! and `Authorization` headers.  Permission failures (HTTP 401/403 or
//! PostgREST code `42501`) are mapped to [`StoreError::AccessDenied`].

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{RecordStore, Store, StoreError, WaterRecord};

/// Default table holding the gauge readings.
pub const DEFAULT_TABLE: &str = "water_levels";

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Project API key (anon or service role).
    pub key: String,
    pub table: String,
}

impl SupabaseConfig {
    /// Read credentials from `SUPABASE_URL` / `SUPABASE_KEY` /
    /// `SUPABASE_TABLE`.  Returns `None` when either credential is
    /// missing, which callers should treat as an unconfigured store.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SUPABASE_URL").ok()?;
        let key = std::env::var("SUPABASE_KEY").ok()?;
        let table =
            std::env::var("SUPABASE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        Some(Self { url, key, table })
    }
}

// ---------------------------------------------------------------------------
// SupabaseStore
// ---------------------------------------------------------------------------

pub struct SupabaseStore {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Build a [`Store`] from the environment: `Configured` when
    /// credentials are present, `Unconfigured` otherwise.
    pub fn from_env() -> Store {
        match SupabaseConfig::from_env() {
            Some(config) => {
                info!(table = %config.table, "using Supabase store");
                Store::Configured(std::sync::Arc::new(Self::new(config)))
            }
            None => Store::Unconfigured,
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.config.key)
            .bearer_auth(&self.config.key)
    }

    /// Turn a non-success response into the appropriate `StoreError`.
    async fn error_for(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body: PostgrestError = response.json().await.unwrap_or(PostgrestError {
            code: String::new(),
            message: String::new(),
        });

        if status == 401
            || status == 403
            || body.code == "42501"
            || body.message.contains("row-level security")
        {
            return StoreError::access_denied();
        }

        StoreError::Api {
            status,
            message: body.message,
        }
    }

    async fn fetch(&self, query: &[(&str, &str)]) -> Result<Vec<WaterRecord>, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url()).query(query))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RecordStore for SupabaseStore {
    async fn list_all(&self) -> Result<Vec<WaterRecord>, StoreError> {
        debug!("fetching full water level history");
        self.fetch(&[("select", "*"), ("order", "created_at.asc")])
            .await
    }

    async fn latest(&self) -> Result<Option<WaterRecord>, StoreError> {
        let mut rows = self
            .fetch(&[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("limit", "1"),
            ])
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn insert(&self, record: &WaterRecord) -> Result<(), StoreError> {
        debug!(water_level = record.water_level, "inserting water record");
        let response = self
            .authed(self.client.post(self.table_url()).json(&[record]))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        Ok(())
    }
}
