//! The Dog API fetcher.
//!
//! Fetches the full breed list from https://api.thedogapi.com/v1/breeds
//! in a single GET. The key travels in the `x-api-key` header; when no
//! key was configured the header is simply omitted and whatever the API
//! answers flows through the normal success/error path.

use serde::Deserialize;
use tracing::debug;

use crate::config::AppConfig;

/// One breed entry as the API returns it. Everything beyond `id` and
/// `name` is optional in practice, so the whole shape is permissive.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBreed {
    pub id: u32,
    pub name: String,
    pub breed_group: Option<String>,
    pub bred_for: Option<String>,
    pub life_span: Option<String>,
    pub temperament: Option<String>,
    pub origin: Option<String>,
    pub weight: Option<RawMeasure>,
    pub height: Option<RawMeasure>,
    pub image: Option<RawImage>,
}

/// Metric/imperial measurement pair; only the metric side is read.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMeasure {
    pub metric: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub url: Option<String>,
}

pub struct BreedClient {
    breeds_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl BreedClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            breeds_url: config.breeds_url.clone(),
            api_key: config.api_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the complete breed list in API order.
    pub async fn fetch_breeds(&self) -> Result<Vec<RawBreed>, String> {
        let mut req = self.client.get(&self.breeds_url);
        if let Some(key) = &self.api_key {
            req = req.header("x-api-key", key);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("API error: {} - {}", status, body));
        }

        let breeds: Vec<RawBreed> = resp
            .json()
            .await
            .map_err(|e| format!("parse error: {}", e))?;

        debug!(breeds = breeds.len(), "fetched breed list");

        Ok(breeds)
    }
}
