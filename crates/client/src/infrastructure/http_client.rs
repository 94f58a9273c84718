//! D&D 5e reference API client (REST, read-only, unauthenticated)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::ports::outbound::{ApiError, CompendiumPort};
use bestiary_domain::{MonsterDetail, MonsterSummary};

/// Default base origin of the reference API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.dnd5eapi.co";

/// Relative path of the monster collection endpoint.
const MONSTERS_PATH: &str = "/api/monsters";

/// Client for the D&D 5e reference API.
#[derive(Clone)]
pub struct Dnd5eApiClient {
    client: Client,
    base_url: String,
}

impl Dnd5eApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the `BESTIARY_API_URL` environment variable,
    /// falling back to the public API.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BESTIARY_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// Base origin this client resolves relative paths against.
    ///
    /// Image references in detail records are relative to the same origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

impl Default for Dnd5eApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[async_trait]
impl CompendiumPort for Dnd5eApiClient {
    async fn list_monsters(&self) -> Result<Vec<MonsterSummary>, ApiError> {
        let response: MonsterListResponse = self.get_json(MONSTERS_PATH).await?;
        Ok(response.results)
    }

    async fn monster_detail(&self, path: &str) -> Result<MonsterDetail, ApiError> {
        self.get_json(path).await
    }
}

/// Wire envelope of the collection endpoint.
#[derive(Debug, Deserialize)]
struct MonsterListResponse {
    results: Vec<MonsterSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = Dnd5eApiClient::new("https://api.example.test/");
        assert_eq!(client.base_url(), "https://api.example.test");
    }

    #[test]
    fn list_envelope_deserializes() {
        let envelope: MonsterListResponse = serde_json::from_str(
            r#"{"count": 1, "results": [{"name": "Goblin", "url": "/api/monsters/goblin"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.results.len(), 1);
        assert_eq!(envelope.results[0].name, "Goblin");
    }
}
