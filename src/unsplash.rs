use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Photo, SearchResponse};

/// Client for the Unsplash REST API. Every request carries the
/// `Authorization: Client-ID <key>` header.
#[derive(Clone)]
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    client_id: String,
}

impl UnsplashClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
        }
    }

    pub async fn random_photo(&self) -> AppResult<Photo> {
        self.get_json("/photos/random", &[]).await
    }

    pub async fn search_photos(&self, query: &str) -> AppResult<SearchResponse> {
        self.get_json("/search/photos", &[("query", query)]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Requesting Unsplash API");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Authorization", format!("Client-ID {}", self.client_id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, %status, %body, "Unsplash API request failed");
            // Unsplash reports errors as JSON; anything else is wrapped
            // as a plain string payload so it still renders verbatim.
            let payload = serde_json::from_str::<Value>(&body)
                .unwrap_or_else(|_| Value::String(format!("{}: {}", status, body)));
            return Err(AppError::Upstream(payload));
        }

        Ok(response.json().await?)
    }
}
