//! Wheel of Names Adapter - Implementation of WheelService over HTTP.
//!
//! Creates shared wheels through the `/api/v1/wheels/shared` endpoint and
//! deletes them through `/api/v1/wheels/{path}`. Every request carries the
//! account API key in the `x-api-key` header.
//!
//! # Configuration
//!
//! ```ignore
//! let config = WheelOfNamesConfig::new(api_key)
//!     .with_base_url("https://wheelofnames.com")
//!     .with_title("Clumsy Movie Night");
//!
//! let client = WheelOfNamesClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{SharedWheel, WheelService, WheelServiceError};

/// Configuration for the Wheel of Names client.
#[derive(Debug, Clone)]
pub struct WheelOfNamesConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL (default: https://wheelofnames.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Title shown on the wheel.
    pub title: String,
    /// Description shown under the title.
    pub description: String,
    /// Maximum number of names the wheel displays.
    pub max_names: u32,
    /// Share mode (`copyable` lets viewers copy and customize the wheel).
    pub share_mode: String,
}

impl WheelOfNamesConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://wheelofnames.com".to_string(),
            timeout: Duration::from_secs(30),
            title: "Clumsy Movie Night".to_string(),
            description: "First movie to 3 spins wins. Click 'Copy this Wheel' to customize."
                .to_string(),
            max_names: 50,
            share_mode: "copyable".to_string(),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the wheel title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the wheel description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the maximum number of displayed names.
    pub fn with_max_names(mut self, max_names: u32) -> Self {
        self.max_names = max_names;
        self
    }

    /// Sets the share mode.
    pub fn with_share_mode(mut self, share_mode: impl Into<String>) -> Self {
        self.share_mode = share_mode.into();
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Wheel of Names HTTP client.
pub struct WheelOfNamesClient {
    config: WheelOfNamesConfig,
    client: Client,
}

impl WheelOfNamesClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: WheelOfNamesConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn shared_url(&self) -> String {
        format!("{}/api/v1/wheels/shared", self.config.base_url)
    }

    fn wheel_url(&self, path: &str) -> String {
        format!("{}/api/v1/wheels/{}", self.config.base_url, path)
    }

    fn to_request(&self, entries: &[String]) -> SharedWheelRequest {
        SharedWheelRequest {
            wheel_config: WheelConfig {
                display_winner_dialog: true,
                description: self.config.description.clone(),
                title: self.config.title.clone(),
                allow_duplicates: true,
                max_names: self.config.max_names,
                entries: entries
                    .iter()
                    .map(|text| WheelEntry { text: text.clone() })
                    .collect(),
            },
            share_mode: self.config.share_mode.clone(),
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> WheelServiceError {
        if e.is_timeout() {
            WheelServiceError::Network(format!(
                "Timed out after {}s",
                self.config.timeout.as_secs()
            ))
        } else if e.is_connect() {
            WheelServiceError::Network(format!("Connection failed: {}", e))
        } else {
            WheelServiceError::Network(e.to_string())
        }
    }

    /// Anything but 200 is a failure.
    fn check_status(response: Response) -> Result<Response, WheelServiceError> {
        let status = response.status();
        if status == reqwest::StatusCode::OK {
            Ok(response)
        } else {
            tracing::warn!(status = status.as_u16(), "Wheel service rejected request");
            Err(WheelServiceError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl WheelService for WheelOfNamesClient {
    async fn submit(&self, entries: &[String]) -> Result<SharedWheel, WheelServiceError> {
        tracing::debug!(entries = entries.len(), "Submitting shared wheel");

        let response = self
            .client
            .post(self.shared_url())
            .header("x-api-key", self.config.api_key())
            .json(&self.to_request(entries))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let body: DataEnvelope<CreatedWheel> = Self::check_status(response)?
            .json()
            .await
            .map_err(|e| WheelServiceError::InvalidResponse(e.to_string()))?;

        Ok(SharedWheel {
            path: body.data.path,
        })
    }

    async fn list_shared(&self) -> Result<Vec<SharedWheel>, WheelServiceError> {
        let response = self
            .client
            .get(self.shared_url())
            .header("x-api-key", self.config.api_key())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let body: DataEnvelope<WheelListing> = Self::check_status(response)?
            .json()
            .await
            .map_err(|e| WheelServiceError::InvalidResponse(e.to_string()))?;

        Ok(body
            .data
            .wheels
            .into_iter()
            .map(|w| SharedWheel { path: w.path })
            .collect())
    }

    async fn delete(&self, path: &str) -> Result<(), WheelServiceError> {
        let response = self
            .client
            .delete(self.wheel_url(path))
            .header("x-api-key", self.config.api_key())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Self::check_status(response)?;
        Ok(())
    }

    fn share_url(&self, wheel: &SharedWheel) -> String {
        format!("{}/{}", self.config.base_url, wheel.path)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SharedWheelRequest {
    wheel_config: WheelConfig,
    share_mode: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WheelConfig {
    display_winner_dialog: bool,
    description: String,
    title: String,
    allow_duplicates: bool,
    max_names: u32,
    entries: Vec<WheelEntry>,
}

#[derive(Debug, Serialize)]
struct WheelEntry {
    text: String,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct CreatedWheel {
    path: String,
}

#[derive(Debug, Deserialize)]
struct WheelListing {
    #[serde(default)]
    wheels: Vec<ListedWheel>,
}

#[derive(Debug, Deserialize)]
struct ListedWheel {
    path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> WheelOfNamesClient {
        WheelOfNamesClient::new(
            WheelOfNamesConfig::new("test-key").with_base_url(server.base_url()),
        )
    }

    #[test]
    fn request_body_matches_wheel_config_shape() {
        let client = WheelOfNamesClient::new(WheelOfNamesConfig::new("k"));
        let body = serde_json::to_value(client.to_request(&["Hausu".into(), "Hausu".into()])).unwrap();

        assert_eq!(body["shareMode"], "copyable");
        assert_eq!(body["wheelConfig"]["allowDuplicates"], true);
        assert_eq!(body["wheelConfig"]["maxNames"], 50);
        assert_eq!(body["wheelConfig"]["entries"], json!([{"text": "Hausu"}, {"text": "Hausu"}]));
    }

    #[test]
    fn config_builder_trims_trailing_slash() {
        let config = WheelOfNamesConfig::new("k").with_base_url("http://localhost:9000/");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[tokio::test]
    async fn submit_returns_share_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/wheels/shared")
                .header("x-api-key", "test-key");
            then.status(200)
                .json_body(json!({"data": {"path": "abc-123"}}));
        });

        let client = client_for(&server);
        let wheel = client.submit(&["Hausu".to_string()]).await.unwrap();

        mock.assert();
        assert_eq!(wheel.path, "abc-123");
        assert_eq!(client.share_url(&wheel), format!("{}/abc-123", server.base_url()));
    }

    #[tokio::test]
    async fn submit_non_200_is_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/wheels/shared");
            then.status(500);
        });

        let result = client_for(&server).submit(&["Hausu".to_string()]).await;

        assert!(matches!(result, Err(WheelServiceError::Status(500))));
    }

    #[tokio::test]
    async fn submit_malformed_body_is_invalid_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/wheels/shared");
            then.status(200).body("not json");
        });

        let result = client_for(&server).submit(&[]).await;

        assert!(matches!(result, Err(WheelServiceError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn list_and_delete_shared_wheels() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/wheels/shared");
            then.status(200)
                .json_body(json!({"data": {"wheels": [{"path": "one"}, {"path": "two"}]}}));
        });
        let delete_one = server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/wheels/one");
            then.status(200);
        });

        let client = client_for(&server);
        let wheels = client.list_shared().await.unwrap();
        client.delete("one").await.unwrap();

        assert_eq!(wheels.len(), 2);
        assert_eq!(wheels[1].path, "two");
        delete_one.assert();
    }
}
