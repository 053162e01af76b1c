//! Image-generation API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ImageApiConfig};
use crate::ports::{ImageClient, ImageRef, ImageRequest};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// HTTP client for the image-generation API.
///
/// Deliberately single-shot: a failed request surfaces immediately as an
/// `ImageService` error for the caller to present.
#[derive(Clone)]
pub struct HttpImageClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpImageClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ImageApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    ///
    /// A missing credential is a precondition failure before any request is
    /// attempted.
    pub fn from_env_with_config(config: &ImageApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            AppError::config_error(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    prompt: String,
    n: u32,
    size: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    url: String,
}

impl ImageClient for HttpImageClient {
    fn generate(&self, request: ImageRequest) -> Result<ImageRef, AppError> {
        let api_request =
            ApiRequest { prompt: request.prompt, n: request.count, size: request.size };

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| AppError::ImageService(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let api_response: ApiResponse = response
                .json()
                .map_err(|e| AppError::ImageService(format!("Failed to parse response: {}", e)))?;

            let first = api_response
                .data
                .into_iter()
                .next()
                .ok_or_else(|| AppError::ImageService("Response contained no images".into()))?;
            Ok(ImageRef { url: first.url })
        } else if status.as_u16() == 401 {
            Err(AppError::ImageService("Authentication rejected (401)".into()))
        } else if status.as_u16() == 429 {
            Err(AppError::ImageService("Rate limited (429)".into()))
        } else if status.is_server_error() {
            Err(AppError::ImageService(format!("Server error ({})", status.as_u16())))
        } else {
            let body = response.text().unwrap_or_default();
            Err(AppError::ImageService(format!("Request failed ({}): {}", status.as_u16(), body)))
        }
    }
}
