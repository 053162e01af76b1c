//! Application configuration loaded from an optional `hairfit.toml`.

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::error::AppError;

/// Name of the optional per-directory configuration file.
pub const CONFIG_FILE: &str = "hairfit.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Image-generation API settings.
    #[serde(default)]
    pub image: ImageApiConfig,
}

impl AppConfig {
    /// Load configuration from `hairfit.toml` in the given directory.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(dir: &Path) -> Result<AppConfig, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Image-generation API configuration.
///
/// The API key is never read from configuration; it comes only from the
/// `OPENAI_API_KEY` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageApiConfig {
    /// Image-generation endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Number of images to request.
    #[serde(default = "default_image_count")]
    pub image_count: u32,
    /// Requested image resolution, e.g. "512x512".
    #[serde(default = "default_image_size")]
    pub image_size: String,
}

impl Default for ImageApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            image_count: default_image_count(),
            image_size: default_image_size(),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/images/generations")
        .expect("default API URL is valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_image_count() -> u32 {
    1
}

fn default_image_size() -> String {
    "512x512".to_string()
}
