use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::error::{ApiError, Result};

/// Azure Functions host the sensor uploads to.
pub const DEFAULT_BASE_URL: &str = "https://iottodb4.azurewebsites.net/api/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) const RECORDS_ENDPOINT: &str = "HttpTrigger1";
pub(crate) const ACTIVATION_ENDPOINT: &str = "HttpTrigger2";

/// Connection settings for [`crate::HttpPlantApi`].
///
/// Access codes are plain (not URL-encoded) function keys; they are appended
/// as the `code` query parameter.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub records_code: String,
    pub activation_code: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            records_code: String::new(),
            activation_code: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    pub fn new(
        base_url: impl Into<String>,
        records_code: impl Into<String>,
        activation_code: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            records_code: records_code.into(),
            activation_code: activation_code.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.base()?;
        if self.records_code.trim().is_empty() {
            return Err(ApiError::Config(
                "records access code is not configured".to_string(),
            ));
        }
        if self.activation_code.trim().is_empty() {
            return Err(ApiError::Config(
                "activation access code is not configured".to_string(),
            ));
        }
        Ok(())
    }

    pub fn records_url(&self) -> Result<Url> {
        self.endpoint(RECORDS_ENDPOINT, &self.records_code)
    }

    pub fn activation_url(&self) -> Result<Url> {
        self.endpoint(ACTIVATION_ENDPOINT, &self.activation_code)
    }

    fn base(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        // Url::join replaces the last path segment unless the base ends in '/'
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                raw,
                url.scheme()
            )));
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str, code: &str) -> Result<Url> {
        let mut url = self
            .base()?
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))?;
        url.query_pairs_mut().append_pair("code", code);
        Ok(url)
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("records_code", &mask(&self.records_code))
            .field("activation_code", &mask(&self.activation_code))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Keeps the first four characters of a secret.
pub fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{}****", visible)
}
