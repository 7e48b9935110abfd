use std::fmt;

use futures::FutureExt;
use futures::future::BoxFuture;
use plantbender_types::{Activation, HumidityRecord, decode_records};
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::config::{ACTIVATION_ENDPOINT, ApiConfig, RECORDS_ENDPOINT};
use crate::error::{ApiError, Result};
use crate::traits::PlantApi;

/// reqwest-backed [`PlantApi`].
///
/// One `Client` (and connection pool) is shared by both endpoints.
#[derive(Clone)]
pub struct HttpPlantApi {
    client: Client,
    records_url: Url,
    activation_url: Url,
}

impl fmt::Debug for HttpPlantApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Query strings carry the access codes.
        f.debug_struct("HttpPlantApi")
            .field("records", &self.records_url.path())
            .field("activation", &self.activation_url.path())
            .finish_non_exhaustive()
    }
}

impl HttpPlantApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("plantbender/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            records_url: config.records_url()?,
            activation_url: config.activation_url()?,
        })
    }

    async fn get_records(&self) -> Result<Vec<HumidityRecord>> {
        debug!(endpoint = RECORDS_ENDPOINT, "fetching humidity records");

        let response = self.client.get(self.records_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = RECORDS_ENDPOINT, %status, "records request rejected");
            return Err(ApiError::Status(status));
        }

        let body = response.bytes().await?;
        let records = decode_records(&body)?;
        debug!(count = records.len(), "received humidity records");
        Ok(records)
    }

    async fn post_activation(&self, activation: Activation) -> Result<()> {
        debug!(endpoint = ACTIVATION_ENDPOINT, value = %activation, "sending activation");

        // The relay function expects a JSON string body: "1" or "0"
        let response = self
            .client
            .post(self.activation_url.clone())
            .json(activation.as_payload())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = ACTIVATION_ENDPOINT, %status, "activation rejected");
            return Err(ApiError::Status(status));
        }
        Ok(())
    }
}

impl PlantApi for HttpPlantApi {
    fn fetch_records(&self) -> BoxFuture<'_, Result<Vec<HumidityRecord>>> {
        self.get_records().boxed()
    }

    fn send_activation(&self, activation: Activation) -> BoxFuture<'_, Result<()>> {
        self.post_activation(activation).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_incomplete_config() {
        let err = HttpPlantApi::new(ApiConfig::default()).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_new_precomputes_urls() {
        let api = HttpPlantApi::new(ApiConfig::new("http://127.0.0.1:9/api/", "r", "w")).unwrap();
        assert_eq!(api.records_url.path(), "/api/HttpTrigger1");
        assert_eq!(api.activation_url.query(), Some("code=w"));
    }

    #[test]
    fn test_debug_hides_access_codes() {
        let config = ApiConfig::new("http://127.0.0.1:9/api/", "read-secret", "write-secret");
        let debug = format!("{:?}", HttpPlantApi::new(config).unwrap());

        assert!(debug.contains("/api/HttpTrigger1"));
        assert!(!debug.contains("read-secret"));
        assert!(!debug.contains("write-secret"));
    }
}
