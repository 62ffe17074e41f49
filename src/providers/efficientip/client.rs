use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use crate::providers::efficientip::error::EfficientIpError;
use crate::providers::efficientip::types::*;

#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub ssl_verify: bool,
}

impl ServerConfig {
    pub fn base_url(&self) -> String {
        format!("https://{}:{}/api/v2.0", self.host, self.port)
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ssl_verify", &self.ssl_verify)
            .finish()
    }
}

/// The four appliance calls the provider relies on.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SolidServerApi: Send + Sync {
    async fn list_zones(&self) -> Result<Vec<DnsZone>, EfficientIpError>;
    /// Records of one zone, ordered by full record name.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRr>, EfficientIpError>;
    async fn add_record(&self, input: &RrAddInput) -> Result<(), EfficientIpError>;
    async fn delete_record(&self, input: &RrDeleteInput) -> Result<(), EfficientIpError>;
}

pub struct SolidServerClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl SolidServerClient {
    pub fn new(config: &ServerConfig) -> Result<Self, EfficientIpError> {
        Self::with_base_url(config, config.base_url())
    }

    pub fn with_base_url(
        config: &ServerConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, EfficientIpError> {
        if config.host.trim().is_empty() {
            return Err(EfficientIpError::InvalidInput(
                "SOLIDserver host is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(!config.ssl_verify)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn handle_request<T>(&self, req: RequestBuilder) -> Result<Vec<T>, EfficientIpError>
    where
        T: DeserializeOwned,
    {
        let response = req
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        // Empty result sets come back without a body.
        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let body = response.bytes().await?;
        if !status.is_success() {
            let failure: ApiFailure = serde_json::from_slice(&body).unwrap_or_default();
            return Err(EfficientIpError::from_failure(status, failure));
        }

        let parsed: ApiResponse<T> = serde_json::from_slice(&body)?;
        if !parsed.success {
            let failure: ApiFailure = serde_json::from_slice(&body).unwrap_or_default();
            return Err(EfficientIpError::from_failure(status, failure));
        }
        Ok(parsed.data)
    }
}

#[async_trait]
impl SolidServerApi for SolidServerClient {
    async fn list_zones(&self) -> Result<Vec<DnsZone>, EfficientIpError> {
        let url = self.url("dns/zone/list");
        self.handle_request(self.client.get(url)).await
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRr>, EfficientIpError> {
        let url = self.url("dns/rr/list");
        let query = [
            ("WHERE", format!("zone_id={zone_id}")),
            ("ORDERBY", "rr_full_name".to_string()),
        ];
        self.handle_request(self.client.get(url).query(&query))
            .await
    }

    async fn add_record(&self, input: &RrAddInput) -> Result<(), EfficientIpError> {
        let url = self.url("dns/rr/add");
        self.handle_request::<serde_json::Value>(self.client.post(url).json(input))
            .await
            .map(|_| ())
    }

    async fn delete_record(&self, input: &RrDeleteInput) -> Result<(), EfficientIpError> {
        let url = self.url("dns/rr/delete");
        self.handle_request::<serde_json::Value>(self.client.delete(url).query(input))
            .await
            .map(|_| ())
    }
}
