//! EfficientIP SOLIDserver provider implementation

pub mod client;
pub mod error;
pub mod provider;
pub mod types;


pub use client::{ServerConfig, SolidServerApi, SolidServerClient};
pub use error::{EfficientIpError, map_error};
pub use provider::{EfficientIpProvider, ZoneAuth};
// --- DNSProvider trait implementation for EfficientIpProvider ---
use crate::core::endpoint::{Changes, Endpoint};
use crate::core::filter::DomainFilter;
use crate::core::provider::DNSProvider;
use crate::error::Error;
use async_trait::async_trait;

#[async_trait]
impl DNSProvider for EfficientIpProvider {
    fn name(&self) -> &str {
        "efficientip"
    }

    fn domain_filter(&self) -> &DomainFilter {
        &self.domain_filter
    }

    async fn records(&self) -> Result<Vec<Endpoint>, Error> {
        EfficientIpProvider::records(self).await.map_err(map_error)
    }

    async fn apply_changes(&self, changes: &Changes) -> Result<(), Error> {
        EfficientIpProvider::apply_changes(self, changes).await;
        Ok(())
    }
}
