use crate::core::endpoint::{Changes, Endpoint};
use crate::core::filter::DomainFilter;
use crate::error::Error;
use async_trait::async_trait;

/// What the reconciliation controller needs from a DNS backend.
#[async_trait]
pub trait DNSProvider: Send + Sync {
    fn name(&self) -> &str;

    fn domain_filter(&self) -> &DomainFilter;

    async fn records(&self) -> Result<Vec<Endpoint>, Error>;

    async fn apply_changes(&self, changes: &Changes) -> Result<(), Error>;

    fn property_values_equal(&self, _name: &str, previous: &str, current: &str) -> bool {
        previous == current
    }

    fn adjust_endpoints(&self, endpoints: Vec<Endpoint>) -> Vec<Endpoint> {
        endpoints
    }
}
