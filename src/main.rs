use std::env;
use std::sync::Arc;

use efficientip_dns::config::Config;
use efficientip_dns::core::endpoint::Changes;
use efficientip_dns::core::logging::TracingLogger;
use efficientip_dns::core::provider::DNSProvider;
use efficientip_dns::providers::efficientip::{EfficientIpProvider, SolidServerClient, map_error};
use tracing::{error, info};

fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::from_env()?;
    let client = SolidServerClient::new(&config.server).map_err(map_error)?;
    let provider =
        EfficientIpProvider::from_config(&config, Arc::new(client), Arc::new(TracingLogger));

    info!(
        provider = provider.name(),
        host = %config.server.host,
        dry_run = config.dry_run,
        "Provider ready"
    );
    if provider.domain_filter().is_configured() {
        info!(
            filters = ?config.domain_filter,
            exclude = ?config.exclude_domains,
            regex = ?config.regex_domain_filter.as_ref().map(|r| r.as_str()),
            regex_exclusion = ?config.regex_domain_exclusion.as_ref().map(|r| r.as_str()),
            "Domain filter active"
        );
    }
    if config.zone_id_filter().is_configured() {
        info!(zone_ids = ?config.zone_id_filter, "Zone ID filter active");
    }

    // Optional plan file: apply it before listing what the appliance holds.
    if let Some(path) = env::args().nth(1) {
        let raw = tokio::fs::read_to_string(&path).await?;
        let changes: Changes = serde_json::from_str(&raw)?;
        if changes.is_empty() {
            info!("Plan {} is empty, nothing to apply", path);
        } else {
            DNSProvider::apply_changes(&provider, &changes).await?;
        }
    }

    let endpoints = match DNSProvider::records(&provider).await {
        Ok(endpoints) => endpoints,
        Err(e) => {
            error!("Failed to list records: {}", e);
            return Err(e.into());
        }
    };
    let endpoints = provider.adjust_endpoints(endpoints);
    info!("Found {} endpoints", endpoints.len());
    println!("{}", serde_json::to_string_pretty(&endpoints)?);

    Ok(())
}
