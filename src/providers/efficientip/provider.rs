use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Config;
use crate::core::endpoint::{Changes, Endpoint, RECORD_TYPE_A, RECORD_TYPE_TXT};
use crate::core::filter::{DomainFilter, ZoneIdFilter};
use crate::core::logging::Logger;
use crate::providers::efficientip::client::SolidServerApi;
use crate::providers::efficientip::error::EfficientIpError;
use crate::providers::efficientip::types::{DnsZone, RrAddInput, RrDeleteInput};

/// A zone the provider is allowed to manage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneAuth {
    pub name: String,
    pub zone_type: String,
    pub id: String,
}

impl From<&DnsZone> for ZoneAuth {
    fn from(zone: &DnsZone) -> Self {
        Self {
            name: zone.zone_name.clone(),
            zone_type: zone.zone_type.clone(),
            id: zone.zone_id.clone(),
        }
    }
}

pub struct EfficientIpProvider {
    pub(crate) domain_filter: DomainFilter,
    zone_id_filter: ZoneIdFilter,
    dry_run: bool,
    api: Arc<dyn SolidServerApi>,
    logger: Arc<dyn Logger>,
}

impl EfficientIpProvider {
    pub fn new(
        domain_filter: DomainFilter,
        zone_id_filter: ZoneIdFilter,
        dry_run: bool,
        api: Arc<dyn SolidServerApi>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            domain_filter,
            zone_id_filter,
            dry_run,
            api,
            logger,
        }
    }

    pub fn from_config(
        config: &Config,
        api: Arc<dyn SolidServerApi>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self::new(
            config.domain_filter(),
            config.zone_id_filter(),
            config.dry_run,
            api,
            logger,
        )
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub async fn zones(&self) -> Result<Vec<ZoneAuth>, EfficientIpError> {
        let zones = self.api.list_zones().await?;

        let mut result = Vec::new();
        for zone in &zones {
            if !self.domain_filter.matches(&zone.zone_name) {
                self.logger
                    .debug(&format!("Ignore zone [{}] by domainFilter", zone.zone_name));
                continue;
            }
            if !self.zone_id_filter.matches(&zone.zone_id) {
                self.logger.debug(&format!(
                    "Ignore zone [{}][{}] by zoneIDFilter",
                    zone.zone_name, zone.zone_id
                ));
                continue;
            }
            result.push(ZoneAuth::from(zone));
        }
        Ok(result)
    }

    pub async fn records(&self) -> Result<Vec<Endpoint>, EfficientIpError> {
        self.logger.debug("Get Record list from EfficientIP SOLIDserver");

        let zones = self.zones().await.inspect_err(|_| {
            self.logger.error("Failed to get Zone list from EfficientIP SOLIDserver");
        })?;

        let mut endpoints = Vec::new();
        for zone in &zones {
            let records = self.api.list_records(&zone.id).await.inspect_err(|_| {
                self.logger.error(&format!("Failed to get RRs for zone [{}]", zone.name));
            })?;

            // A records sharing a name become one endpoint with several targets.
            let mut hosts: BTreeMap<String, Endpoint> = BTreeMap::new();
            for rr in &records {
                self.logger.debug(&format!(
                    "Found {} Record : {} -> {}",
                    rr.rr_type, rr.rr_full_name, rr.rr_all_value
                ));
                match rr.rr_type.as_str() {
                    RECORD_TYPE_A => {
                        let key = format!("{}:{}", rr.rr_full_name, rr.rr_type);
                        hosts
                            .entry(key)
                            .and_modify(|ep| ep.targets.push(rr.rr_all_value.clone()))
                            .or_insert_with(|| {
                                Endpoint::new_with_ttl(
                                    &rr.rr_full_name,
                                    RECORD_TYPE_A,
                                    rr.ttl(),
                                    [&rr.rr_all_value],
                                )
                            });
                    }
                    RECORD_TYPE_TXT => endpoints.push(Endpoint::new_with_ttl(
                        &rr.rr_full_name,
                        RECORD_TYPE_TXT,
                        rr.ttl(),
                        [&rr.rr_all_value],
                    )),
                    other => endpoints.push(Endpoint::new_with_ttl(
                        &rr.rr_full_name,
                        other,
                        rr.ttl(),
                        [&rr.rr_all_value],
                    )),
                }
            }
            endpoints.extend(hosts.into_values());
        }

        Ok(endpoints)
    }

    /// Issues one delete per target. Failures are logged, never returned.
    pub async fn delete_changes(&self, change: &Endpoint) {
        for value in &change.targets {
            if self.dry_run {
                self.logger.info(&format!(
                    "Would delete {} record named '{}' to '{}' for Efficientip",
                    change.record_type, change.dns_name, value
                ));
                continue;
            }

            self.logger.info(&format!(
                "Deleting {} record named '{}' to '{}' for Efficientip",
                change.record_type, change.dns_name, value
            ));

            let input = RrDeleteInput {
                rr_name: change.dns_name.clone(),
                rr_type: change.record_type.clone(),
                rr_value1: value.clone(),
            };
            if let Err(e) = self.api.delete_record(&input).await {
                self.logger.error(&format!(
                    "Deletion of the RR {} {} -> {} : failed! {e}",
                    change.record_type, change.dns_name, value
                ));
            }
        }
    }

    /// Issues one create per target. Failures are logged, never returned.
    pub async fn create_changes(&self, change: &Endpoint) {
        let ttl = i32::try_from(change.ttl).unwrap_or(i32::MAX);
        for value in &change.targets {
            if self.dry_run {
                self.logger.info(&format!(
                    "Would create {} record named '{}' to '{}' for Efficientip",
                    change.record_type, change.dns_name, value
                ));
                continue;
            }

            self.logger.info(&format!(
                "Creating {} record named '{}' to '{}' for Efficientip",
                change.record_type, change.dns_name, value
            ));

            let input = RrAddInput {
                rr_name: change.dns_name.clone(),
                rr_type: change.record_type.clone(),
                rr_ttl: ttl,
                rr_value1: value.clone(),
            };
            if let Err(e) = self.api.add_record(&input).await {
                self.logger.error(&format!(
                    "Creation of the RR {} {} [{}] -> {} : failed! {e}",
                    change.record_type, change.dns_name, ttl, value
                ));
            }
        }
    }

    /// Updates become delete-old then create-new; the appliance has no
    /// atomic replace.
    pub async fn apply_changes(&self, changes: &Changes) {
        for change in &changes.delete {
            self.delete_changes(change).await;
        }
        for change in &changes.update_old {
            self.delete_changes(change).await;
        }
        for change in &changes.update_new {
            self.create_changes(change).await;
        }
        for change in &changes.create {
            self.create_changes(change).await;
        }
    }
}
