//! DNS provider that syncs zones and records held on an EfficientIP
//! SOLIDserver appliance with a record reconciliation controller.

pub mod config;
pub mod core;
pub mod error;
pub mod providers;
