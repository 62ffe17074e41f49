pub mod endpoint;
pub mod filter;
pub mod logging;
pub mod provider;
