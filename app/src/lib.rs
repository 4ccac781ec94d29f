pub mod config;
mod service_provider;
pub mod telemetry;

#[rustfmt::skip]
pub use {
    service_provider::ServiceProvider,
    config::{build_config, InventoryConfig},
};

use std::path::Path;

/// Read the layered configuration, install logging and build the services.
pub fn bootstrap(path: Option<&Path>) -> anyhow::Result<ServiceProvider> {
    let config = InventoryConfig::load(&build_config(path)?)?;
    telemetry::initialize_telemetry(config.telemetry())?;
    tracing::info!("Inventory configuration loaded: {config:?}");
    Ok(ServiceProvider::build(config))
}
