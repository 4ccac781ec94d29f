use std::sync::Arc;

use domain_inventory::service::{AnalyticsService, EntityService, PlacementService};
use getset::Getters;
use infrastructure_store::MemoryStore;
use service_inventory::{AnalyticsServiceImpl, EntityServiceImpl, PlacementServiceImpl};

use crate::config::InventoryConfig;

/// Owns the store and hands out the services built on it.
#[derive(Clone, Getters)]
#[getset(get = "pub")]
pub struct ServiceProvider {
    config: InventoryConfig,
    store: Arc<MemoryStore>,
    entity_service: Arc<dyn EntityService>,
    placement_service: Arc<dyn PlacementService>,
    analytics_service: Arc<dyn AnalyticsService>,
}

impl ServiceProvider {
    pub fn build(config: InventoryConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let entity_service: Arc<dyn EntityService> = Arc::new(
            EntityServiceImpl::builder()
                .store(store.clone())
                .strict_file_delete(config.entity().strict_file_delete())
                .build(),
        );
        let placement_service: Arc<dyn PlacementService> =
            Arc::new(PlacementServiceImpl::builder().store(store.clone()).build());
        let analytics_service: Arc<dyn AnalyticsService> = Arc::new(
            AnalyticsServiceImpl::builder()
                .store(store.clone())
                .limits(config.analytics().into())
                .build(),
        );
        tracing::debug!("Inventory services built over an in-memory store.");
        Self {
            config,
            store,
            entity_service,
            placement_service,
            analytics_service,
        }
    }
}
