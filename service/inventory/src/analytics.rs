use std::sync::Arc;

use async_trait::async_trait;
use domain_inventory::{
    exception::InventoryResult,
    repository::{InventoryStore, InventoryTransaction, Statement},
    service::AnalyticsService,
};
use typed_builder::TypedBuilder;

use crate::report::{Inventory, ReportLimits};

#[derive(TypedBuilder)]
pub struct AnalyticsServiceImpl {
    store: Arc<dyn InventoryStore>,
    #[builder(default)]
    limits: ReportLimits,
}

async fn read_inventory(tx: &mut dyn InventoryTransaction) -> InventoryResult<Inventory> {
    let files = tx.execute(Statement::SelectFiles).await?.into_files();
    let disks = tx.execute(Statement::SelectDisks).await?.into_disks();
    let rams = tx.execute(Statement::SelectRams).await?.into_rams();
    let file_placements = tx
        .execute(Statement::SelectFilePlacements {
            file_id: None,
            disk_id: None,
        })
        .await?
        .into_file_placements();
    let ram_placements = tx
        .execute(Statement::SelectRamPlacements { disk_id: None })
        .await?
        .into_ram_placements();
    Ok(Inventory::new(files, disks, rams, file_placements, ram_placements))
}

impl AnalyticsServiceImpl {
    async fn load(&self) -> InventoryResult<Inventory> {
        let mut tx = self.store.begin_read().await?;
        let inventory = read_inventory(tx.as_mut()).await;
        tx.rollback().await?;
        inventory
    }

    /// Run `query` over the committed inventory, or return `neutral` if it cannot be read.
    async fn report<T, F>(&self, name: &str, neutral: T, query: F) -> T
    where
        F: FnOnce(&Inventory) -> T,
    {
        match self.load().await {
            Ok(inventory) => query(&inventory),
            Err(e) => {
                tracing::warn!("{name} fell back to its neutral value: {e}");
                neutral
            }
        }
    }
}

#[async_trait]
impl AnalyticsService for AnalyticsServiceImpl {
    async fn average_file_size_on_disk(&self, disk_id: i64) -> f64 {
        self.report("average_file_size_on_disk", 0.0, |inventory| {
            inventory.average_file_size_on_disk(disk_id)
        })
        .await
    }

    async fn disk_total_ram(&self, disk_id: i64) -> i64 {
        self.report("disk_total_ram", 0, |inventory| inventory.disk_total_ram(disk_id)).await
    }

    async fn get_cost_for_type(&self, file_type: &str) -> i64 {
        self.report("get_cost_for_type", 0, |inventory| inventory.cost_for_type(file_type))
            .await
    }

    async fn get_files_can_be_added_to_disk(&self, disk_id: i64) -> Vec<i64> {
        let limit = self.limits.files;
        self.report("get_files_can_be_added_to_disk", vec![], |inventory| {
            inventory.files_can_be_added_to_disk(disk_id, limit)
        })
        .await
    }

    async fn get_files_can_be_added_to_disk_and_ram(&self, disk_id: i64) -> Vec<i64> {
        let limit = self.limits.files;
        self.report("get_files_can_be_added_to_disk_and_ram", vec![], |inventory| {
            inventory.files_can_be_added_to_disk_and_ram(disk_id, limit)
        })
        .await
    }

    async fn is_company_exclusive(&self, disk_id: i64) -> bool {
        self.report("is_company_exclusive", true, |inventory| {
            inventory.is_company_exclusive(disk_id)
        })
        .await
    }

    async fn get_conflicting_disks(&self) -> Vec<i64> {
        self.report("get_conflicting_disks", vec![], Inventory::conflicting_disks).await
    }

    async fn most_available_disks(&self) -> Vec<i64> {
        let limit = self.limits.disks;
        self.report("most_available_disks", vec![], |inventory| {
            inventory.most_available_disks(limit)
        })
        .await
    }

    async fn get_close_files(&self, file_id: i64) -> Vec<i64> {
        let limit = self.limits.close_files;
        self.report("get_close_files", vec![], |inventory| inventory.close_files(file_id, limit))
            .await
    }
}
