use std::sync::Arc;

use async_trait::async_trait;
use domain_inventory::{
    exception::{InventoryException, InventoryResult},
    model::{
        entity::{File, FilePlacement, RamPlacement},
        vo::Status,
    },
    repository::{InventoryStore, InventoryTransaction, Statement},
    service::PlacementService,
};
use typed_builder::TypedBuilder;

use crate::transaction::finish;

#[derive(TypedBuilder)]
pub struct PlacementServiceImpl {
    store: Arc<dyn InventoryStore>,
}

/// Placements tell a missing file, disk or RAM module apart from an invalid value.
fn placement_status(e: &InventoryException) -> Status {
    match e {
        InventoryException::ForeignKeyViolation { .. } => Status::NotExists,
        other => Status::from(other),
    }
}

/// Reserve the space first so an undersized disk reports bad params before any duplicate
/// placement does.
///
/// The reserved size must match the stored file, since deleting the file refunds the stored size.
async fn place_file_in(
    tx: &mut dyn InventoryTransaction,
    file: &File,
    disk_id: i64,
) -> InventoryResult<Status> {
    let reserved = tx
        .execute(Statement::AdjustFreeSpace {
            disk_id,
            delta: -file.size,
        })
        .await?;
    if reserved.rows_affected == 0 {
        return Ok(Status::NotExists);
    }
    let stored = tx.execute(Statement::SelectFile { id: file.id }).await?.into_files();
    if stored.first().is_some_and(|stored| stored.size != file.size) {
        return Ok(Status::BadParams);
    }
    tx.execute(Statement::InsertFilePlacement(FilePlacement::new(file.id, disk_id))).await?;
    Ok(Status::Ok)
}

/// Refund the stored size, which is what the placement reserved.
async fn unplace_file_in(
    tx: &mut dyn InventoryTransaction,
    file: &File,
    disk_id: i64,
) -> InventoryResult<Status> {
    let removed = tx
        .execute(Statement::DeleteFilePlacement(FilePlacement::new(file.id, disk_id)))
        .await?;
    if removed.rows_affected == 0 {
        return Ok(Status::Ok);
    }
    let stored = tx.execute(Statement::SelectFile { id: file.id }).await?.into_files();
    if let Some(stored) = stored.first() {
        tx.execute(Statement::AdjustFreeSpace {
            disk_id,
            delta: stored.size,
        })
        .await?;
    }
    Ok(Status::Ok)
}

impl PlacementServiceImpl {
    async fn place_file(&self, file: &File, disk_id: i64) -> InventoryResult<Status> {
        let mut tx = self.store.begin().await?;
        let placed = place_file_in(tx.as_mut(), file, disk_id).await;
        finish(tx, placed).await
    }

    async fn unplace_file(&self, file: &File, disk_id: i64) -> InventoryResult<Status> {
        let mut tx = self.store.begin().await?;
        let removed = unplace_file_in(tx.as_mut(), file, disk_id).await;
        finish(tx, removed).await
    }

    async fn change_ram(&self, statement: Statement) -> InventoryResult<Status> {
        let mut tx = self.store.begin().await?;
        let changed = tx.execute(statement).await.map(|executed| match executed.rows_affected {
            0 => Status::NotExists,
            _ => Status::Ok,
        });
        finish(tx, changed).await
    }
}

fn report(what: &str, outcome: InventoryResult<Status>) -> Status {
    match outcome {
        Ok(status) => {
            tracing::debug!("{what}: {status:?}.");
            status
        }
        Err(e) => {
            let status = placement_status(&e);
            tracing::warn!("{what} rolled back with {status:?}: {e}");
            status
        }
    }
}

#[async_trait]
impl PlacementService for PlacementServiceImpl {
    async fn add_file_to_disk(&self, file: &File, disk_id: i64) -> Status {
        if file.size < 0 {
            return Status::BadParams;
        }
        let outcome = self.place_file(file, disk_id).await;
        report(&format!("Placing file {} on disk {disk_id}", file.id), outcome)
    }

    async fn remove_file_from_disk(&self, file: &File, disk_id: i64) -> Status {
        if file.size < 0 {
            return Status::BadParams;
        }
        let outcome = self.unplace_file(file, disk_id).await;
        report(&format!("Removing file {} from disk {disk_id}", file.id), outcome)
    }

    async fn add_ram_to_disk(&self, ram_id: i64, disk_id: i64) -> Status {
        let outcome = self
            .change_ram(Statement::InsertRamPlacement(RamPlacement::new(ram_id, disk_id)))
            .await;
        report(&format!("Attaching ram {ram_id} to disk {disk_id}"), outcome)
    }

    async fn remove_ram_from_disk(&self, ram_id: i64, disk_id: i64) -> Status {
        let outcome = self
            .change_ram(Statement::DeleteRamPlacement(RamPlacement::new(ram_id, disk_id)))
            .await;
        report(&format!("Detaching ram {ram_id} from disk {disk_id}"), outcome)
    }
}
