use std::sync::Arc;

use async_trait::async_trait;
use domain_inventory::{
    exception::InventoryResult,
    model::{
        entity::{Disk, File, Ram},
        vo::Status,
    },
    repository::{Executed, InventoryStore, InventoryTransaction, Statement},
    service::EntityService,
};
use typed_builder::TypedBuilder;

use crate::transaction::{execute_all, finish};

#[derive(TypedBuilder)]
pub struct EntityServiceImpl {
    store: Arc<dyn InventoryStore>,
    /// Report [`Status::NotExists`] when deleting a file that is not stored.
    ///
    /// Off by default, in which case deleting an absent file reports [`Status::Ok`].
    #[builder(default)]
    strict_file_delete: bool,
}

impl EntityServiceImpl {
    async fn insert(&self, what: &str, statements: Vec<Statement>) -> Status {
        let status = execute_all(self.store.as_ref(), statements).await.unwrap_or_else(|e| {
            tracing::warn!("Adding {what} failed: {e}");
            Status::from(&e)
        });
        if status.is_ok() {
            tracing::debug!("Added {what}.");
        }
        status
    }

    async fn select(&self, statement: Statement) -> InventoryResult<Executed> {
        let mut tx = self.store.begin_read().await?;
        let selected = tx.execute(statement).await;
        tx.rollback().await?;
        selected
    }

    async fn delete(&self, what: &str, statement: Statement) -> Status {
        log_deletion(what, self.delete_row(statement).await)
    }

    async fn delete_row(&self, statement: Statement) -> InventoryResult<Status> {
        let mut tx = self.store.begin().await?;
        let deleted = tx.execute(statement).await.map(|executed| match executed.rows_affected {
            0 => Status::NotExists,
            _ => Status::Ok,
        });
        finish(tx, deleted).await
    }

    async fn delete_stored_file(&self, file_id: i64) -> InventoryResult<Status> {
        let mut tx = self.store.begin().await?;
        let deleted = delete_file_in(tx.as_mut(), file_id, self.strict_file_delete).await;
        finish(tx, deleted).await
    }
}

fn log_deletion(what: &str, outcome: InventoryResult<Status>) -> Status {
    match outcome {
        Ok(status) => {
            tracing::debug!("Deleting {what}: {status:?}.");
            status
        }
        Err(e) => {
            tracing::warn!("Deleting {what} failed: {e}");
            Status::from(&e)
        }
    }
}

/// Return the file's size to every disk it is placed on, then delete it.
async fn delete_file_in(
    tx: &mut dyn InventoryTransaction,
    file_id: i64,
    strict: bool,
) -> InventoryResult<Status> {
    let stored = tx.execute(Statement::SelectFile { id: file_id }).await?.into_files();
    let Some(stored) = stored.into_iter().next() else {
        return Ok(if strict { Status::NotExists } else { Status::Ok });
    };
    let placements = tx
        .execute(Statement::SelectFilePlacements {
            file_id: Some(file_id),
            disk_id: None,
        })
        .await?
        .into_file_placements();
    for placement in placements {
        tx.execute(Statement::AdjustFreeSpace {
            disk_id: placement.disk_id,
            delta: stored.size,
        })
        .await?;
    }
    tx.execute(Statement::DeleteFile { id: file_id }).await?;
    Ok(Status::Ok)
}

#[async_trait]
impl EntityService for EntityServiceImpl {
    async fn add_file(&self, file: &File) -> Status {
        self.insert(&format!("file {}", file.id), vec![Statement::InsertFile(file.to_owned())])
            .await
    }

    async fn get_file_by_id(&self, file_id: i64) -> Option<File> {
        match self.select(Statement::SelectFile { id: file_id }).await {
            Ok(executed) => executed.into_files().into_iter().next(),
            Err(e) => {
                tracing::warn!("Reading file {file_id} failed: {e}");
                None
            }
        }
    }

    async fn delete_file(&self, file: &File) -> Status {
        let outcome = self.delete_stored_file(file.id).await;
        log_deletion(&format!("file {}", file.id), outcome)
    }

    async fn add_disk(&self, disk: &Disk) -> Status {
        self.insert(&format!("disk {}", disk.id), vec![Statement::InsertDisk(disk.to_owned())])
            .await
    }

    async fn get_disk_by_id(&self, disk_id: i64) -> Option<Disk> {
        match self.select(Statement::SelectDisk { id: disk_id }).await {
            Ok(executed) => executed.into_disks().into_iter().next(),
            Err(e) => {
                tracing::warn!("Reading disk {disk_id} failed: {e}");
                None
            }
        }
    }

    async fn delete_disk(&self, disk_id: i64) -> Status {
        self.delete(&format!("disk {disk_id}"), Statement::DeleteDisk { id: disk_id }).await
    }

    async fn add_ram(&self, ram: &Ram) -> Status {
        self.insert(&format!("ram {}", ram.id), vec![Statement::InsertRam(ram.to_owned())]).await
    }

    async fn get_ram_by_id(&self, ram_id: i64) -> Option<Ram> {
        match self.select(Statement::SelectRam { id: ram_id }).await {
            Ok(executed) => executed.into_rams().into_iter().next(),
            Err(e) => {
                tracing::warn!("Reading ram {ram_id} failed: {e}");
                None
            }
        }
    }

    async fn delete_ram(&self, ram_id: i64) -> Status {
        self.delete(&format!("ram {ram_id}"), Statement::DeleteRam { id: ram_id }).await
    }

    async fn add_disk_and_file(&self, disk: &Disk, file: &File) -> Status {
        // Value checks outrank duplicate keys whichever row carries them.
        if let Err(e) = disk.check().and_then(|_| file.check()) {
            tracing::warn!("Adding disk {} and file {} failed: {e}", disk.id, file.id);
            return Status::from(&e);
        }
        self.insert(
            &format!("disk {} and file {}", disk.id, file.id),
            vec![
                Statement::InsertDisk(disk.to_owned()),
                Statement::InsertFile(file.to_owned()),
            ],
        )
        .await
    }
}
