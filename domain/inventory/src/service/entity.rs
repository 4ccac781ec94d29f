use async_trait::async_trait;

use crate::model::{
    entity::{Disk, File, Ram},
    vo::Status,
};

/// Create, read and delete inventory entities.
#[async_trait]
pub trait EntityService: Send + Sync {
    async fn add_file(&self, file: &File) -> Status;
    /// `None` when no file has that id.
    async fn get_file_by_id(&self, file_id: i64) -> Option<File>;
    /// Delete the file together with its placements, returning its size to every disk it was on.
    async fn delete_file(&self, file: &File) -> Status;

    async fn add_disk(&self, disk: &Disk) -> Status;
    async fn get_disk_by_id(&self, disk_id: i64) -> Option<Disk>;
    async fn delete_disk(&self, disk_id: i64) -> Status;

    async fn add_ram(&self, ram: &Ram) -> Status;
    async fn get_ram_by_id(&self, ram_id: i64) -> Option<Ram>;
    async fn delete_ram(&self, ram_id: i64) -> Status;

    /// Insert both rows or neither.
    async fn add_disk_and_file(&self, disk: &Disk, file: &File) -> Status;
}
