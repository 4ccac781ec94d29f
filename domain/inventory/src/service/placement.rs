use async_trait::async_trait;

use crate::model::{entity::File, vo::Status};

/// Place files and RAM modules on disks.
///
/// File placement consumes the disk's free space; RAM placement does not.
#[async_trait]
pub trait PlacementService: Send + Sync {
    async fn add_file_to_disk(&self, file: &File, disk_id: i64) -> Status;
    /// Removing a file that is not on the disk is a no-op reporting [`Status::Ok`].
    async fn remove_file_from_disk(&self, file: &File, disk_id: i64) -> Status;
    async fn add_ram_to_disk(&self, ram_id: i64, disk_id: i64) -> Status;
    async fn remove_ram_from_disk(&self, ram_id: i64, disk_id: i64) -> Status;
}
