use async_trait::async_trait;

/// Read-only reports over the inventory.
///
/// None of these fail: an internal error degrades to a neutral value.
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    async fn average_file_size_on_disk(&self, disk_id: i64) -> f64;
    async fn disk_total_ram(&self, disk_id: i64) -> i64;
    async fn get_cost_for_type(&self, file_type: &str) -> i64;
    async fn get_files_can_be_added_to_disk(&self, disk_id: i64) -> Vec<i64>;
    async fn get_files_can_be_added_to_disk_and_ram(&self, disk_id: i64) -> Vec<i64>;
    async fn is_company_exclusive(&self, disk_id: i64) -> bool;
    async fn get_conflicting_disks(&self) -> Vec<i64>;
    async fn most_available_disks(&self) -> Vec<i64>;
    async fn get_close_files(&self, file_id: i64) -> Vec<i64>;
}
