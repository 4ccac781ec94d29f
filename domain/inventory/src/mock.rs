use crate::{
    exception::InventoryResult,
    repository::{InventoryStore, InventoryTransaction},
};
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub InventoryStore {}
    #[async_trait]
    impl InventoryStore for InventoryStore {
        async fn begin(&self) -> InventoryResult<Box<dyn InventoryTransaction>>;
        async fn begin_read(&self) -> InventoryResult<Box<dyn InventoryTransaction>>;
    }
}
