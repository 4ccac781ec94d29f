use async_trait::async_trait;

use super::{Executed, Statement};
use crate::exception::InventoryResult;

/// Transactional storage backing the inventory.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Start a transaction. Nothing it executes is visible to other transactions until commit.
    async fn begin(&self) -> InventoryResult<Box<dyn InventoryTransaction>>;

    /// Start a transaction that only runs queries. Read-only transactions may run alongside
    /// each other but never alongside a writing one.
    async fn begin_read(&self) -> InventoryResult<Box<dyn InventoryTransaction>>;
}

/// A scoped transaction.
///
/// Dropping a transaction without committing it rolls it back.
#[async_trait]
pub trait InventoryTransaction: Send {
    /// Execute one statement. A failed statement leaves no effect behind, but the caller is
    /// expected to roll the whole transaction back.
    async fn execute(&mut self, statement: Statement) -> InventoryResult<Executed>;

    async fn commit(self: Box<Self>) -> InventoryResult<()>;

    async fn rollback(self: Box<Self>) -> InventoryResult<()>;
}
