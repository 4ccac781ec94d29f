use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::anyhow;
use async_trait::async_trait;
use domain_inventory::{
    exception::{InventoryException, InventoryResult},
    repository::{Executed, InventoryStore, InventoryTransaction, Statement},
};
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

use crate::tables::Tables;

/// Inventory store kept in process memory.
///
/// A writing transaction holds the store lock exclusively from `begin` until it is committed,
/// rolled back or dropped, so writers are serialized and nobody observes uncommitted changes.
/// Read-only transactions share the lock with each other.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    closed: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every later `begin` with [`InventoryException::ConnectionInvalid`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::Relaxed);
    }

    fn ensure_open(&self) -> InventoryResult<()> {
        if self.closed.load(Ordering::Relaxed) {
            return Err(InventoryException::ConnectionInvalid {
                reason: "memory store is closed".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn begin(&self) -> InventoryResult<Box<dyn InventoryTransaction>> {
        self.ensure_open()?;
        let guard = self.tables.clone().write_owned().await;
        Ok(Box::new(MemoryTransaction {
            guard,
            working: None,
            pending: 0,
        }))
    }

    async fn begin_read(&self) -> InventoryResult<Box<dyn InventoryTransaction>> {
        self.ensure_open()?;
        let guard = self.tables.clone().read_owned().await;
        Ok(Box::new(MemoryReadTransaction { guard }))
    }
}

/// Writing transaction over a [`MemoryStore`].
///
/// Writes go to a copy of the tables taken on the first write; commit publishes the copy.
pub struct MemoryTransaction {
    guard: OwnedRwLockWriteGuard<Tables>,
    working: Option<Tables>,
    pending: usize,
}

impl MemoryTransaction {
    fn tables(&self) -> &Tables {
        self.working.as_ref().unwrap_or(&*self.guard)
    }

    fn tables_mut(&mut self) -> &mut Tables {
        let guard = &self.guard;
        self.working.get_or_insert_with(|| Tables::clone(&**guard))
    }
}

#[async_trait]
impl InventoryTransaction for MemoryTransaction {
    async fn execute(&mut self, statement: Statement) -> InventoryResult<Executed> {
        if statement.is_read_only() {
            return self.tables().select(&statement);
        }
        let executed = self.tables_mut().apply(statement)?;
        self.pending += 1;
        Ok(executed)
    }

    async fn commit(mut self: Box<Self>) -> InventoryResult<()> {
        if let Some(working) = self.working.take() {
            *self.guard = working;
        }
        self.pending = 0;
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> InventoryResult<()> {
        self.working = None;
        self.pending = 0;
        Ok(())
    }
}

impl Drop for MemoryTransaction {
    fn drop(&mut self) {
        if self.pending > 0 {
            tracing::trace!("Discarding {} uncommitted statements.", self.pending);
        }
    }
}

/// Read-only transaction over a [`MemoryStore`]. Write statements are refused.
pub struct MemoryReadTransaction {
    guard: OwnedRwLockReadGuard<Tables>,
}

#[async_trait]
impl InventoryTransaction for MemoryReadTransaction {
    async fn execute(&mut self, statement: Statement) -> InventoryResult<Executed> {
        if !statement.is_read_only() {
            return Err(anyhow!("Statement: {statement:?} in a read-only transaction.").into());
        }
        self.guard.select(&statement)
    }

    async fn commit(self: Box<Self>) -> InventoryResult<()> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> InventoryResult<()> {
        Ok(())
    }
}
