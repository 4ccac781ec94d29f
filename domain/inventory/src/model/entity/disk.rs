use serde::{Deserialize, Serialize};

use crate::exception::{InventoryException, InventoryResult};

/// A disk hosting files and RAM modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    /// Disk id, positive.
    pub id: i64,
    /// Manufacturer.
    pub company: String,
    pub speed: i64,
    /// Remaining capacity. Equals the capacity given at creation minus the sizes of the files
    /// currently placed on the disk.
    pub free_space: i64,
    /// Cost per unit of stored size.
    pub cost: i64,
}

impl Disk {
    pub fn new(id: i64, company: impl Into<String>, speed: i64, free_space: i64, cost: i64) -> Self {
        Self {
            id,
            company: company.into(),
            speed,
            free_space,
            cost,
        }
    }

    /// Domain-value constraints of a disk row.
    pub fn check(&self) -> InventoryResult<()> {
        let violated = if self.id <= 0 {
            "disk_id > 0"
        } else if self.speed <= 0 {
            "speed > 0"
        } else if self.free_space < 0 {
            "free_space >= 0"
        } else if self.cost <= 0 {
            "cost > 0"
        } else {
            return Ok(());
        };
        Err(InventoryException::CheckViolation {
            constraint: violated,
        })
    }
}
