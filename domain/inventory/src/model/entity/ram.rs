use serde::{Deserialize, Serialize};

use crate::exception::{InventoryException, InventoryResult};

/// A memory module that can be attached to disks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ram {
    pub id: i64,
    pub company: String,
    pub size: i64,
}

impl Ram {
    pub fn new(id: i64, company: impl Into<String>, size: i64) -> Self {
        Self {
            id,
            company: company.into(),
            size,
        }
    }

    pub fn check(&self) -> InventoryResult<()> {
        if self.id <= 0 {
            return Err(InventoryException::CheckViolation {
                constraint: "ram_id > 0",
            });
        }
        if self.size <= 0 {
            return Err(InventoryException::CheckViolation {
                constraint: "size > 0",
            });
        }
        Ok(())
    }
}
