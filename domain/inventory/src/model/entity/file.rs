use serde::{Deserialize, Serialize};

use crate::exception::{InventoryException, InventoryResult};

/// A file tracked by the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// File id, positive.
    pub id: i64,
    /// File type, e.g. `pdf`.
    #[serde(rename = "type")]
    pub file_type: String,
    /// Size in the same unit as disk free space.
    pub size: i64,
}

impl File {
    pub fn new(id: i64, file_type: impl Into<String>, size: i64) -> Self {
        Self {
            id,
            file_type: file_type.into(),
            size,
        }
    }

    /// Domain-value constraints of a file row.
    pub fn check(&self) -> InventoryResult<()> {
        if self.id <= 0 {
            return Err(InventoryException::CheckViolation {
                constraint: "file_id > 0",
            });
        }
        if self.file_type.is_empty() {
            return Err(InventoryException::NotNullViolation { column: "type" });
        }
        if self.size < 0 {
            return Err(InventoryException::CheckViolation {
                constraint: "size >= 0",
            });
        }
        Ok(())
    }
}
