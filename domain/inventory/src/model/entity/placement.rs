use serde::{Deserialize, Serialize};

/// Records that a file resides on a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePlacement {
    pub file_id: i64,
    pub disk_id: i64,
}

/// Records that a RAM module is attached to a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamPlacement {
    pub ram_id: i64,
    pub disk_id: i64,
}

impl FilePlacement {
    pub fn new(file_id: i64, disk_id: i64) -> Self {
        Self { file_id, disk_id }
    }
}

impl RamPlacement {
    pub fn new(ram_id: i64, disk_id: i64) -> Self {
        Self { ram_id, disk_id }
    }
}
