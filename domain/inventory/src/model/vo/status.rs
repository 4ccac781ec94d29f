use serde::{Deserialize, Serialize};

use crate::exception::InventoryException;

/// Outcome of a mutating inventory operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Error,
    BadParams,
    AlreadyExists,
    NotExists,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl From<&InventoryException> for Status {
    fn from(e: &InventoryException) -> Self {
        use InventoryException::*;
        match e {
            ConnectionInvalid { .. } => Status::Error,
            NotNullViolation { .. } | CheckViolation { .. } => Status::BadParams,
            UniqueViolation { .. } => Status::AlreadyExists,
            ForeignKeyViolation { .. } => Status::BadParams,
            InternalError { .. } => Status::Error,
        }
    }
}

impl From<InventoryException> for Status {
    fn from(e: InventoryException) -> Self {
        Status::from(&e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_kinds_map_to_status() {
        let cases = [
            (
                InventoryException::ConnectionInvalid {
                    reason: "closed".to_string(),
                },
                Status::Error,
            ),
            (
                InventoryException::NotNullViolation { column: "type" },
                Status::BadParams,
            ),
            (
                InventoryException::CheckViolation {
                    constraint: "size >= 0",
                },
                Status::BadParams,
            ),
            (
                InventoryException::UniqueViolation {
                    table: "files",
                    key: "1".to_string(),
                },
                Status::AlreadyExists,
            ),
            (
                InventoryException::ForeignKeyViolation {
                    table: "files_in_disks",
                    referenced: "disk",
                    id: 3,
                },
                Status::BadParams,
            ),
            (anyhow::anyhow!("boom").into(), Status::Error),
        ];
        for (e, expected) in cases {
            assert_eq!(expected, Status::from(&e), "{e}");
        }
    }

    #[test]
    fn serializes_like_the_status_names() {
        let json = serde_json::to_string(&Status::AlreadyExists).unwrap();
        assert_eq!("\"ALREADY_EXISTS\"", json);
    }
}
