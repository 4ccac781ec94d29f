pub type InventoryResult<T> = Result<T, InventoryException>;

/// Failures signalled by an inventory store.
///
/// Constraint violations are kept apart from connection and generic failures so callers can map
/// each kind onto a [`Status`](crate::model::vo::Status) without inspecting messages.
#[derive(Debug, thiserror::Error)]
pub enum InventoryException {
    #[error("The inventory store connection is invalid: {reason}")]
    ConnectionInvalid { reason: String },

    #[error("Column: {column} must not be empty.")]
    NotNullViolation { column: &'static str },

    #[error("Check constraint: {constraint} is violated.")]
    CheckViolation { constraint: &'static str },

    #[error("A {table} row with key: {key} already exists.")]
    UniqueViolation { table: &'static str, key: String },

    #[error("A {table} row references a missing {referenced} with id: {id}.")]
    ForeignKeyViolation {
        table: &'static str,
        referenced: &'static str,
        id: i64,
    },

    #[error("Inventory internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for InventoryException {
    fn from(e: anyhow::Error) -> Self {
        InventoryException::InternalError { source: e }
    }
}
