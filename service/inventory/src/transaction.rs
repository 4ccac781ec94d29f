use domain_inventory::{
    exception::InventoryResult,
    model::vo::Status,
    repository::{InventoryStore, InventoryTransaction, Statement},
};

/// Commit when the work reported [`Status::Ok`], roll back on anything else.
pub(crate) async fn finish(
    tx: Box<dyn InventoryTransaction>,
    outcome: InventoryResult<Status>,
) -> InventoryResult<Status> {
    match outcome {
        Ok(Status::Ok) => {
            tx.commit().await?;
            Ok(Status::Ok)
        }
        Ok(status) => {
            tx.rollback().await?;
            Ok(status)
        }
        Err(e) => {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!("Rollback after \"{e}\" failed: {rollback_error}");
            }
            Err(e)
        }
    }
}

/// Execute every statement in one transaction.
pub(crate) async fn execute_all(
    store: &dyn InventoryStore,
    statements: Vec<Statement>,
) -> InventoryResult<Status> {
    let mut tx = store.begin().await?;
    let outcome = execute_in(tx.as_mut(), statements).await;
    finish(tx, outcome).await
}

async fn execute_in(
    tx: &mut dyn InventoryTransaction,
    statements: Vec<Statement>,
) -> InventoryResult<Status> {
    for statement in statements {
        tx.execute(statement).await?;
    }
    Ok(Status::Ok)
}
