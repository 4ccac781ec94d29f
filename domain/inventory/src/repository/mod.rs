mod statement;
mod store;

#[rustfmt::skip]
pub use {
    statement::{Executed, Row, Statement},
    store::{InventoryStore, InventoryTransaction},
};
