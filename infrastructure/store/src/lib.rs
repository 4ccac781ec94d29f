mod memory;
mod relation;
mod tables;

pub use memory::{MemoryReadTransaction, MemoryStore, MemoryTransaction};
