pub mod store;
pub mod tables;

pub use store::InMemoryRecordStore;
pub use tables::{CatalogTables, InMemoryTable};
