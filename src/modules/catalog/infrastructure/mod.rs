pub mod in_memory;
pub mod persistence;

pub use in_memory::InMemoryRecordStore;
pub use persistence::PgRecordStore;
