pub mod models;
pub mod pg_record_store;
pub mod tables;

pub use pg_record_store::PgRecordStore;
pub use tables::PgTable;
