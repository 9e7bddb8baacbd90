//! Shared infrastructure concerns
//!
//! Infrastructure implementations shared across the catalog modules.

pub mod database;

// Re-exports for convenience
pub use database::{Database, DatabaseConfig, DbConnection, DbPool};
