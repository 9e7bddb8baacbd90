pub mod entities;
pub mod entity;
pub mod repositories;

// Re-exports for easy access
pub use entities::*;
pub use entity::{in_id_order, not_found, Entity};
pub use repositories::RecordStore;
