// Shared Kernel
// Cross-cutting concerns used by every catalog module

pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database pool)
pub mod utils; // Logging and validation helpers

// Re-exports for convenience
pub use errors::{AppError, AppResult};
pub use infrastructure::database::Database;
