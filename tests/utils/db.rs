//! Database test utilities with singleton pattern
//!
//! Postgres tests are skipped unless `TEST_DATABASE_URL` is set.

use gastro_lib::shared::infrastructure::{Database, DatabaseConfig};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static TEST_DB: OnceLock<Option<Arc<Database>>> = OnceLock::new();

/// Get or create the shared test database, with migrations applied
pub fn get_test_database() -> Option<Arc<Database>> {
    TEST_DB
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let url = std::env::var("TEST_DATABASE_URL").ok()?;

            let config = DatabaseConfig::with_url(url, 5)
                .expect("TEST_DATABASE_URL must be a postgres:// url");
            let database = Database::connect(&config).expect("Failed to create test database pool");
            database
                .run_migrations()
                .expect("Failed to run test database migrations");

            Some(Arc::new(database))
        })
        .clone()
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure database tests run serially
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
