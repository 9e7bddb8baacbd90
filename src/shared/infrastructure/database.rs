use crate::{log_error, log_info};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Connection settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_size: u32,
    pub min_idle: u32,
    pub connection_timeout: Duration,
}

impl DatabaseConfig {
    /// Load `DATABASE_URL` (and optional `DATABASE_MAX_CONNECTIONS`) after reading `.env`
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::DatabaseError("DATABASE_URL environment variable not found".to_string())
        })?;

        let max_size = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| {
                AppError::DatabaseError(format!(
                    "Invalid DATABASE_MAX_CONNECTIONS '{}': {}",
                    raw, e
                ))
            })?,
            Err(_) => Self::default_max_size(),
        };

        Self::with_url(url, max_size)
    }

    /// Build a config for an explicit URL, validating its format
    pub fn with_url(url: String, max_size: u32) -> AppResult<Self> {
        Self::validate_url(&url)?;

        if max_size == 0 {
            return Err(AppError::DatabaseError(
                "Pool size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            url,
            max_size,
            min_idle: std::cmp::max(1, max_size / 4),
            connection_timeout: Duration::from_secs(10),
        })
    }

    fn validate_url(url: &str) -> AppResult<()> {
        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(AppError::DatabaseError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Base pool size on CPU count, capped
    fn default_max_size() -> u32 {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        std::cmp::min(cpu_count * 2, 20) as u32
    }
}

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::from_env()?)
    }

    pub fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.url.clone());

        let pool = r2d2::Pool::builder()
            .max_size(config.max_size)
            .min_idle(Some(config.min_idle))
            .connection_timeout(config.connection_timeout)
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        // Log target without exposing credentials
        log_info!(
            "Database connection pool initialized for {} with max_size: {}",
            config.url.split('@').last().unwrap_or("unknown_host"),
            pool.max_size()
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Apply the embedded schema migrations that have not run yet
    pub fn run_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| {
                log_error!("Failed to run migrations: {}", e);
                AppError::DatabaseError(format!("Failed to run migrations: {}", e))
            })?;

        log_info!("Database migrations completed ({} applied)", applied.len());
        Ok(applied.len())
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
