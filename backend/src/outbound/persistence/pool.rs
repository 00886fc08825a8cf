//! Shared SQLite connection for the persistence layer.
//!
//! SQLite serialises writers, and an in-memory database only exists for the
//! lifetime of the connection that created it, so the pool owns exactly one
//! connection behind an async mutex. `diesel-async`'s
//! [`SyncConnectionWrapper`] moves each query onto a blocking thread so
//! handlers never stall the runtime.
//!
//! # Design
//!
//! - The connection is opened and the schema created once, at start-up.
//! - Checkout waits on the mutex and respects the configured timeout.
//! - All errors are mapped to [`PoolError`] variants.

use std::sync::Arc;
use std::time::Duration;

use diesel::{Connection, SqliteConnection};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use super::migrations::run_pending_migrations;

/// Async connection type handed out by [`DbPool::get`].
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

/// Connection string for a private in-memory database.
pub const IN_MEMORY_DATABASE_URL: &str = ":memory:";

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out the connection in time.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to open the database or create its schema.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use user_service::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("users.db").with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_url(), "users.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the database at `database_url`.
    ///
    /// The checkout timeout defaults to 30 seconds.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Configuration for a fresh in-memory database.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_DATABASE_URL)
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Get the checkout timeout.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Handle to the process-wide database connection.
///
/// Cloning is cheap; all clones share the same connection.
///
/// # Example
///
/// ```ignore
/// let pool = DbPool::new(PoolConfig::in_memory()).await?;
/// let mut conn = pool.get().await?;
/// // Use &mut *conn for Diesel operations...
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Arc<Mutex<DbConnection>>,
    connection_timeout: Duration,
}

impl DbPool {
    /// Open the database described by `config` and ensure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the database cannot be opened or the
    /// schema cannot be created.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let database_url = config.database_url.clone();
        let connection = tokio::task::spawn_blocking(move || open_connection(&database_url))
            .await
            .map_err(|err| PoolError::build(format!("connection task failed: {err}")))??;

        info!(database_url = %config.database_url, "database ready");
        Ok(Self {
            inner: Arc::new(Mutex::new(SyncConnectionWrapper::new(connection))),
            connection_timeout: config.connection_timeout,
        })
    }

    /// Get the connection.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if the connection cannot be obtained
    /// within the configured timeout.
    pub async fn get(&self) -> Result<MutexGuard<'_, DbConnection>, PoolError> {
        tokio::time::timeout(self.connection_timeout, self.inner.lock())
            .await
            .map_err(|_| {
                PoolError::checkout(format!(
                    "timed out after {}ms waiting for the database connection",
                    self.connection_timeout.as_millis()
                ))
            })
    }
}

fn open_connection(database_url: &str) -> Result<SqliteConnection, PoolError> {
    let mut connection = SqliteConnection::establish(database_url)
        .map_err(|err| PoolError::build(err.to_string()))?;
    run_pending_migrations(&mut connection).map_err(|err| PoolError::build(err.to_string()))?;
    debug!(database_url, "schema up to date");
    Ok(connection)
}
