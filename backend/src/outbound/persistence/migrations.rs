//! Embedded schema migrations.
//!
//! The only migration creates the `users` table if it does not already
//! exist, matching a database that was created by an earlier deployment.

use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migrations compiled into the binary from `backend/migrations`.
pub(crate) const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Error type returned by the migration harness.
pub(crate) type MigrationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Apply any migrations that have not run against `connection` yet.
pub(crate) fn run_pending_migrations(connection: &mut SqliteConnection) -> Result<(), MigrationError> {
    connection.run_pending_migrations(MIGRATIONS).map(|_| ())
}
