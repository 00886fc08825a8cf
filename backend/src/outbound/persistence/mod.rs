//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's
//! [`UserRepository`](crate::domain::ports::UserRepository) port, backed by
//! SQLite via Diesel with async support through `diesel-async`.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leak into the domain layer.
//! - **Schema-level uniqueness**: the `UNIQUE` constraint on `users.name` is
//!   surfaced as `UserPersistenceError::DuplicateName`.
//!
//! # Example
//!
//! ```ignore
//! use user_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("users.db")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbConnection, DbPool, IN_MEMORY_DATABASE_URL, PoolConfig, PoolError};
