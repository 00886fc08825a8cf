//! Driving port for user account use-cases.
//!
//! HTTP handlers call this port with already-parsed domain values and receive
//! either a user record or a transport-agnostic [`Error`] carrying the
//! client-facing message.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserName};

/// Domain use-case port for creating, reading, renaming, and removing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Create a user, rejecting names that are already taken.
    async fn register(&self, name: UserName) -> Result<User, Error>;

    /// Look a user up by exact name.
    async fn find_by_name(&self, name: &UserName) -> Result<User, Error>;

    /// Look a user up by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<User, Error>;

    /// Rename the user currently called `current`.
    async fn rename_by_name(&self, current: &UserName, new_name: UserName) -> Result<User, Error>;

    /// Rename the user with identifier `id`.
    async fn rename_by_id(&self, id: UserId, new_name: UserName) -> Result<User, Error>;

    /// Delete the user called `name`, returning the removed record.
    async fn remove_by_name(&self, name: &UserName) -> Result<User, Error>;

    /// Delete the user with identifier `id`, returning the removed record.
    async fn remove_by_id(&self, id: UserId) -> Result<User, Error>;
}
