//! User accounts domain service.
//!
//! Implements [`UserAccounts`] on top of a [`UserRepository`]. Each use-case
//! performs at most one lookup and one mutation. Name uniqueness is checked
//! up front for the common case, and the repository's constraint violation
//! is mapped to the same conflict so a lost race looks identical to the
//! client.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{UserAccounts, UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserId, UserName};

/// Message returned whenever a lookup misses.
pub const USER_NOT_FOUND: &str = "User not found";
/// Message returned when a name is already taken.
pub const USER_ALREADY_EXISTS: &str = "User already exists";

/// User accounts service implementing the driving port.
#[derive(Clone)]
pub struct UserAccountsService<R> {
    users: Arc<R>,
}

impl<R> UserAccountsService<R> {
    /// Create a new service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> UserAccountsService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicateName { .. } => Error::conflict(USER_ALREADY_EXISTS),
            UserPersistenceError::Missing { .. } => Error::not_found(USER_NOT_FOUND),
        }
    }

    async fn lookup_by_name(&self, name: &UserName) -> Result<User, Error> {
        self.users
            .find_by_name(name)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    async fn lookup_by_id(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    async fn rename(&self, user: User, new_name: UserName) -> Result<User, Error> {
        let renamed = self
            .users
            .update(&user, &new_name)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %renamed.id(), from = %user.name(), to = %renamed.name(), "user renamed");
        Ok(renamed)
    }

    async fn remove(&self, user: User) -> Result<User, Error> {
        self.users
            .delete(&user)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %user.id(), name = %user.name(), "user deleted");
        Ok(user)
    }
}

#[async_trait]
impl<R> UserAccounts for UserAccountsService<R>
where
    R: UserRepository,
{
    async fn register(&self, name: UserName) -> Result<User, Error> {
        let existing = self
            .users
            .find_by_name(&name)
            .await
            .map_err(Self::map_persistence_error)?;
        if existing.is_some() {
            debug!(name = %name, "rejecting duplicate user name");
            return Err(Error::conflict(USER_ALREADY_EXISTS));
        }

        let user = self
            .users
            .create(&name)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %user.id(), name = %user.name(), "user created");
        Ok(user)
    }

    async fn find_by_name(&self, name: &UserName) -> Result<User, Error> {
        self.lookup_by_name(name).await
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, Error> {
        self.lookup_by_id(id).await
    }

    async fn rename_by_name(&self, current: &UserName, new_name: UserName) -> Result<User, Error> {
        let user = self.lookup_by_name(current).await?;
        self.rename(user, new_name).await
    }

    async fn rename_by_id(&self, id: UserId, new_name: UserName) -> Result<User, Error> {
        let user = self.lookup_by_id(id).await?;
        self.rename(user, new_name).await
    }

    async fn remove_by_name(&self, name: &UserName) -> Result<User, Error> {
        let user = self.lookup_by_name(name).await?;
        self.remove(user).await
    }

    async fn remove_by_id(&self, id: UserId) -> Result<User, Error> {
        let user = self.lookup_by_id(id).await?;
        self.remove(user).await
    }
}

#[cfg(test)]
#[path = "user_accounts_service_tests.rs"]
mod tests;
