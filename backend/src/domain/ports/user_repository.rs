//! Port abstraction for user persistence adapters and their errors.
//!
//! Every operation is a single point lookup or single-row mutation. The
//! adapter is expected to back name uniqueness with a schema constraint and
//! report violations as [`UserPersistenceError::DuplicateName`], so callers
//! can treat their own existence checks as a fast path only.

use async_trait::async_trait;

use crate::domain::{User, UserId, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The name is already held by another row.
        DuplicateName { name: String } => "user name already taken: {name}",
        /// The row targeted by a mutation no longer exists.
        Missing { id: i64 } => "user {id} no longer exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user holding exactly `name`.
    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user and return it with its generated identifier.
    async fn create(&self, name: &UserName) -> Result<User, UserPersistenceError>;

    /// Overwrite the name of an existing user and return the updated record.
    async fn update(&self, user: &User, name: &UserName) -> Result<User, UserPersistenceError>;

    /// Remove the user permanently.
    async fn delete(&self, user: &User) -> Result<(), UserPersistenceError>;
}
