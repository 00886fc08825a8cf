//! Domain ports for the hexagonal boundary.
//!
//! - [`UserRepository`] is the driven port implemented by persistence
//!   adapters.
//! - [`UserAccounts`] is the driving port called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
