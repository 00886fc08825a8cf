//! Domain primitives, ports, and services.
//!
//! Purpose: define the user entity and the use-cases around it without any
//! knowledge of HTTP or SQL. Inbound adapters call [`ports::UserAccounts`];
//! outbound adapters implement [`ports::UserRepository`].
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - User / UserId / UserName — the user entity and its validated parts.
//! - UserAccountsService — the use-case implementation.
//! - TraceId — request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_accounts_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserName, UserValidationError};
pub use self::user_accounts_service::{USER_ALREADY_EXISTS, USER_NOT_FOUND, UserAccountsService};
