//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned when constructing user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user name must not be empty")]
    EmptyName,
}

/// Store-generated user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw primary key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw primary key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Unique user name.
///
/// Names are compared exactly: no trimming or case folding is applied, so
/// `"alice"` and `"Alice"` are different users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `name` is non-empty and unique across all users.
///
/// # Examples
/// ```
/// use user_service::domain::{User, UserId, UserName};
///
/// let user = User::new(UserId::new(1), UserName::new("Alice").expect("valid name"));
/// let json = serde_json::to_value(&user).expect("serialise");
/// assert_eq!(json, serde_json::json!({ "id": 1, "name": "Alice" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    /// Build a user from validated components.
    #[must_use]
    pub const fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Fallible constructor from raw parts.
    pub fn try_from_parts(id: i64, name: impl Into<String>) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id), UserName::new(name)?))
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Unique name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Return a copy of this user carrying `name`.
    #[must_use]
    pub fn renamed(&self, name: UserName) -> Self {
        Self::new(self.id, name)
    }
}
