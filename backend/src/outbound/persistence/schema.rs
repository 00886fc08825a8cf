//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered users.
    ///
    /// `name` carries a `UNIQUE` constraint; the primary key is assigned by
    /// SQLite on insert.
    users (id) {
        id -> BigInt,
        name -> Text,
    }
}
