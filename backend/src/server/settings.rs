//! Service settings loaded via OrthoConfig.
//!
//! Values come from `USERS_*` environment variables, command-line flags, or a
//! configuration file. Unset values fall back to the defaults below.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Runtime configuration for the user service binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServiceSettings {
    /// SQLite database path, or `:memory:` for a throwaway store.
    #[ortho_config(default = "users.db".to_owned())]
    pub database_url: String,
    /// Socket address the HTTP listener binds to.
    #[ortho_config(default = "0.0.0.0:5000".to_owned())]
    pub bind_addr: String,
    /// Seconds a request waits for the database connection.
    #[ortho_config(default = 30)]
    pub pool_timeout_secs: u64,
    /// Actix worker thread count.
    pub workers: Option<usize>,
}

impl ServiceSettings {
    /// Parse the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.parse()
    }

    /// Return the connection checkout timeout.
    pub fn pool_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_timeout_secs)
    }
}
