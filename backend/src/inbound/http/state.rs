//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain's driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserAccounts;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserAccounts>,
}

impl HttpState {
    /// Construct state around a user accounts implementation.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use user_service::domain::UserAccountsService;
    /// use user_service::inbound::http::state::HttpState;
    /// use user_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
    ///
    /// # async fn build() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::in_memory()).await?;
    /// let repo = Arc::new(DieselUserRepository::new(pool));
    /// let state = HttpState::new(Arc::new(UserAccountsService::new(repo)));
    /// let _users = state.users.clone();
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(users: Arc<dyn UserAccounts>) -> Self {
        Self { users }
    }
}
