//! # Auth State Manager
//!
//! Session token lifecycle: establishing a session, ending it, and checking
//! that a stored token is still alive.
//!
//! ## Commit Ordering
//! The durable write always completes before the in-memory transition is
//! committed. A crash between the two leaves disk *ahead* of memory for at
//! most the duration of the call, and the next bootstrap recovers from
//! disk, so the two can never disagree across a restart.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use shopfront_core::{token, AuthEvent, CartEvent, StoreEvent, User};

use crate::error::ClientResult;
use crate::store::{LogoutCartPolicy, StoreInner};

/// What `register` did with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The server returned a token and the session is already established.
    AutoLoggedIn,
    /// Account created, but the server returned no token; the user logs in
    /// separately.
    LoginRequired,
}

/// Handle for session operations. Cheap to clone; all handles share the
/// store.
#[derive(Clone)]
pub struct AuthManager {
    inner: Arc<StoreInner>,
}

impl AuthManager {
    pub(crate) fn new(inner: Arc<StoreInner>) -> Self {
        AuthManager { inner }
    }

    /// Accepts a server-issued token: persists it, then commits the
    /// session transition. No well-formedness validation happens here.
    ///
    /// # Errors
    ///
    /// [`crate::ClientError::TokenStore`] when the durable write fails; the
    /// in-memory session is left unchanged in that case.
    pub fn login(&self, token: impl Into<String>) -> ClientResult<()> {
        let token = token.into();
        self.inner.tokens.save(&token)?;
        self.inner.commit(StoreEvent::Auth(AuthEvent::LoggedIn(token)));
        info!("Session established");
        Ok(())
    }

    /// Ends the session: removes the persisted token, then commits the
    /// transition. Idempotent — logging out while logged out is a no-op
    /// that still succeeds.
    ///
    /// With [`LogoutCartPolicy::ClearCart`] the cart mirror is cleared in
    /// the same call.
    pub fn logout(&self) -> ClientResult<()> {
        self.inner.tokens.clear()?;
        self.inner.commit(StoreEvent::Auth(AuthEvent::LoggedOut));
        if self.inner.config.logout_cart == LogoutCartPolicy::ClearCart {
            self.inner.commit(StoreEvent::Cart(CartEvent::Cleared));
        }
        info!("Session ended");
        Ok(())
    }

    /// Checks the current token's expiry claim; an expired or undecodable
    /// token ends the session exactly like [`logout`](Self::logout). No
    /// token means no-op.
    ///
    /// Never returns an error: if the persisted token cannot be removed,
    /// the in-memory session is still cleared (fail-safe to logged-out)
    /// and the next bootstrap re-runs this check on whatever disk held.
    pub fn check_token_validity(&self) {
        let Some(current) = self.inner.token() else {
            return;
        };
        if !token::is_expired(&current, Utc::now()) {
            return;
        }

        warn!("Session token expired or undecodable; ending session");
        if let Err(e) = self.inner.tokens.clear() {
            warn!(error = %e, "Failed to remove persisted token");
        }
        self.inner.commit(StoreEvent::Auth(AuthEvent::LoggedOut));
        if self.inner.config.logout_cart == LogoutCartPolicy::ClearCart {
            self.inner.commit(StoreEvent::Cart(CartEvent::Cleared));
        }
    }

    /// Exchanges credentials for a token and establishes the session.
    pub async fn login_with_credentials(&self, email: &str, password: &str) -> ClientResult<()> {
        let token = self.inner.api.login(email, password).await?;
        self.login(token)
    }

    /// Creates an account. If the server hands back a token the session is
    /// established immediately.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<RegisterOutcome> {
        match self.inner.api.register(name, email, password).await? {
            Some(token) => {
                self.login(token)?;
                Ok(RegisterOutcome::AutoLoggedIn)
            }
            None => Ok(RegisterOutcome::LoginRequired),
        }
    }

    /// Fetches the profile behind the current session.
    ///
    /// # Errors
    ///
    /// [`crate::ClientError::Unauthorized`] without a token, before any
    /// network call.
    pub async fn current_user(&self) -> ClientResult<User> {
        let token = self.inner.require_token()?;
        self.inner.api.current_user(&token).await
    }
}
