//! # Session State
//!
//! The session mirror: the raw token plus the derived authentication flag.
//! The two fields move together through a single transition function, so no
//! observable state ever has them disagreeing.

use serde::{Deserialize, Serialize};

/// Local mirror of the session.
///
/// ## Invariant
/// `is_authenticated == token.is_some()` at all observable times. The only
/// mutation path is [`apply`], which updates both fields in one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Raw session credential; `None` means unauthenticated.
    pub token: Option<String>,

    /// Derived flag, kept for cheap checks by presentation code.
    pub is_authenticated: bool,
}

impl AuthState {
    /// A logged-out session.
    pub fn logged_out() -> Self {
        AuthState { token: None, is_authenticated: false }
    }

    /// Builds the bootstrap state from whatever the durable token store
    /// held at startup. Absence means logged-out.
    pub fn from_stored_token(token: Option<String>) -> Self {
        let is_authenticated = token.is_some();
        AuthState { token, is_authenticated }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::logged_out()
    }
}

/// Session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A server-issued token was accepted. No well-formedness validation
    /// happens here; the server issued it.
    LoggedIn(String),

    /// The session ended (explicit logout, or an expired/undecodable token
    /// detected by the validity check).
    LoggedOut,
}

/// Applies a session transition.
pub fn apply(state: &mut AuthState, event: &AuthEvent) {
    match event {
        AuthEvent::LoggedIn(token) => {
            state.token = Some(token.clone());
            state.is_authenticated = true;
        }
        AuthEvent::LoggedOut => {
            state.token = None;
            state.is_authenticated = false;
        }
    }
}
