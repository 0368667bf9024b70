//! # Client Error Types
//!
//! Error taxonomy for everything the I/O layer can fail at.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Authorization  │  │   Transport     │  │     Persistence         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Unauthorized   │  │  Transport      │  │  TokenStore             │ │
//! │  │  (local guard   │  │  (network/HTTP  │  │  (durable token file    │ │
//! │  │   or 401/403)   │  │   failure)      │  │   read/write)           │ │
//! │  │                 │  │  Api            │  │                         │ │
//! │  │                 │  │  (non-2xx with  │  │                         │ │
//! │  │                 │  │   server body)  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Token expiry/malformation is NOT here: the validity check fails safe to
//! logged-out and never surfaces an error.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Everything a remote or persistence operation can fail with.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Operation attempted with no session token, or the server refused the
    /// one presented (HTTP 401/403). The caller redirects to login.
    #[error("not authenticated")]
    Unauthorized,

    /// Network-level failure: connect, timeout, or an unreadable response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status and a body.
    #[error("server rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    /// The durable token store could not be read or written.
    #[error("token store failure: {0}")]
    TokenStore(String),
}

impl ClientError {
    /// True when the caller's correct reaction is re-authentication.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    /// True for network-level failures where state was left untouched and
    /// the same call may simply be issued again later.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
