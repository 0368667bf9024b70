//! # Token Decode Errors
//!
//! Why a session token could not be read. These never escape the engine:
//! the auth expiry check treats every variant the same as an expired token
//! and fails safe to logged-out.

use thiserror::Error;

/// A session token could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token is not a decodable JWT.
    #[error("token is not a decodable JWT")]
    Malformed,

    /// The token decoded but carries no `exp` claim.
    #[error("token has no expiry claim")]
    MissingExpiry,
}
