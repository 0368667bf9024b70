//! # Session Token Expiry
//!
//! Reads the `exp` claim out of a session token. The client never verifies
//! signatures (that is the server's job); it only needs the expiry timestamp
//! to decide whether a stored session is still usable.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::TokenError;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Decode the expiry claim of a session token.
///
/// Signature validation is disabled; any algorithm is accepted. The `exp`
/// claim is interpreted as Unix seconds.
///
/// # Errors
///
/// [`TokenError::Malformed`] if the token does not decode as a JWT,
/// [`TokenError::MissingExpiry`] if it decodes but has no `exp` claim.
pub fn expiry(token: &str) -> Result<DateTime<Utc>, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|_| TokenError::Malformed)?;

    let exp = data.claims.exp.ok_or(TokenError::MissingExpiry)?;
    DateTime::from_timestamp(exp, 0).ok_or(TokenError::Malformed)
}

/// Whether a session token should be considered dead at `now`.
///
/// A token that cannot be decoded counts as expired: the caller's only
/// correct reaction to either condition is logging out.
pub fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
    match expiry(token) {
        Ok(exp) => exp < now,
        Err(_) => true,
    }
}
