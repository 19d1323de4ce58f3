//! Session Tokens
//!
//! The session lives entirely in a signed cookie:
//! `base64url(json claims).base64url(hmac)`. A token that fails the
//! signature check, does not decode, or has expired is no session at all.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::PayrollConfig;
use crate::domain::entity::SessionUser;
use crate::domain::value_object::UserRole;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    id: UserId,
    email: String,
    role: UserRole,
    /// Expiration (Unix timestamp ms)
    exp: i64,
}

/// Issue a signed session token for `user`
pub fn encode_session(config: &PayrollConfig, user: &SessionUser, now: DateTime<Utc>) -> String {
    let claims = SessionClaims {
        id: user.id.clone(),
        email: user.email.clone(),
        role: user.role,
        exp: now.timestamp_millis() + config.session_ttl_ms(),
    };

    // Serializing plain strings and an enum cannot fail.
    let payload = serde_json::to_vec(&claims).unwrap_or_default();
    platform::crypto::sign_token(&config.session_secret, &payload)
}

/// Verify a session token and return the user it carries
pub fn decode_session(
    config: &PayrollConfig,
    token: &str,
    now: DateTime<Utc>,
) -> Option<SessionUser> {
    let payload = platform::crypto::open_token(&config.session_secret, token)?;
    let claims: SessionClaims = serde_json::from_slice(&payload).ok()?;

    if now.timestamp_millis() > claims.exp {
        tracing::debug!(user_id = %claims.id, "Session expired");
        return None;
    }

    Some(SessionUser {
        id: claims.id,
        email: claims.email,
        role: claims.role,
    })
}
