//! Session token payload.

use crate::config::ExpiryConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload of a session token: who it was issued to and when it lapses.
///
/// The signing core never reads these fields. Checking `exp` is left to the
/// caller via [`SessionToken::is_expired_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken {
    /// User ID
    pub sub: i64,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

impl SessionToken {
    /// Create a token from explicit fields
    #[must_use]
    pub fn new(sub: i64, iat: i64, exp: i64) -> Self {
        Self { sub, iat, exp }
    }

    /// Issue a token for `user_id` starting now.
    #[must_use]
    pub fn issue(user_id: i64, config: &ExpiryConfig) -> Self {
        Self::issue_at(user_id, Utc::now(), config)
    }

    /// Issue a token for `user_id` starting at `now`.
    #[must_use]
    pub fn issue_at(user_id: i64, now: DateTime<Utc>, config: &ExpiryConfig) -> Self {
        let iat = now.timestamp();
        Self {
            sub: user_id,
            iat,
            exp: iat.saturating_add(config.lifetime.num_seconds()),
        }
    }

    /// Whether the token has lapsed at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"sub":{},"iat":{},"exp":{}}}"#,
            self.sub, self.iat, self.exp
        )
    }
}
