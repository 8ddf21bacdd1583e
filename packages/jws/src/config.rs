//! Token lifetime configuration.
//!
//! The signing core takes every parameter explicitly; this module only feeds
//! [`SessionToken::issue`](crate::claims::SessionToken::issue).

use crate::error::{JwsError, Result};
use chrono::Duration;
use tracing::debug;

/// Environment variable holding the token lifetime in minutes
pub const TOKEN_EXPIRATION_VAR: &str = "TOKEN_EXPIRATION";

/// Default lifetime in minutes (14 days)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 20_160;

/// How long an issued session token stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryConfig {
    /// Time between `iat` and `exp`
    pub lifetime: Duration,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            lifetime: Duration::minutes(DEFAULT_EXPIRATION_MINUTES),
        }
    }
}

impl ExpiryConfig {
    /// Create a configuration with an explicit lifetime
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self { lifetime }
    }

    /// Read the lifetime from [`TOKEN_EXPIRATION_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`JwsError::Config`] if the variable is unset, not an integer,
    /// or not positive.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the lifetime through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Same as [`ExpiryConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(TOKEN_EXPIRATION_VAR).ok_or_else(|| {
            JwsError::config(format!(
                "environment parameter '{TOKEN_EXPIRATION_VAR}' (in minutes) not set"
            ))
        })?;

        let minutes: i64 = raw.trim().parse().map_err(|e| {
            JwsError::config(format!("'{TOKEN_EXPIRATION_VAR}' is not an integer: {e}"))
        })?;
        if minutes <= 0 {
            return Err(JwsError::config(format!(
                "'{TOKEN_EXPIRATION_VAR}' must be positive, got {minutes}"
            )));
        }

        let lifetime = Duration::try_minutes(minutes).ok_or_else(|| {
            JwsError::config(format!("'{TOKEN_EXPIRATION_VAR}' is out of range"))
        })?;
        debug!(minutes, "token expiration configured");
        Ok(Self { lifetime })
    }
}
