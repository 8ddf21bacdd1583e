//! JWS error types

use thiserror::Error;

/// JWS operation result type
pub type Result<T> = std::result::Result<T, JwsError>;

/// Errors returned by JWS encode/decode and the surrounding helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwsError {
    /// The secret key is empty
    #[error("jws: key can not be empty")]
    InvalidKey,

    /// The payload could not be converted to or from its JSON form
    #[error("jws: serialization failed: {0}")]
    Serialization(String),

    /// A segment is not valid encoded text
    #[error("jws: segment is not valid base64: {0}")]
    Decode(String),

    /// The token does not split into three non-empty parts
    #[error("jws: incomplete signature: does not contain 3 parts")]
    Structural,

    /// The recomputed tag disagrees with the received one
    #[error("jws signature: authentication failed")]
    SignatureMismatch,

    /// Token lifetime configuration is missing or malformed
    #[error("jws config: {0}")]
    Config(String),
}

/// Payload-free discriminant of [`JwsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`JwsError::InvalidKey`]
    InvalidKey,
    /// See [`JwsError::Serialization`]
    Serialization,
    /// See [`JwsError::Decode`]
    Decode,
    /// See [`JwsError::Structural`]
    Structural,
    /// See [`JwsError::SignatureMismatch`]
    SignatureMismatch,
    /// See [`JwsError::Config`]
    Config,
}

impl JwsError {
    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a decode error
    #[inline]
    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a configuration error
    #[inline]
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Kind of this error, for matching without the message
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKey => ErrorKind::InvalidKey,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Structural => ErrorKind::Structural,
            Self::SignatureMismatch => ErrorKind::SignatureMismatch,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<serde_json::Error> for JwsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<base64::DecodeError> for JwsError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}
