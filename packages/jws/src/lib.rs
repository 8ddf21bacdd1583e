//! Compact JSON Web Signatures with HMAC-SHA256
//!
//! Tokens have the form `header.payload.signature`. The header is always
//! `{"alg":"HS256"}`, the payload is any `serde` value serialized as JSON, and
//! the signature is the HMAC-SHA256 tag over `header "." payload`.
//!
//! ```
//! use cryypt_jws::{SessionToken, decode, encode};
//!
//! let token = SessionToken::new(23, 1000, 2000);
//! let compact = encode(b"abcd", &token)?;
//! let back: SessionToken = decode(b"abcd", &compact)?;
//! assert_eq!(back, token);
//! # Ok::<(), cryypt_jws::JwsError>(())
//! ```

pub mod api;
pub mod claims;
pub mod compact;
pub mod config;
pub mod crypto;
pub mod encoding;
mod error;
pub mod header;
pub mod logging;
pub mod payload;

pub use api::{Hs256Builder, Hs256WithSecret, Jws, JwsMasterBuilder};
pub use claims::SessionToken;
pub use compact::{Parts, decode, decode_with, encode, encode_with};
pub use config::ExpiryConfig;
pub use encoding::SegmentEncoding;
pub use error::{ErrorKind, JwsError, Result};
pub use header::JwsHeader;
pub use logging::LoggingTransformer;

/// Main entry point for the builder API
pub struct Cryypt;

impl Cryypt {
    /// Master builder for JWS operations
    #[must_use]
    pub fn jws() -> JwsMasterBuilder {
        JwsMasterBuilder
    }
}
