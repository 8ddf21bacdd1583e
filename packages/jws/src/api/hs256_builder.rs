//! HS256 JWS builder

use crate::{compact, encoding::SegmentEncoding, error::Result, logging::LoggingTransformer};
use serde::{Serialize, de::DeserializeOwned};
use zeroize::Zeroizing;

/// HS256 JWS builder - initial state
#[derive(Debug, Default)]
pub struct Hs256Builder;

impl Hs256Builder {
    /// Create the builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the shared secret used to sign and verify
    #[must_use]
    pub fn with_secret(self, secret: &[u8]) -> Hs256WithSecret {
        Hs256WithSecret {
            secret: Zeroizing::new(secret.to_vec()),
            encoding: SegmentEncoding::default(),
        }
    }
}

/// HS256 builder with secret configured
pub struct Hs256WithSecret {
    secret: Zeroizing<Vec<u8>>,
    encoding: SegmentEncoding,
}

impl Hs256WithSecret {
    /// Read and write segments with the padded standard base64 alphabet
    #[must_use]
    pub fn legacy_encoding(mut self) -> Self {
        self.encoding = SegmentEncoding::StandardPadded;
        self
    }

    /// Use an explicit segment alphabet
    #[must_use]
    pub fn with_encoding(mut self, encoding: SegmentEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sign `payload` into a compact token
    ///
    /// # Errors
    ///
    /// See [`compact::encode_with`].
    pub fn encode<T>(&self, payload: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        compact::encode_with(&self.secret, payload, self.encoding).inspect_err(|e| {
            LoggingTransformer::log_jws_failure("encode", &self.secret, e);
        })
    }

    /// Verify `token` and parse its payload
    ///
    /// # Errors
    ///
    /// See [`compact::decode_with`].
    pub fn decode<T>(&self, token: impl AsRef<str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        compact::decode_with(&self.secret, token.as_ref(), self.encoding).inspect_err(|e| {
            LoggingTransformer::log_jws_failure("decode", &self.secret, e);
        })
    }
}

impl std::fmt::Debug for Hs256WithSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hs256WithSecret")
            .field("secret", &"<redacted>")
            .field("encoding", &self.encoding)
            .finish()
    }
}
