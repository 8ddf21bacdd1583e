//! JWS compact serialization: `header.payload.signature`
//!
//! Encoding builds the fixed header, serializes the payload, signs the two
//! segments and joins all three with `.`. Decoding splits the token, recomputes
//! the tag over the received header and payload segments, compares it with the
//! received tag, and only then parses the payload.

use crate::{
    crypto::hmac_sha256,
    encoding::SegmentEncoding,
    error::{JwsError, Result},
    header::JwsHeader,
    payload,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

/// Segment separator
pub const SEPARATOR: char = '.';

/// The three segments of a compact token, borrowed from the token string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts<'a> {
    /// Encoded protected header
    pub header: &'a str,
    /// Encoded payload
    pub payload: &'a str,
    /// Encoded signature
    pub signature: &'a str,
}

/// Join the three segments in header, payload, signature order.
#[must_use]
pub fn assemble(header: &str, payload: &str, signature: &str) -> String {
    let mut token = String::with_capacity(header.len() + payload.len() + signature.len() + 2);
    token.push_str(header);
    token.push(SEPARATOR);
    token.push_str(payload);
    token.push(SEPARATOR);
    token.push_str(signature);
    token
}

/// Split a token into its three segments.
///
/// # Errors
///
/// Returns [`JwsError::Structural`] unless the token has exactly two
/// separators and every segment is non-empty.
pub fn parse(token: &str) -> Result<Parts<'_>> {
    let mut split = token.split(SEPARATOR);
    match (split.next(), split.next(), split.next(), split.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok(Parts {
                header,
                payload,
                signature,
            })
        }
        _ => Err(JwsError::Structural),
    }
}

/// Sign `payload` with `key` using the default base64url alphabet.
///
/// # Errors
///
/// See [`encode_with`].
pub fn encode<T>(key: &[u8], payload: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    encode_with(key, payload, SegmentEncoding::default())
}

/// Sign `payload` with `key`, encoding all segments with `encoding`.
///
/// # Errors
///
/// Returns [`JwsError::InvalidKey`] for an empty key and
/// [`JwsError::Serialization`] if the payload has no JSON form.
pub fn encode_with<T>(key: &[u8], payload: &T, encoding: SegmentEncoding) -> Result<String>
where
    T: Serialize + ?Sized,
{
    if key.is_empty() {
        return Err(JwsError::InvalidKey);
    }

    let header_b64 = JwsHeader::encoded(encoding);
    let payload_b64 = payload::serialize(payload, encoding)?;
    let signature_b64 = hmac_sha256::sign(key, &header_b64, &payload_b64, encoding)?;

    let token = assemble(&header_b64, &payload_b64, &signature_b64);
    debug!(
        payload_len = payload_b64.len(),
        token_len = token.len(),
        "jws encoded"
    );
    Ok(token)
}

/// Verify `token` with `key` and parse its payload, using the default
/// base64url alphabet.
///
/// # Errors
///
/// See [`decode_with`].
pub fn decode<T>(key: &[u8], token: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    decode_with(key, token, SegmentEncoding::default())
}

/// Verify `token` with `key` and parse its payload, reading all segments with
/// `encoding`.
///
/// The payload is never decoded before the signature has been checked.
///
/// # Errors
///
/// * [`JwsError::Structural`] if the token is not three non-empty segments
/// * [`JwsError::InvalidKey`] if `key` is empty
/// * [`JwsError::SignatureMismatch`] if the tag does not match
/// * [`JwsError::Decode`] or [`JwsError::Serialization`] if the payload
///   segment cannot be turned into a `T`
pub fn decode_with<T>(key: &[u8], token: &str, encoding: SegmentEncoding) -> Result<T>
where
    T: DeserializeOwned,
{
    let parts = parse(token)?;

    if let Err(err) = hmac_sha256::verify(
        key,
        parts.header,
        parts.payload,
        parts.signature,
        encoding,
    ) {
        if err == JwsError::SignatureMismatch {
            warn!(token_len = token.len(), "jws signature authentication failed");
        }
        return Err(err);
    }

    let value = payload::deserialize(parts.payload, encoding)?;
    debug!(payload_len = parts.payload.len(), "jws decoded");
    Ok(value)
}
