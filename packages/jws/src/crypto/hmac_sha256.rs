//! HMAC-SHA256 signing and verification of the JWS signing input

use crate::{
    encoding::SegmentEncoding,
    error::{JwsError, Result},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 tag in bytes
pub const TAG_LEN: usize = 32;

/// Raw HMAC-SHA256 tag over `header_b64 "." payload_b64`
fn tag(secret: &[u8], header_b64: &str, payload_b64: &str) -> Result<[u8; TAG_LEN]> {
    if secret.is_empty() {
        return Err(JwsError::InvalidKey);
    }

    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| JwsError::InvalidKey)?;
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(payload_b64.as_bytes());

    let mut out = [0u8; TAG_LEN];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Sign the header and payload segments, returning the signature segment.
///
/// # Errors
///
/// Returns [`JwsError::InvalidKey`] if `secret` is empty.
pub fn sign(
    secret: &[u8],
    header_b64: &str,
    payload_b64: &str,
    encoding: SegmentEncoding,
) -> Result<String> {
    let tag = tag(secret, header_b64, payload_b64)?;
    Ok(encoding.encode(&tag))
}

/// Check a received signature segment against the header and payload segments.
///
/// The comparison runs over the decoded tag bytes in constant time. A
/// signature segment that does not decode, or decodes to the wrong length,
/// cannot match and is reported as a mismatch.
///
/// # Errors
///
/// Returns [`JwsError::InvalidKey`] if `secret` is empty and
/// [`JwsError::SignatureMismatch`] if the tags differ.
pub fn verify(
    secret: &[u8],
    header_b64: &str,
    payload_b64: &str,
    signature_b64: &str,
    encoding: SegmentEncoding,
) -> Result<()> {
    let expected = tag(secret, header_b64, payload_b64)?;
    let received = encoding
        .decode(signature_b64)
        .map_err(|_| JwsError::SignatureMismatch)?;

    // ct_eq on slices of unequal length returns false without inspecting bytes
    if bool::from(expected.as_slice().ct_eq(received.as_slice())) {
        Ok(())
    } else {
        Err(JwsError::SignatureMismatch)
    }
}
