//! Binary-to-text alphabet shared by all three segments of a token

use crate::error::Result;
use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};

/// Alphabet used for the header, payload and signature segments.
///
/// A token is always produced and verified with a single alphabet. The two
/// variants never fall back to one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SegmentEncoding {
    /// Base64url without padding (RFC 7515 §2)
    #[default]
    UrlSafeNoPad,
    /// Standard padded base64, as emitted by older issuers of these tokens
    StandardPadded,
}

impl SegmentEncoding {
    /// Encode raw bytes into a segment
    #[inline]
    #[must_use]
    pub fn encode(self, input: &[u8]) -> String {
        match self {
            Self::UrlSafeNoPad => URL_SAFE_NO_PAD.encode(input),
            Self::StandardPadded => STANDARD.encode(input),
        }
    }

    /// Decode a segment back into raw bytes
    ///
    /// # Errors
    ///
    /// Returns [`JwsError::Decode`](crate::JwsError::Decode) if `segment` is
    /// not valid text in this alphabet.
    #[inline]
    pub fn decode(self, segment: &str) -> Result<Vec<u8>> {
        let bytes = match self {
            Self::UrlSafeNoPad => URL_SAFE_NO_PAD.decode(segment)?,
            Self::StandardPadded => STANDARD.decode(segment)?,
        };
        Ok(bytes)
    }
}
