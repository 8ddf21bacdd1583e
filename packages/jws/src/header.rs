//! Fixed JWS protected header

use crate::encoding::SegmentEncoding;

/// The protected header `{"alg":"HS256"}`.
///
/// Only one algorithm is supported, so the header carries no `typ` or `kid`
/// and is never read back from a received token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JwsHeader;

impl JwsHeader {
    /// Value of the `alg` parameter
    pub const ALG: &'static str = "HS256";

    /// JSON form of the header
    pub const JSON: &'static str = r#"{"alg":"HS256"}"#;

    /// Header segment in the given alphabet
    #[inline]
    #[must_use]
    pub fn encoded(encoding: SegmentEncoding) -> String {
        encoding.encode(Self::JSON.as_bytes())
    }
}
