//! Payload serializer: structured value to JSON bytes to encoded segment

use crate::{
    encoding::SegmentEncoding,
    error::{JwsError, Result},
};
use serde::{Serialize, de::DeserializeOwned};

/// Serialize `payload` to JSON and encode it as a segment.
///
/// # Errors
///
/// Returns [`JwsError::Serialization`] if `payload` has no JSON form, e.g. a
/// map with non-string keys or a failing `Serialize` impl.
pub fn serialize<T>(payload: &T, encoding: SegmentEncoding) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec(payload).map_err(|e| JwsError::serialization(e.to_string()))?;
    Ok(encoding.encode(&json))
}

/// Decode a payload segment and parse it into `T`.
///
/// # Errors
///
/// Returns [`JwsError::Decode`] if `segment` is not valid encoded text and
/// [`JwsError::Serialization`] if the JSON does not match the shape of `T`.
pub fn deserialize<T>(segment: &str, encoding: SegmentEncoding) -> Result<T>
where
    T: DeserializeOwned,
{
    let json = encoding.decode(segment)?;
    serde_json::from_slice(&json).map_err(|e| JwsError::serialization(e.to_string()))
}
