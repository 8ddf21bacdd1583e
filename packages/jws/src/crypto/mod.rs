//! JWS cryptographic operations

pub mod hmac_sha256;
