//! Builder entry points

pub mod hs256_builder;

pub use hs256_builder::{Hs256Builder, Hs256WithSecret};

/// Master builder for JWS operations
#[derive(Debug, Default)]
pub struct JwsMasterBuilder;

impl JwsMasterBuilder {
    /// HS256 operations, the only supported algorithm
    #[must_use]
    pub fn hs256(self) -> Hs256Builder {
        Hs256Builder::new()
    }
}

/// Direct builder entry point - equivalent to `Cryypt::jws()`
#[derive(Debug)]
pub struct Jws;

impl Jws {
    /// HS256 operations
    #[must_use]
    pub fn hs256() -> Hs256Builder {
        Hs256Builder::new()
    }
}
