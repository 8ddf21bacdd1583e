//! Logging setup and secret-safe failure reporting
//!
//! The crate emits `tracing` events; with the `log` feature they are forwarded
//! to whatever `log` backend is installed, which `LoggingTransformer::init`
//! sets up through `env_logger`.

use crate::error::JwsError;
use log::{info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// `env_logger` based logging for binaries and tests using this crate
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging once per process.
    ///
    /// Levels come from `RUST_LOG`, e.g. `RUST_LOG=cryypt_jws=debug`.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("structured logging initialized");
        });
    }

    /// Initialize logging for tests; repeated calls are ignored
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed JWS operation.
    ///
    /// Only a fingerprint of the key is written, never the key itself.
    pub fn log_jws_failure(operation: &str, key: &[u8], error: &JwsError) {
        let key_hash = Self::key_fingerprint(key);
        warn!(
            "JWS {operation} failed (alg: HS256, key_hash: {key_hash}, kind: {:?})",
            error.kind()
        );
    }

    /// `#` followed by the first 12 hex chars of the key's SHA-256 digest
    #[must_use]
    pub fn key_fingerprint(key: &[u8]) -> String {
        let hash = Sha256::digest(key);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
