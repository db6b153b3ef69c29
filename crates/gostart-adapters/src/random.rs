//! Secure random token adapter.

use rand::{RngCore, rngs::OsRng};
use tracing::trace;

use gostart_core::{
    application::{ApplicationError, ports::TokenGenerator},
    domain::token_from_bytes,
    error::GostartResult,
};

/// Token generator backed by the operating-system CSPRNG.
///
/// Any failure to read the source is reported as
/// [`ApplicationError::RandomSourceUnavailable`]; there is no fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsTokenGenerator;

impl OsTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for OsTokenGenerator {
    fn generate(&self, length: usize) -> GostartResult<String> {
        if length == 0 {
            return Ok(String::new());
        }

        let mut bytes = vec![0u8; length];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| ApplicationError::RandomSourceUnavailable {
                reason: e.to_string(),
            })?;

        trace!(length, "generated token");
        Ok(token_from_bytes(&bytes))
    }
}
