//! Identity strategy, a no-op baseline

use crate::{Algorithm, CompressionStrategy, Result};

/// Returns payloads unchanged in both directions
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStrategy;

impl CompressionStrategy for IdentityStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Identity
    }

    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        Ok(payload.to_vec())
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        Ok(payload.to_vec())
    }
}
