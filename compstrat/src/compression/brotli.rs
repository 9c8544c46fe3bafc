//! Brotli compression tuned for text

use crate::{Algorithm, CompressionStrategy, Error, Result};

use brotli::enc::backward_references::{BrotliEncoderMode, BrotliEncoderParams};

/// Highest Brotli quality level
const MAX_QUALITY: i32 = 11;

fn encoder_params() -> BrotliEncoderParams {
    let mut params = BrotliEncoderParams::default();
    params.quality = MAX_QUALITY;
    params.mode = BrotliEncoderMode::BROTLI_MODE_TEXT;
    params
}

/// Compresses data with Brotli at maximum quality in text mode
pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut input = data;
    let mut compressed = Vec::new();
    brotli::BrotliCompress(&mut input, &mut compressed, &encoder_params())
        .map_err(|e| Error::codec(Algorithm::Brotli, e.to_string()))?;
    Ok(compressed)
}

/// Decompresses a Brotli stream
pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::codec(Algorithm::Brotli, "empty compressed data"));
    }

    let mut input = data;
    let mut decompressed = Vec::with_capacity(data.len() * 2);
    brotli::BrotliDecompress(&mut input, &mut decompressed)
        .map_err(|e| Error::codec(Algorithm::Brotli, e.to_string()))?;
    Ok(decompressed)
}

/// Brotli strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct BrotliStrategy;

impl CompressionStrategy for BrotliStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Brotli
    }

    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        compress(payload)
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        decompress(payload)
    }
}
