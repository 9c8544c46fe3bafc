//! gzip compression

use crate::{Algorithm, CompressionStrategy, Error, Result};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::io::{Read, Write};

/// Compresses data into a single gzip member at best compression
pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(data)
        .map_err(|e| Error::codec(Algorithm::Gzip, e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| Error::codec(Algorithm::Gzip, e.to_string()))
}

/// Decompresses a gzip member
pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::with_capacity(data.len() * 2);

    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::codec(Algorithm::Gzip, e.to_string()))?;

    Ok(decompressed)
}

/// gzip strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct GzipStrategy;

impl CompressionStrategy for GzipStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Gzip
    }

    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        compress(payload)
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        decompress(payload)
    }
}
