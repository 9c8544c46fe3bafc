//! bzip2 compression

use crate::{Algorithm, CompressionStrategy, Error, Result};

use bzip2::{read::BzDecoder, write::BzEncoder, Compression};
use std::io::{Read, Write};

/// Compresses data using bzip2 with 900k blocks
pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = BzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(data)
        .map_err(|e| Error::codec(Algorithm::Bzip2, e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| Error::codec(Algorithm::Bzip2, e.to_string()))
}

/// Decompresses a bzip2 stream
pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = BzDecoder::new(data);
    let mut decompressed = Vec::with_capacity(data.len() * 2);

    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::codec(Algorithm::Bzip2, e.to_string()))?;

    Ok(decompressed)
}

/// bzip2 strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Bzip2Strategy;

impl CompressionStrategy for Bzip2Strategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bzip2
    }

    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        compress(payload)
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        decompress(payload)
    }
}
