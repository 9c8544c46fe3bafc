//! Raw DEFLATE back end for the in-crate transforms
//!
//! The BWT and LZP stages only reorder or predict bytes; this stage does the
//! actual bit-level squeezing.

use crate::{Algorithm, Error, Result};
use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression};
use std::io::{Read, Write};

/// Squeezes a transformed buffer with raw DEFLATE at best compression
pub(crate) fn encode(algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(data)
        .map_err(|e| Error::codec(algorithm, e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| Error::codec(algorithm, e.to_string()))
}

/// Inflates a buffer produced by [`encode`]
pub(crate) fn decode(algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::codec(algorithm, "empty compressed data"));
    }

    let mut decoder = DeflateDecoder::new(data);
    let mut decoded = Vec::new();
    decoder
        .read_to_end(&mut decoded)
        .map_err(|e| Error::codec(algorithm, e.to_string()))?;
    Ok(decoded)
}
