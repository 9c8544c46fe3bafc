//! DEFLATE compression in a zlib wrapper

use crate::{Algorithm, CompressionStrategy, Error, Result};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use std::io::{Read, Write};

/// Compresses data using zlib at best compression
pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(data)
        .map_err(|e| Error::codec(Algorithm::Deflate, e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| Error::codec(Algorithm::Deflate, e.to_string()))
}

/// Decompresses a zlib stream
pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut decompressed = Vec::with_capacity(data.len() * 2);

    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::codec(Algorithm::Deflate, e.to_string()))?;

    Ok(decompressed)
}

/// zlib/DEFLATE strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct DeflateStrategy;

impl CompressionStrategy for DeflateStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Deflate
    }

    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        compress(payload)
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        decompress(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deflate_roundtrip() {
        let original = b"This is test data for zlib compression. It should compress well and decompress back to the original.";

        let compressed = compress(original).expect("Compression failed");

        // zlib header with maximum compression level
        assert_eq!(compressed[0], 0x78);
        assert_eq!(compressed[1], 0xDA);
        assert!(compressed.len() < original.len());

        let decompressed = decompress(&compressed).expect("Decompression failed");
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_deflate_rejects_every_cut() {
        let original = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";
        let compressed = compress(original).expect("Compression failed");

        for cut in [compressed.len() - 1, compressed.len() - 4, compressed.len() / 2, 2] {
            let err = decompress(&compressed[..cut]).unwrap_err();
            assert!(
                matches!(err, Error::Codec { algorithm: Algorithm::Deflate, .. }),
                "cut at {} returned {:?}",
                cut,
                err
            );
        }
    }

    #[test]
    fn test_deflate_rejects_garbage() {
        let err = decompress(b"definitely not a zlib stream").unwrap_err();
        assert!(matches!(
            err,
            Error::Codec {
                algorithm: Algorithm::Deflate,
                ..
            }
        ));
    }
}
