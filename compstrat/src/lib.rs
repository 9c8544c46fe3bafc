//! # compstrat - interchangeable compression strategies
//!
//! A small, closed set of whole-buffer compression algorithms behind one
//! two-method contract, selected by a stable integer identifier.
//!
//! ## Algorithms
//!
//! | id | name       | backing implementation |
//! |----|------------|------------------------|
//! | 0  | `identity` | none |
//! | 1  | `deflate`  | zlib stream via `flate2` |
//! | 2  | `gzip`     | gzip member via `flate2` |
//! | 3  | `bzip2`    | `bzip2` |
//! | 4  | `brotli`   | `brotli`, quality 11, text mode |
//! | 5  | `bwtc`     | block BWT + move-to-front, raw DEFLATE back end |
//! | 6  | `lzp3`     | order-3 LZP, raw DEFLATE back end |
//! | 7  | `msgpack`  | MessagePack document or byte string |
//!
//! Callers are responsible for remembering which algorithm produced a blob;
//! nothing in the output records it.
//!
//! ## Example
//!
//! ```
//! use compstrat::{Algorithm, StrategyRegistry};
//!
//! # fn main() -> Result<(), compstrat::Error> {
//! let registry = StrategyRegistry::new();
//! let gzip = registry.get_strategy(Algorithm::Gzip.id().into())?;
//!
//! let compressed = gzip.compress(b"hello hello hello hello")?;
//! assert_eq!(gzip.decompress(&compressed)?, b"hello hello hello hello");
//!
//! assert!(registry.get_strategy(100).is_err());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod algorithm;
pub mod compression;
pub mod error;
pub mod registry;
pub mod strategy;

// Re-export commonly used types
pub use algorithm::Algorithm;
pub use error::{Error, Result};
pub use registry::{registry, StrategyRegistry};
pub use strategy::CompressionStrategy;

/// Compress a payload with the process-wide registry
pub fn compress(algorithm: Algorithm, payload: &[u8]) -> Result<Vec<u8>> {
    let compressed = registry().get(algorithm).compress(payload)?;
    log::debug!(
        "Compressed {} bytes to {} bytes with {}",
        payload.len(),
        compressed.len(),
        algorithm
    );
    Ok(compressed)
}

/// Decompress a payload with the process-wide registry
pub fn decompress(algorithm: Algorithm, payload: &[u8]) -> Result<Vec<u8>> {
    let decompressed = registry().get(algorithm).decompress(payload)?;
    log::debug!(
        "Decompressed {} bytes to {} bytes with {}",
        payload.len(),
        decompressed.len(),
        algorithm
    );
    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_round_trip() {
        let original = b"convenience functions dispatch through the global registry";
        for algorithm in Algorithm::ALL {
            let compressed = compress(algorithm, original).expect("Compression failed");
            let decompressed = decompress(algorithm, &compressed).expect("Decompression failed");
            assert_eq!(decompressed, original, "{} round trip", algorithm);
        }
    }
}
