//! The compress/decompress contract shared by every algorithm

use crate::{Algorithm, Result};
use std::fmt::Debug;

/// Operations common to all supported compression algorithms.
///
/// Implementations are immutable after construction, so a single instance can
/// be shared between threads and called concurrently.
///
/// For every algorithm except [`Algorithm::MessagePack`],
/// `decompress(compress(x)) == x` holds for all byte sequences `x`, including
/// the empty one.
pub trait CompressionStrategy: Send + Sync + Debug {
    /// The algorithm this strategy implements
    fn algorithm(&self) -> Algorithm;

    /// Compresses a whole payload into a newly allocated buffer
    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>>;

    /// Reverses [`CompressionStrategy::compress`].
    ///
    /// Fails with [`crate::Error::Codec`] when the codec detects that
    /// `payload` was not produced by the matching `compress`.
    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>>;
}
