//! Compression strategies, one per algorithm
//!
//! Each submodule pairs free `compress`/`decompress` functions with a unit
//! struct implementing [`CompressionStrategy`](crate::CompressionStrategy).

mod brotli;
mod bwtc;
mod bzip2;
mod deflate;
mod entropy;
mod gzip;
mod identity;
mod lzp3;
mod msgpack;

pub use self::brotli::BrotliStrategy;
pub use self::bwtc::BwtcStrategy;
pub use self::bzip2::Bzip2Strategy;
pub use self::deflate::DeflateStrategy;
pub use self::gzip::GzipStrategy;
pub use self::identity::IdentityStrategy;
pub use self::lzp3::Lzp3Strategy;
pub use self::msgpack::{is_map_marker, MessagePackStrategy};

use crate::{Algorithm, CompressionStrategy};

/// Builds the strategy for an algorithm.
///
/// The match is exhaustive, so adding an [`Algorithm`] variant without a
/// strategy fails to compile.
pub(crate) fn instantiate(algorithm: Algorithm) -> Box<dyn CompressionStrategy> {
    match algorithm {
        Algorithm::Identity => Box::new(IdentityStrategy),
        Algorithm::Deflate => Box::new(DeflateStrategy),
        Algorithm::Gzip => Box::new(GzipStrategy),
        Algorithm::Bzip2 => Box::new(Bzip2Strategy),
        Algorithm::Brotli => Box::new(BrotliStrategy),
        Algorithm::Bwtc => Box::new(BwtcStrategy),
        Algorithm::Lzp3 => Box::new(Lzp3Strategy),
        Algorithm::MessagePack => Box::new(MessagePackStrategy),
    }
}

/// Reads a little-endian `u32` length header, the framing shared by the
/// in-crate transforms
pub(crate) fn read_length_header(algorithm: Algorithm, data: &mut &[u8]) -> crate::Result<usize> {
    use byteorder::{LittleEndian, ReadBytesExt};

    data.read_u32::<LittleEndian>()
        .map(|len| len as usize)
        .map_err(|_| crate::Error::codec(algorithm, "truncated length header"))
}

/// Writes a little-endian `u32` length header
pub(crate) fn write_length_header(
    algorithm: Algorithm,
    out: &mut Vec<u8>,
    len: usize,
) -> crate::Result<()> {
    use byteorder::{LittleEndian, WriteBytesExt};

    let len = u32::try_from(len).map_err(|_| {
        crate::Error::codec(algorithm, format!("payload of {} bytes is too large", len))
    })?;
    out.write_u32::<LittleEndian>(len)
        .map_err(|e| crate::Error::codec(algorithm, e.to_string()))
}
