//! Algorithm identifiers
//!
//! The numeric value of each variant is the stable identifier callers use to
//! tag payloads. Never renumber existing variants.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Compression algorithms known to the registry
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// No compression
    Identity = 0,
    /// zlib-wrapped DEFLATE
    Deflate = 1,
    /// gzip member
    Gzip = 2,
    /// bzip2 stream
    Bzip2 = 3,
    /// Brotli, text mode
    Brotli = 4,
    /// Block Burrows-Wheeler transform with move-to-front coding
    Bwtc = 5,
    /// Order-3 LZP prediction
    Lzp3 = 6,
    /// MessagePack structured document
    #[cfg_attr(feature = "serde", serde(rename = "msgpack"))]
    MessagePack = 7,
}

impl Algorithm {
    /// Every algorithm, in identifier order
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Identity,
        Algorithm::Deflate,
        Algorithm::Gzip,
        Algorithm::Bzip2,
        Algorithm::Brotli,
        Algorithm::Bwtc,
        Algorithm::Lzp3,
        Algorithm::MessagePack,
    ];

    /// Gets an Algorithm from its identifier
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(Algorithm::Identity),
            1 => Some(Algorithm::Deflate),
            2 => Some(Algorithm::Gzip),
            3 => Some(Algorithm::Bzip2),
            4 => Some(Algorithm::Brotli),
            5 => Some(Algorithm::Bwtc),
            6 => Some(Algorithm::Lzp3),
            7 => Some(Algorithm::MessagePack),
            _ => None,
        }
    }

    /// Returns the identifier for this algorithm
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Identity => "identity",
            Algorithm::Deflate => "deflate",
            Algorithm::Gzip => "gzip",
            Algorithm::Bzip2 => "bzip2",
            Algorithm::Brotli => "brotli",
            Algorithm::Bwtc => "bwtc",
            Algorithm::Lzp3 => "lzp3",
            Algorithm::MessagePack => "msgpack",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Algorithm {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self> {
        Algorithm::from_id(id).ok_or(Error::UnknownAlgorithm { id })
    }
}

impl From<Algorithm> for u8 {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.id()
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses a name (`gzip`, `msgpack`, ...) or a decimal identifier (`2`)
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Algorithm::try_from(id);
        }

        let lowered = trimmed.to_ascii_lowercase();
        let alias = match lowered.as_str() {
            "messagepack" => "msgpack",
            "none" => "identity",
            other => other,
        };

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == alias)
            .ok_or_else(|| Error::UnknownAlgorithmName(s.to_string()))
    }
}
