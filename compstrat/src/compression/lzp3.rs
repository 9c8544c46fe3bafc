//! LZP compression with an order-3 context and a raw DEFLATE back end
//!
//! The predictor hashes the three bytes preceding the current position into a
//! table holding the last position seen after the same context. When the
//! prediction matches at least [`MIN_MATCH`] bytes the encoder emits a match
//! length instead of literals. Encoder and decoder update the table at the
//! same item boundaries, so the decoder rebuilds every prediction.
//!
//! Token stream before the back end:
//!
//! ```text
//! u32 LE  original length
//! repeated groups:
//!   control byte, flags LSB first, one per following item
//!   flag 0: literal byte
//!   flag 1: LEB128 (match length - MIN_MATCH)
//! ```

use super::{entropy, read_length_header, write_length_header};
use crate::{Algorithm, CompressionStrategy, Error, Result};

/// Context length in bytes
const ORDER: usize = 3;

/// Shortest match worth a flag and a length
pub(crate) const MIN_MATCH: usize = 4;

const HASH_BITS: u32 = 16;
const TABLE_SIZE: usize = 1 << HASH_BITS;
const NO_PREDICTION: u32 = u32::MAX;

const ALGORITHM: Algorithm = Algorithm::Lzp3;

fn context_hash(context: &[u8]) -> usize {
    let packed = (u32::from(context[0]) << 16) | (u32::from(context[1]) << 8) | u32::from(context[2]);
    (packed.wrapping_mul(2_654_435_761) >> (32 - HASH_BITS)) as usize
}

/// Looks up and replaces the prediction for position `pos`
fn predict(table: &mut [u32], history: &[u8], pos: usize) -> Option<usize> {
    if pos < ORDER {
        return None;
    }
    let slot = &mut table[context_hash(&history[pos - ORDER..pos])];
    let previous = *slot;
    *slot = pos as u32;
    (previous != NO_PREDICTION).then_some(previous as usize)
}

fn match_length(data: &[u8], predicted: usize, pos: usize) -> usize {
    data[pos..]
        .iter()
        .zip(&data[predicted..])
        .take_while(|(a, b)| a == b)
        .count()
}

fn write_varint(out: &mut Vec<u8>, mut value: usize) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

fn read_varint(cursor: &mut &[u8]) -> Result<usize> {
    let mut value = 0usize;
    for shift in (0..32).step_by(7) {
        let (&byte, rest) = cursor
            .split_first()
            .ok_or_else(|| Error::codec(ALGORITHM, "truncated match length"))?;
        *cursor = rest;
        value |= usize::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(Error::codec(ALGORITHM, "match length varint too long"))
}

/// Accumulates items and their flag bits into control groups
struct TokenWriter {
    out: Vec<u8>,
    control_at: usize,
    used: u8,
}

impl TokenWriter {
    fn new(out: Vec<u8>) -> Self {
        Self {
            out,
            control_at: 0,
            used: 8,
        }
    }

    fn flag(&mut self, is_match: bool) {
        if self.used == 8 {
            self.control_at = self.out.len();
            self.out.push(0);
            self.used = 0;
        }
        if is_match {
            self.out[self.control_at] |= 1 << self.used;
        }
        self.used += 1;
    }

    fn literal(&mut self, byte: u8) {
        self.flag(false);
        self.out.push(byte);
    }

    fn matched(&mut self, len: usize) {
        self.flag(true);
        write_varint(&mut self.out, len - MIN_MATCH);
    }
}

/// Compresses data with the order-3 LZP predictor
pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut header = Vec::with_capacity(data.len() + data.len() / 8 + 5);
    write_length_header(ALGORITHM, &mut header, data.len())?;

    let mut writer = TokenWriter::new(header);
    let mut table = vec![NO_PREDICTION; TABLE_SIZE];
    let mut pos = 0;

    while pos < data.len() {
        if let Some(predicted) = predict(&mut table, data, pos) {
            let len = match_length(data, predicted, pos);
            if len >= MIN_MATCH {
                writer.matched(len);
                pos += len;
                continue;
            }
        }
        writer.literal(data[pos]);
        pos += 1;
    }

    entropy::encode(ALGORITHM, &writer.out)
}

/// Decompresses data produced by [`compress`]
pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let tokens = entropy::decode(ALGORITHM, data)?;
    let mut cursor: &[u8] = &tokens;

    let expected = read_length_header(ALGORITHM, &mut cursor)?;
    let mut output: Vec<u8> = Vec::with_capacity(expected.min(tokens.len().saturating_mul(8)));
    let mut table = vec![NO_PREDICTION; TABLE_SIZE];
    let mut control = 0u8;
    let mut remaining_flags = 0u8;

    while output.len() < expected {
        if remaining_flags == 0 {
            let (&byte, rest) = cursor
                .split_first()
                .ok_or_else(|| Error::codec(ALGORITHM, "truncated control byte"))?;
            cursor = rest;
            control = byte;
            remaining_flags = 8;
        }
        let is_match = control & 1 != 0;
        control >>= 1;
        remaining_flags -= 1;

        let pos = output.len();
        let predicted = predict(&mut table, &output, pos);

        if is_match {
            let predicted = predicted
                .ok_or_else(|| Error::codec(ALGORITHM, format!("match without prediction at {}", pos)))?;
            let len = read_varint(&mut cursor)?
                .checked_add(MIN_MATCH)
                .filter(|len| *len <= expected - pos)
                .ok_or_else(|| Error::codec(ALGORITHM, format!("match at {} overruns output", pos)))?;

            // The source may overlap the bytes being written.
            for offset in 0..len {
                let byte = output[predicted + offset];
                output.push(byte);
            }
        } else {
            let (&byte, rest) = cursor
                .split_first()
                .ok_or_else(|| Error::codec(ALGORITHM, "truncated literal"))?;
            cursor = rest;
            output.push(byte);
        }
    }

    if !cursor.is_empty() {
        return Err(Error::codec(
            ALGORITHM,
            format!("{} trailing bytes after last item", cursor.len()),
        ));
    }

    Ok(output)
}

/// Order-3 LZP strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Lzp3Strategy;

impl CompressionStrategy for Lzp3Strategy {
    fn algorithm(&self) -> Algorithm {
        ALGORITHM
    }

    fn compress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        compress(payload)
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        decompress(payload)
    }
}
