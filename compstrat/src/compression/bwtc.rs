//! Block-sorting compression: Burrows-Wheeler transform, move-to-front coding
//! and a raw DEFLATE back end
//!
//! Container layout before the back end:
//!
//! ```text
//! u32 LE  original length
//! repeated per block (at most BLOCK_SIZE bytes of input each):
//!   u32 LE  block length n
//!   u32 LE  primary index (< n)
//!   n bytes move-to-front coded last column
//! ```

use super::{entropy, read_length_header, write_length_header};
use crate::{Algorithm, CompressionStrategy, Error, Result};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// Maximum number of input bytes sorted as one block
pub(crate) const BLOCK_SIZE: usize = 64 * 1024;

const ALGORITHM: Algorithm = Algorithm::Bwtc;

/// Sorts the cyclic rotations of `block` by prefix doubling.
///
/// Returns the starting offsets of the rotations in sorted order. `block`
/// must not be empty.
fn sort_rotations(block: &[u8]) -> Vec<usize> {
    let n = block.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = block.iter().map(|&b| usize::from(b)).collect();
    let mut next_rank = vec![0usize; n];
    let mut width = 1;

    loop {
        let key = |i: usize| (rank[i], rank[(i + width) % n]);
        order.sort_unstable_by_key(|&i| key(i));

        next_rank[order[0]] = 0;
        for pair in order.windows(2) {
            let bump = usize::from(key(pair[0]) != key(pair[1]));
            next_rank[pair[1]] = next_rank[pair[0]] + bump;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        // Either every rotation is distinct or the compared prefix already
        // covers whole rotations (periodic input).
        if rank[order[n - 1]] == n - 1 || width >= n {
            break;
        }
        width *= 2;
    }

    order
}

/// Forward transform: returns the last column and the row holding the
/// unrotated block
fn transform(block: &[u8]) -> (Vec<u8>, usize) {
    let n = block.len();
    let order = sort_rotations(block);

    let mut primary = 0;
    let mut last = Vec::with_capacity(n);
    for (row, &start) in order.iter().enumerate() {
        if start == 0 {
            primary = row;
        }
        last.push(block[(start + n - 1) % n]);
    }

    (last, primary)
}

/// Inverse transform via the last-to-first mapping
fn inverse_transform(last: &[u8], primary: usize) -> Vec<u8> {
    let mut counts = [0usize; 256];
    for &b in last {
        counts[usize::from(b)] += 1;
    }

    let mut starts = [0usize; 256];
    let mut total = 0;
    for (start, count) in starts.iter_mut().zip(counts.iter()) {
        *start = total;
        total += count;
    }

    let mut seen = [0usize; 256];
    let lf: Vec<usize> = last
        .iter()
        .map(|&b| {
            let symbol = usize::from(b);
            let row = starts[symbol] + seen[symbol];
            seen[symbol] += 1;
            row
        })
        .collect();

    let mut output = vec![0u8; last.len()];
    let mut row = primary;
    for slot in output.iter_mut().rev() {
        *slot = last[row];
        row = lf[row];
    }
    output
}

fn initial_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    table
}

fn move_to_front_encode(data: &[u8]) -> Vec<u8> {
    let mut table = initial_table();
    data.iter()
        .map(|&b| {
            // Every byte value is present in the table.
            let index = table.iter().position(|&t| t == b).unwrap_or(0);
            table.copy_within(0..index, 1);
            table[0] = b;
            index as u8
        })
        .collect()
}

fn move_to_front_decode(indices: &[u8]) -> Vec<u8> {
    let mut table = initial_table();
    indices
        .iter()
        .map(|&i| {
            let index = usize::from(i);
            let b = table[index];
            table.copy_within(0..index, 1);
            table[0] = b;
            b
        })
        .collect()
}

/// Compresses data with the block-sorting pipeline
pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut container = Vec::with_capacity(data.len() + 4 + 8 * data.len().div_ceil(BLOCK_SIZE));
    write_length_header(ALGORITHM, &mut container, data.len())?;

    for block in data.chunks(BLOCK_SIZE) {
        let (last, primary) = transform(block);
        write_length_header(ALGORITHM, &mut container, block.len())?;
        container
            .write_u32::<LittleEndian>(primary as u32)
            .map_err(|e| Error::codec(ALGORITHM, e.to_string()))?;
        container.extend_from_slice(&move_to_front_encode(&last));
    }

    entropy::encode(ALGORITHM, &container)
}

/// Decompresses data produced by [`compress`]
pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let container = entropy::decode(ALGORITHM, data)?;
    let mut cursor: &[u8] = &container;

    let expected = read_length_header(ALGORITHM, &mut cursor)?;
    let mut output = Vec::with_capacity(expected.min(container.len()));

    while output.len() < expected {
        let block_len = read_length_header(ALGORITHM, &mut cursor)?;
        let primary = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| Error::codec(ALGORITHM, "truncated block header"))? as usize;

        if block_len == 0 || block_len > BLOCK_SIZE {
            return Err(Error::codec(
                ALGORITHM,
                format!("invalid block length {}", block_len),
            ));
        }
        if primary >= block_len {
            return Err(Error::codec(
                ALGORITHM,
                format!("primary index {} outside block of {} bytes", primary, block_len),
            ));
        }
        if cursor.len() < block_len {
            return Err(Error::codec(ALGORITHM, "truncated block data"));
        }

        let (coded, rest) = cursor.split_at(block_len);
        cursor = rest;

        let last = move_to_front_decode(coded);
        output.extend_from_slice(&inverse_transform(&last, primary));
    }

    if output.len() != expected {
        return Err(Error::codec(
            ALGORITHM,
            format!("Expected {} bytes, got {}", expected, output.len()),
        ));
    }
    if !cursor.is_empty() {
        return Err(Error::codec(
            ALGORITHM,
            format!("{} trailing bytes after last block", cursor.len()),
        ));
    }

    Ok(output)
}

/// Burrows-Wheeler block-sorting strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct BwtcStrategy;

impl CompressionStrategy for BwtcStrategy {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_banana() {
        let (last, primary) = transform(b"banana");
        assert_eq!(last, b"nnbaaa");
        assert_eq!(primary, 3);
        assert_eq!(inverse_transform(&last, primary), b"banana");
    }

    #[test]
    fn test_transform_periodic_block() {
        let block = b"abababab";
        let (last, primary) = transform(block);
        assert_eq!(inverse_transform(&last, primary), block);

        let zeros = vec![0u8; 1000];
        let (last, primary) = transform(&zeros);
        assert_eq!(inverse_transform(&last, primary), zeros);
    }

    #[test]
    fn test_move_to_front() {
        let data = b"nnbaaa";
        let coded = move_to_front_encode(data);
        assert_eq!(coded, vec![b'n', 0, b'b' + 1, b'a' + 2, 0, 0]);
        assert_eq!(move_to_front_decode(&coded), data);
    }

    #[test]
    fn test_round_trip_across_blocks() {
        let pattern = b"The quick brown fox jumps over the lazy dog. ";
        let mut data = Vec::new();
        while data.len() < BLOCK_SIZE * 2 + 123 {
            data.extend_from_slice(pattern);
        }

        let compressed = compress(&data).expect("Compression failed");
        assert!(compressed.len() < data.len() / 10);

        let decompressed = decompress(&compressed).expect("Decompression failed");
        assert_eq!(decompressed, data);
    }

    #[test]
    fn test_empty_round_trip() {
        let compressed = compress(&[]).expect("Compression failed");
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_primary_out_of_range() {
        let mut container = Vec::new();
        write_length_header(ALGORITHM, &mut container, 3).unwrap();
        write_length_header(ALGORITHM, &mut container, 3).unwrap();
        container.write_u32::<LittleEndian>(3).unwrap();
        container.extend_from_slice(&[1, 2, 3]);

        let payload = entropy::encode(ALGORITHM, &container).unwrap();
        let err = decompress(&payload).unwrap_err();
        assert!(err.to_string().contains("primary index"));
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut container = Vec::new();
        write_length_header(ALGORITHM, &mut container, 0).unwrap();
        container.push(0xAA);

        let payload = entropy::encode(ALGORITHM, &container).unwrap();
        assert!(decompress(&payload).is_err());
    }

    #[test]
    fn test_rejects_truncated_block() {
        let mut container = Vec::new();
        write_length_header(ALGORITHM, &mut container, 10).unwrap();
        write_length_header(ALGORITHM, &mut container, 10).unwrap();
        container.write_u32::<LittleEndian>(0).unwrap();
        container.extend_from_slice(&[0, 0, 0]);

        let payload = entropy::encode(ALGORITHM, &container).unwrap();
        assert!(decompress(&payload).is_err());
    }
}
