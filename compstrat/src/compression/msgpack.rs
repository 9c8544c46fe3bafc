//! MessagePack structured-document strategy
//!
//! `compress` stores JSON objects as MessagePack maps and everything else as a
//! MessagePack `bin` value. No marker records which branch was taken:
//! `decompress` sniffs the leading type tag instead. Map tags (fixmap, map 16,
//! map 32) are turned back into compact JSON text; any other tag is decoded as
//! a byte string.
//!
//! JSON that parses to anything other than an object (arrays, strings,
//! numbers, `null`) is stored as `bin` on purpose, so it comes back byte for
//! byte instead of re-serialized.
//!
//! The sniffing is a known ambiguity. A caller handing `decompress` a map
//! encoded elsewhere gets JSON text back even if it meant raw bytes. Payloads
//! produced by `compress` never hit it, because the raw branch always leads
//! with a `bin` tag.

use crate::{Algorithm, CompressionStrategy, Error, Result};

use rmp::Marker;
use serde_bytes::{ByteBuf, Bytes};
use serde_json::Value;

const ALGORITHM: Algorithm = Algorithm::MessagePack;

/// Whether a leading byte is one of the MessagePack map type tags
pub fn is_map_marker(byte: u8) -> bool {
    matches!(
        Marker::from_u8(byte),
        Marker::FixMap(_) | Marker::Map16 | Marker::Map32
    )
}

/// Parses `payload` as a JSON object, or `None` when it is anything else
fn parse_document(payload: &[u8]) -> Option<Value> {
    let text = std::str::from_utf8(payload).ok()?;
    match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => Some(value),
        Ok(_) => {
            log::trace!("JSON payload is not an object, storing raw bytes");
            None
        }
        Err(e) => {
            log::trace!("payload is not JSON ({}), storing raw bytes", e);
            None
        }
    }
}

/// Encodes a JSON object as a map, any other payload as a `bin` value
pub(crate) fn compress(payload: &[u8]) -> Result<Vec<u8>> {
    let encoded = match parse_document(payload) {
        Some(document) => rmp_serde::to_vec(&document),
        None => rmp_serde::to_vec(Bytes::new(payload)),
    };
    encoded.map_err(|e| Error::codec(ALGORITHM, e.to_string()))
}

/// Decodes a map back to JSON text, anything else to raw bytes
pub(crate) fn decompress(payload: &[u8]) -> Result<Vec<u8>> {
    let first = *payload
        .first()
        .ok_or_else(|| Error::codec(ALGORITHM, "empty compressed data"))?;

    if is_map_marker(first) {
        let document: Value = rmp_serde::from_slice(payload)
            .map_err(|e| Error::codec(ALGORITHM, e.to_string()))?;
        serde_json::to_vec(&document).map_err(|e| Error::codec(ALGORITHM, e.to_string()))
    } else {
        let bytes: ByteBuf = rmp_serde::from_slice(payload)
            .map_err(|e| Error::codec(ALGORITHM, e.to_string()))?;
        Ok(bytes.into_vec())
    }
}

/// MessagePack strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagePackStrategy;

impl CompressionStrategy for MessagePackStrategy {
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
    use serde_json::json;

    #[test]
    fn test_map_markers() {
        assert!(is_map_marker(0x80));
        assert!(is_map_marker(0x8F));
        assert!(is_map_marker(0xDE));
        assert!(is_map_marker(0xDF));

        assert!(!is_map_marker(0x7F));
        assert!(!is_map_marker(0x90));
        assert!(!is_map_marker(0xC4));
        assert!(!is_map_marker(0xDC));
    }

    #[test]
    fn test_object_is_stored_as_map() {
        let compressed = compress(br#"{"compact":true,"schema":0}"#).unwrap();
        assert_eq!(compressed[0], 0x82);

        let decompressed = decompress(&compressed).unwrap();
        let value: Value = serde_json::from_slice(&decompressed).unwrap();
        assert_eq!(value, json!({"compact": true, "schema": 0}));
    }

    #[test]
    fn test_whitespace_and_key_order_are_not_preserved() {
        let original = b"{ \"b\": [1, 2, 3],\n  \"a\": null }";
        let decompressed = decompress(&compress(original).unwrap()).unwrap();
        assert!(!decompressed.contains(&b' '));
        assert!(!decompressed.contains(&b'\n'));

        let value: Value = serde_json::from_slice(&decompressed).unwrap();
        assert_eq!(value, json!({"a": null, "b": [1, 2, 3]}));
    }

    #[test]
    fn test_binary_is_stored_as_bin() {
        let noise = [0xFF, 0x00, 0xFE, 0x80, 0x81];
        let compressed = compress(&noise).unwrap();
        assert_eq!(compressed, vec![0xC4, 5, 0xFF, 0x00, 0xFE, 0x80, 0x81]);
        assert_eq!(decompress(&compressed).unwrap(), noise);
    }

    #[test]
    fn test_non_object_json_is_stored_as_bin() {
        for original in [&b"[1,2,3]"[..], b"42", b"\"text\"", b"null"] {
            let compressed = compress(original).unwrap();
            assert_eq!(compressed[0], 0xC4);
            assert_eq!(decompress(&compressed).unwrap(), original);
        }
    }

    #[test]
    fn test_empty_payload() {
        let compressed = compress(&[]).unwrap();
        assert_eq!(compressed, vec![0xC4, 0x00]);
        assert!(decompress(&compressed).unwrap().is_empty());
        assert!(decompress(&[]).is_err());
    }

    #[test]
    fn test_non_bytes_value_is_rejected() {
        // positive fixint 100 is neither a map nor a byte string
        assert!(decompress(&[0x64]).is_err());
    }
}
