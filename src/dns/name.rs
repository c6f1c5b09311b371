//! Domain-name wire codec
//!
//! Names are encoded as a sequence of length-prefixed labels terminated by a
//! zero-length label (RFC 1035 §3.1). On decode, a length byte with both
//! high bits set is a compression pointer: a 14-bit byte offset back into
//! the same message where decoding continues (§4.1.4). Pointers may chain;
//! only the position just past the first pointer is restored once the
//! terminating zero label is reached.
//!
//! The encoder never emits pointers. The decoder rejects pointer chains
//! that revisit an offset, which would otherwise loop forever.

use super::bitbuf::BitBuffer;
use crate::error::{Error, Result};

/// Length-byte mask marking a compression pointer
pub const POINTER_MASK: u8 = 0xC0;

/// Labels longer than 63 bytes would collide with the pointer mask
const MAX_LABEL_LEN: usize = 63;

/// Encode a dot-separated name as labels plus a zero terminator
///
/// Empty labels (leading/trailing/double dots, or the root name "") are
/// skipped, so "example.com." and "example.com" produce identical bytes.
/// Characters are written one byte each (ASCII/Latin-1 semantics).
pub fn write_name(writer: &mut BitBuffer, name: &str) -> Result<()> {
    for label in name.split('.') {
        if label.is_empty() {
            continue;
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(Error::malformed(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
        writer.write_uint(label.len() as u32, 8)?;
        for c in label.chars() {
            writer.write_uint(c as u32, 8)?;
        }
    }
    writer.write_uint(0, 8)
}

/// Exact bit length `write_name` would produce for `name`
///
/// Kept in lock-step with [`write_name`]; rdata length fields are computed
/// from this before the name bytes are written.
pub fn encoded_len_bits(name: &str) -> usize {
    let mut length = 8;
    for label in name.split('.') {
        if label.is_empty() {
            continue;
        }
        length += 8 * (label.len() + 1);
    }
    length
}

/// Decode a name, following compression pointers
///
/// After the terminating zero label the cursor is restored to just past the
/// first pointer encountered (or left where the terminator ended when the
/// name was not compressed). A pointer that targets its own offset or
/// revisits an earlier target fails with
/// [`CompressionLoop`](crate::Error::CompressionLoop).
pub fn read_name(reader: &mut BitBuffer) -> Result<String> {
    let mut labels: Vec<String> = Vec::new();
    let mut return_to: Option<usize> = None;
    let mut visited: Vec<usize> = Vec::new();

    let mut len = reader.read_uint(8)?;
    while len != 0 {
        if len as u8 & POINTER_MASK == POINTER_MASK {
            // The pointer's first byte sits one byte behind the cursor
            let pointer_at = reader.offset_bits() / 8 - 1;
            let target = ((len as usize & 0x3F) << 8) | reader.read_uint(8)? as usize;
            if target == pointer_at || visited.contains(&target) {
                return Err(Error::CompressionLoop { offset: target });
            }
            visited.push(target);
            if return_to.is_none() {
                return_to = Some(reader.offset_bits());
            }
            reader.seek(target * 8)?;
            len = reader.read_uint(8)?;
            continue;
        }

        let mut label = String::with_capacity(len as usize);
        for _ in 0..len {
            label.push(reader.read_uint(8)? as u8 as char);
        }
        labels.push(label);
        len = reader.read_uint(8)?;
    }

    if let Some(bits) = return_to {
        reader.seek(bits)?;
    }
    Ok(labels.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(name: &str) -> Vec<u8> {
        let mut writer = BitBuffer::with_capacity(256);
        write_name(&mut writer, name).unwrap();
        writer.as_bytes()[..writer.offset_bytes()].to_vec()
    }

    #[test]
    fn test_encode_labels() {
        assert_eq!(
            encode("www.z.cn"),
            vec![3, b'w', b'w', b'w', 1, b'z', 2, b'c', b'n', 0]
        );
    }

    #[test]
    fn test_root_name_is_single_zero() {
        assert_eq!(encode(""), vec![0]);
        assert_eq!(encode("example.com"), encode("example.com."));
    }

    #[test]
    fn test_encoded_len_matches_encode() {
        for name in ["", "com", "example.com", "a.b.c.d.e"] {
            assert_eq!(encoded_len_bits(name), encode(name).len() * 8);
        }
    }

    #[test]
    fn test_label_length_cap() {
        let long = "a".repeat(64);
        let mut writer = BitBuffer::with_capacity(256);
        assert!(write_name(&mut writer, &long).is_err());
    }

    #[test]
    fn test_roundtrip_uncompressed() {
        let mut buf = BitBuffer::from_bytes(&encode("mail.example.com"));
        assert_eq!(read_name(&mut buf).unwrap(), "mail.example.com");
        assert_eq!(buf.offset_bytes(), 18);
    }

    #[test]
    fn test_shared_suffix_pointer() {
        // "a.b.com" at offset 0, then "x" + pointer to offset 2 ("b.com")
        let mut data = encode("a.b.com");
        data.extend_from_slice(&[1, b'x', 0xC0, 0x02]);
        let continuation = data.len();

        let mut reader = BitBuffer::from_bytes(&data);
        assert_eq!(read_name(&mut reader).unwrap(), "a.b.com");
        assert_eq!(read_name(&mut reader).unwrap(), "x.b.com");
        // Cursor restored to just past the pointer
        assert_eq!(reader.offset_bytes(), continuation);
    }

    #[test]
    fn test_two_hop_pointer_chain() {
        // offset 0: "com"; offset 5: pointer -> 0; offset 7: "b" + pointer -> 5
        let data = vec![
            3, b'c', b'o', b'm', 0, 0xC0, 0x00, 1, b'b', 0xC0, 0x05,
        ];
        let mut reader = BitBuffer::from_bytes(&data);
        reader.seek(7 * 8).unwrap();
        assert_eq!(read_name(&mut reader).unwrap(), "b.com");
        assert_eq!(reader.offset_bytes(), 11);
    }

    #[test]
    fn test_self_pointer_rejected() {
        let mut reader = BitBuffer::from_bytes(&[0xC0, 0x00]);
        assert!(matches!(
            read_name(&mut reader),
            Err(Error::CompressionLoop { offset: 0 })
        ));
    }

    #[test]
    fn test_pointer_cycle_rejected() {
        // offset 0 -> offset 2 -> offset 0
        let mut reader = BitBuffer::from_bytes(&[0xC0, 0x02, 0xC0, 0x00]);
        assert!(matches!(
            read_name(&mut reader),
            Err(Error::CompressionLoop { .. })
        ));
    }

    #[test]
    fn test_truncated_name_is_fatal() {
        // Length byte promises 4 bytes, only 2 present
        let mut reader = BitBuffer::from_bytes(&[4, b'a', b'b']);
        assert!(read_name(&mut reader).is_err());
    }
}
