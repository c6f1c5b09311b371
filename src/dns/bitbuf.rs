//! Bit-addressable buffer primitive
//!
//! Every DNS codec in this crate reads and writes through [`BitBuffer`]: a
//! fixed-capacity byte region with a single cursor counted in bits from the
//! start. Header flags are 1-4 bits wide and not byte aligned, so the buffer
//! supports unsigned integers of any width from 1 to 32 bits, MSB first,
//! split across byte boundaries as needed.
//!
//! The buffer never grows. Reading or writing past its capacity is a
//! [`MalformedWire`](crate::Error::MalformedWire) error, as is writing a
//! value that does not fit in its declared bit width.

use crate::error::{Error, Result};

/// Fixed-capacity buffer with an absolute bit cursor
#[derive(Debug, Clone)]
pub struct BitBuffer {
    buf: Vec<u8>,
    /// Cursor position in bits from the start of the buffer
    pos: usize,
}

impl BitBuffer {
    /// Create a zero-filled buffer of `bytes` capacity, cursor at the start
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: vec![0u8; bytes],
            pos: 0,
        }
    }

    /// Wrap received bytes for decoding, cursor at the start
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            buf: data.to_vec(),
            pos: 0,
        }
    }

    /// Current cursor position in bits
    pub fn offset_bits(&self) -> usize {
        self.pos
    }

    /// Current cursor position in whole bytes (floor division; the wire
    /// format is byte aligned between records even though header fields are
    /// not)
    pub fn offset_bytes(&self) -> usize {
        self.pos / 8
    }

    /// The underlying bytes, including any not yet written
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Set the cursor to an absolute bit offset
    ///
    /// Used for following name-compression pointers and restoring the
    /// position afterward. Seeking to the very end of the buffer is valid;
    /// seeking past it is not.
    pub fn seek(&mut self, bit_offset: usize) -> Result<()> {
        if bit_offset > self.buf.len() * 8 {
            return Err(Error::malformed(format!(
                "seek to bit {} past buffer end ({} bits)",
                bit_offset,
                self.buf.len() * 8
            )));
        }
        self.pos = bit_offset;
        Ok(())
    }

    /// Advance the cursor past `count` bytes without decoding them
    pub fn skip_bytes(&mut self, count: usize) -> Result<()> {
        self.seek(self.pos + count * 8)
    }

    /// Write the low `bits` bits of `value`, MSB first, advancing the cursor
    ///
    /// `value` must fit in `bits` bits; silent truncation would corrupt the
    /// wire image, so an oversized value is an error.
    pub fn write_uint(&mut self, value: u32, bits: u32) -> Result<()> {
        if bits == 0 || bits > 32 {
            return Err(Error::malformed(format!("bit width {} out of range", bits)));
        }
        if bits < 32 && value >> bits != 0 {
            return Err(Error::malformed(format!(
                "value {} does not fit in {} bits",
                value, bits
            )));
        }
        if self.pos + bits as usize > self.buf.len() * 8 {
            return Err(Error::malformed(format!(
                "write of {} bits at bit {} overruns {}-byte buffer",
                bits,
                self.pos,
                self.buf.len()
            )));
        }

        for i in (0..bits).rev() {
            let byte = self.pos / 8;
            let shift = 7 - (self.pos % 8);
            if (value >> i) & 1 == 1 {
                self.buf[byte] |= 1 << shift;
            } else {
                self.buf[byte] &= !(1 << shift);
            }
            self.pos += 1;
        }
        Ok(())
    }

    /// Read `bits` bits, MSB first, advancing the cursor
    pub fn read_uint(&mut self, bits: u32) -> Result<u32> {
        if bits == 0 || bits > 32 {
            return Err(Error::malformed(format!("bit width {} out of range", bits)));
        }
        if self.pos + bits as usize > self.buf.len() * 8 {
            return Err(Error::malformed(format!(
                "read of {} bits at bit {} overruns {}-byte buffer",
                bits,
                self.pos,
                self.buf.len()
            )));
        }

        let mut value: u32 = 0;
        for _ in 0..bits {
            let byte = self.pos / 8;
            let shift = 7 - (self.pos % 8);
            value = (value << 1) | ((self.buf[byte] >> shift) & 1) as u32;
            self.pos += 1;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_widths() {
        for bits in 1..=32u32 {
            let max = if bits == 32 { u32::MAX } else { (1 << bits) - 1 };
            for value in [0u32, 1, max / 2, max] {
                let mut buf = BitBuffer::with_capacity(8);
                buf.write_uint(value, bits).unwrap();
                buf.seek(0).unwrap();
                assert_eq!(buf.read_uint(bits).unwrap(), value, "width {}", bits);
            }
        }
    }

    #[test]
    fn test_header_flag_layout() {
        // The header's second 16-bit group: qr(1) opcode(4) aa tc rd ra(1
        // each) z(3) rcode(4)
        let widths = [1u32, 4, 1, 1, 1, 1, 3, 4];
        let values = [1u32, 0, 1, 0, 1, 1, 0, 3];

        let mut buf = BitBuffer::with_capacity(2);
        for (value, bits) in values.iter().zip(widths.iter()) {
            buf.write_uint(*value, *bits).unwrap();
        }
        assert_eq!(buf.offset_bits(), 16);
        // qr=1 opcode=0000 aa=1 tc=0 | rd=1 ra=1 z=000 rcode=0011
        assert_eq!(buf.as_bytes(), &[0b1000_0010, 0b1100_0011]);

        buf.seek(0).unwrap();
        for (value, bits) in values.iter().zip(widths.iter()) {
            assert_eq!(buf.read_uint(*bits).unwrap(), *value);
        }
    }

    #[test]
    fn test_write_splits_across_byte_boundary() {
        let mut buf = BitBuffer::with_capacity(3);
        buf.write_uint(0b101, 3).unwrap();
        buf.write_uint(0x1ff, 9).unwrap();
        buf.seek(0).unwrap();
        assert_eq!(buf.read_uint(3).unwrap(), 0b101);
        assert_eq!(buf.read_uint(9).unwrap(), 0x1ff);
    }

    #[test]
    fn test_value_must_fit_declared_width() {
        let mut buf = BitBuffer::with_capacity(4);
        assert!(buf.write_uint(2, 1).is_err());
        assert!(buf.write_uint(16, 4).is_err());
        assert!(buf.write_uint(15, 4).is_ok());
    }

    #[test]
    fn test_overrun_is_fatal() {
        let mut buf = BitBuffer::with_capacity(1);
        assert!(buf.write_uint(0, 16).is_err());

        let mut reader = BitBuffer::from_bytes(&[0xab]);
        assert!(reader.read_uint(16).is_err());
    }

    #[test]
    fn test_seek_bounds() {
        let mut buf = BitBuffer::from_bytes(&[0, 0]);
        assert!(buf.seek(16).is_ok());
        assert!(buf.seek(17).is_err());
    }

    #[test]
    fn test_offset_bytes_floors() {
        let mut buf = BitBuffer::with_capacity(4);
        buf.write_uint(0, 12).unwrap();
        assert_eq!(buf.offset_bits(), 12);
        assert_eq!(buf.offset_bytes(), 1);
    }
}
