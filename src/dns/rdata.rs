//! DNS resource record data (RDATA) implementation
//!
//! This module defines the RDATA variants for the supported record types
//! together with their wire codecs (RFC 1035 §3.3, §3.4). Dispatch is an
//! exhaustive match on [`RecordType`]: decoding an unsupported type skips
//! its payload and yields no rdata, while encoding a record that carries no
//! rdata is an error.

use super::bitbuf::BitBuffer;
use super::name;
use super::types::RecordType;
use crate::error::{Error, Result};
use std::fmt;
use std::net::Ipv4Addr;
use tracing::warn;

/// A single EDNS(0) option inside an OPT record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdnsOption {
    /// Option code
    pub code: u16,
    /// Declared option data length in bytes
    pub length: u16,
    /// Option data
    pub data: Vec<u8>,
}

/// DNS resource record data
///
/// Contains the actual data for different types of DNS records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    /// IPv4 address (A record)
    A(Ipv4Addr),

    /// Name server (NS record)
    NS(String),

    /// Canonical name (CNAME record)
    CNAME(String),

    /// Start of authority (SOA record)
    SOA {
        /// Primary name server for the zone
        mname: String,
        /// Mailbox of the person responsible for the zone
        rname: String,
        /// Version number of the zone; wraps, compared with sequence
        /// space arithmetic
        serial: u32,
        /// Refresh interval
        refresh: u32,
        /// Retry interval
        retry: u32,
        /// Expiration time
        expire: u32,
        /// Minimum TTL
        minimum: u32,
    },

    /// Mail exchange (MX record)
    MX {
        /// Preference given to this record, lower values preferred
        preference: u16,
        /// Mail exchange hostname
        exchange: String,
    },

    /// Text (TXT record), a single character-string of at most 255 bytes
    TXT(String),

    /// EDNS(0) pseudo-record (OPT). Option parsing is not implemented;
    /// decoding yields an empty option list.
    OPT {
        /// Ordered option list
        options: Vec<EdnsOption>,
    },
}

impl RData {
    /// The record type this rdata belongs to
    pub fn record_type(&self) -> RecordType {
        match self {
            RData::A(_) => RecordType::A,
            RData::NS(_) => RecordType::NS,
            RData::CNAME(_) => RecordType::CNAME,
            RData::SOA { .. } => RecordType::SOA,
            RData::MX { .. } => RecordType::MX,
            RData::TXT(_) => RecordType::TXT,
            RData::OPT { .. } => RecordType::OPT,
        }
    }

    /// Byte length of the payload `write` emits after the rd_length field
    ///
    /// Must stay in lock-step with [`RData::write`] or record lengths become
    /// incorrect on the wire.
    pub fn wire_len(&self) -> usize {
        match self {
            RData::A(_) => 4,
            RData::NS(target) | RData::CNAME(target) => name::encoded_len_bits(target) / 8,
            RData::SOA { mname, rname, .. } => {
                name::encoded_len_bits(mname) / 8 + name::encoded_len_bits(rname) / 8 + 20
            }
            RData::MX { exchange, .. } => name::encoded_len_bits(exchange) / 8 + 2,
            RData::TXT(text) => text.len() + 1,
            // Options are not emitted yet
            RData::OPT { .. } => 0,
        }
    }

    /// Write the 16-bit rd_length field immediately followed by the payload
    pub(crate) fn write(&self, writer: &mut BitBuffer) -> Result<()> {
        match self {
            RData::A(addr) => {
                writer.write_uint(4, 16)?;
                for octet in addr.octets() {
                    writer.write_uint(octet as u32, 8)?;
                }
            }
            RData::NS(target) | RData::CNAME(target) => {
                writer.write_uint(self.wire_len() as u32, 16)?;
                name::write_name(writer, target)?;
            }
            RData::SOA {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => {
                writer.write_uint(self.wire_len() as u32, 16)?;
                name::write_name(writer, mname)?;
                name::write_name(writer, rname)?;
                writer.write_uint(*serial, 32)?;
                writer.write_uint(*refresh, 32)?;
                writer.write_uint(*retry, 32)?;
                writer.write_uint(*expire, 32)?;
                writer.write_uint(*minimum, 32)?;
            }
            RData::MX {
                preference,
                exchange,
            } => {
                writer.write_uint(self.wire_len() as u32, 16)?;
                writer.write_uint(*preference as u32, 16)?;
                name::write_name(writer, exchange)?;
            }
            RData::TXT(text) => {
                if text.len() > 255 {
                    return Err(Error::malformed(format!(
                        "TXT rdata is {} bytes, character-strings cap at 255",
                        text.len()
                    )));
                }
                writer.write_uint(text.len() as u32 + 1, 16)?;
                writer.write_uint(text.len() as u32, 8)?;
                for byte in text.as_bytes() {
                    writer.write_uint(*byte as u32, 8)?;
                }
            }
            RData::OPT { .. } => {
                // Placeholder: an empty option list is zero rdata bytes
                writer.write_uint(0, 16)?;
            }
        }
        Ok(())
    }

    /// Decode the rdata for `rtype`, consuming exactly `rd_length` bytes
    ///
    /// Unsupported types are skipped and yield `None`; decoding continues
    /// past them. Each supported decoder is itself responsible for honoring
    /// `rd_length` (TXT reads its own inner length-prefixed string).
    pub(crate) fn read(
        reader: &mut BitBuffer,
        rtype: RecordType,
        rd_length: u16,
    ) -> Result<Option<Self>> {
        let rdata = match rtype {
            RecordType::A => {
                if rd_length != 4 {
                    return Err(Error::malformed(format!(
                        "A rdata length {}, expected 4",
                        rd_length
                    )));
                }
                let mut octets = [0u8; 4];
                for octet in octets.iter_mut() {
                    *octet = reader.read_uint(8)? as u8;
                }
                RData::A(Ipv4Addr::from(octets))
            }
            RecordType::NS => RData::NS(name::read_name(reader)?),
            RecordType::CNAME => RData::CNAME(name::read_name(reader)?),
            RecordType::SOA => RData::SOA {
                mname: name::read_name(reader)?,
                rname: name::read_name(reader)?,
                serial: reader.read_uint(32)?,
                refresh: reader.read_uint(32)?,
                retry: reader.read_uint(32)?,
                expire: reader.read_uint(32)?,
                minimum: reader.read_uint(32)?,
            },
            RecordType::MX => RData::MX {
                preference: reader.read_uint(16)? as u16,
                exchange: name::read_name(reader)?,
            },
            RecordType::TXT => {
                let len = reader.read_uint(8)?;
                let mut bytes = Vec::with_capacity(len as usize);
                for _ in 0..len {
                    bytes.push(reader.read_uint(8)? as u8);
                }
                RData::TXT(String::from_utf8_lossy(&bytes).into_owned())
            }
            RecordType::OPT => {
                // Option parsing is not implemented; skip the payload so the
                // cursor stays aligned with the next record
                reader.skip_bytes(rd_length as usize)?;
                RData::OPT {
                    options: Vec::new(),
                }
            }
            other => {
                warn!(
                    rtype = other.to_u16(),
                    rd_length, "no rdata codec for record type, skipping"
                );
                reader.skip_bytes(rd_length as usize)?;
                return Ok(None);
            }
        };
        Ok(Some(rdata))
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::NS(target) => write!(f, "{}", target),
            RData::CNAME(target) => write!(f, "{}", target),
            RData::SOA {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => write!(
                f,
                "{} {} {} {} {} {} {}",
                mname, rname, serial, refresh, retry, expire, minimum
            ),
            RData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RData::TXT(text) => write!(f, "\"{}\"", text),
            RData::OPT { options } => write!(f, "OPT({} options)", options.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(rdata: RData, rtype: RecordType) -> (u16, Option<RData>) {
        let mut writer = BitBuffer::with_capacity(512);
        rdata.write(&mut writer).unwrap();
        let bytes = writer.as_bytes()[..writer.offset_bytes()].to_vec();

        let mut reader = BitBuffer::from_bytes(&bytes);
        let rd_length = reader.read_uint(16).unwrap() as u16;
        let decoded = RData::read(&mut reader, rtype, rd_length).unwrap();
        assert_eq!(reader.offset_bytes(), bytes.len(), "cursor misaligned");
        (rd_length, decoded)
    }

    #[test]
    fn test_a_roundtrip() {
        let rdata = RData::A(Ipv4Addr::new(93, 184, 216, 34));
        let (rd_length, decoded) = roundtrip(rdata.clone(), RecordType::A);
        assert_eq!(rd_length, 4);
        assert_eq!(decoded, Some(rdata));
    }

    #[test]
    fn test_a_rejects_bad_length() {
        let mut reader = BitBuffer::from_bytes(&[1, 2, 3]);
        assert!(RData::read(&mut reader, RecordType::A, 3).is_err());
    }

    #[test]
    fn test_ns_cname_roundtrip() {
        let ns = RData::NS("ns1.example.com".to_string());
        let (rd_length, decoded) = roundtrip(ns.clone(), RecordType::NS);
        assert_eq!(rd_length as usize, ns.wire_len());
        assert_eq!(decoded, Some(ns));

        let cname = RData::CNAME("alias.example.com".to_string());
        let (_, decoded) = roundtrip(cname.clone(), RecordType::CNAME);
        assert_eq!(decoded, Some(cname));
    }

    #[test]
    fn test_soa_roundtrip() {
        let soa = RData::SOA {
            mname: "ns1.example.com".to_string(),
            rname: "hostmaster.example.com".to_string(),
            serial: 2024010101,
            refresh: 7200,
            retry: 3600,
            expire: 1209600,
            minimum: 300,
        };
        let (rd_length, decoded) = roundtrip(soa.clone(), RecordType::SOA);
        // Both names plus five 32-bit fields
        assert_eq!(rd_length, 17 + 24 + 20);
        assert_eq!(decoded, Some(soa));
    }

    #[test]
    fn test_mx_roundtrip() {
        let mx = RData::MX {
            preference: 10,
            exchange: "mail.example.com".to_string(),
        };
        let (rd_length, decoded) = roundtrip(mx.clone(), RecordType::MX);
        assert_eq!(rd_length as usize, mx.wire_len());
        assert_eq!(decoded, Some(mx));
    }

    #[test]
    fn test_txt_roundtrip() {
        let txt = RData::TXT("v=spf1 -all".to_string());
        let (rd_length, decoded) = roundtrip(txt.clone(), RecordType::TXT);
        assert_eq!(rd_length, 12);
        assert_eq!(decoded, Some(txt));
    }

    #[test]
    fn test_txt_cap() {
        let txt = RData::TXT("x".repeat(256));
        let mut writer = BitBuffer::with_capacity(512);
        assert!(txt.write(&mut writer).is_err());
    }

    #[test]
    fn test_opt_decodes_to_empty_options() {
        // Declared rdata bytes are skipped, not parsed
        let mut reader = BitBuffer::from_bytes(&[0xde, 0xad, 0xbe, 0xef]);
        let decoded = RData::read(&mut reader, RecordType::OPT, 4).unwrap();
        assert_eq!(
            decoded,
            Some(RData::OPT {
                options: Vec::new()
            })
        );
        assert_eq!(reader.offset_bytes(), 4);
    }

    #[test]
    fn test_unknown_type_skips_exactly() {
        let mut reader = BitBuffer::from_bytes(&[1, 2, 3, 4, 5]);
        let decoded = RData::read(&mut reader, RecordType::Unknown(99), 4).unwrap();
        assert!(decoded.is_none());
        assert_eq!(reader.offset_bytes(), 4);
    }

    #[test]
    fn test_wire_len_matches_written_bytes() {
        let samples = vec![
            RData::A(Ipv4Addr::new(1, 2, 3, 4)),
            RData::NS("a.b".to_string()),
            RData::CNAME("c.d.e".to_string()),
            RData::MX {
                preference: 5,
                exchange: "m.x".to_string(),
            },
            RData::TXT("hello".to_string()),
            RData::OPT {
                options: Vec::new(),
            },
        ];
        for rdata in samples {
            let mut writer = BitBuffer::with_capacity(512);
            rdata.write(&mut writer).unwrap();
            // 2 bytes of rd_length plus the payload
            assert_eq!(writer.offset_bytes(), 2 + rdata.wire_len());
        }
    }
}
