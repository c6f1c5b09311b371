//! DNS resource record implementation
//!
//! This module defines DNS resource records, which carry the actual data
//! returned in DNS responses. A record decoded from the wire keeps its
//! declared rdata length even when the payload itself was skipped because
//! no codec exists for its type.

use super::rdata::RData;
use super::types::{RecordClass, RecordType};
use std::fmt;

/// DNS resource record
///
/// Represents a complete DNS resource record including name, type, class,
/// TTL, and data. Resource records appear in the answer, authority, and
/// additional sections of DNS messages.
///
/// # Example
///
/// ```
/// use lazyquery::dns::{ResourceRecord, RecordType, RecordClass, RData};
/// use std::net::Ipv4Addr;
///
/// let record = ResourceRecord::new(
///     "example.com",
///     RecordType::A,
///     RecordClass::IN,
///     3600,
///     RData::A(Ipv4Addr::new(192, 0, 2, 1)),
/// );
/// assert_eq!(record.rd_length(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Domain name
    name: String,
    /// Record type
    rtype: RecordType,
    /// Record class
    rclass: RecordClass,
    /// Time to live (seconds)
    ttl: u32,
    /// Declared rdata length in bytes (wire bookkeeping)
    rd_length: u16,
    /// Resource data; `None` when the record's type has no codec
    rdata: Option<RData>,
}

impl ResourceRecord {
    /// Create a new resource record
    ///
    /// The rdata length is derived from `rdata`, matching what encoding
    /// will emit.
    pub fn new(
        name: impl Into<String>,
        rtype: RecordType,
        rclass: RecordClass,
        ttl: u32,
        rdata: RData,
    ) -> Self {
        Self {
            name: name.into(),
            rtype,
            rclass,
            ttl,
            rd_length: rdata.wire_len() as u16,
            rdata: Some(rdata),
        }
    }

    /// Assemble a record decoded from the wire, rdata possibly absent
    pub(crate) fn from_wire(
        name: String,
        rtype: RecordType,
        rclass: RecordClass,
        ttl: u32,
        rd_length: u16,
        rdata: Option<RData>,
    ) -> Self {
        Self {
            name,
            rtype,
            rclass,
            ttl,
            rd_length,
            rdata,
        }
    }

    /// Get the domain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the record type
    pub fn rtype(&self) -> RecordType {
        self.rtype
    }

    /// Get the record class
    pub fn rclass(&self) -> RecordClass {
        self.rclass
    }

    /// Get the TTL
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Get the declared rdata length in bytes
    pub fn rd_length(&self) -> u16 {
        self.rd_length
    }

    /// Get the resource data, if a codec existed for the record's type
    pub fn rdata(&self) -> Option<&RData> {
        self.rdata.as_ref()
    }

    /// Set the domain name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the TTL
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl;
    }

    /// Replace the resource data, re-deriving the rdata length
    pub fn set_rdata(&mut self, rdata: RData) {
        self.rd_length = rdata.wire_len() as u16;
        self.rdata = Some(rdata);
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t",
            self.name, self.ttl, self.rclass, self.rtype
        )?;
        match &self.rdata {
            Some(rdata) => write!(f, "{}", rdata),
            None => write!(f, "<{} rdata bytes>", self.rd_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_record_creation_derives_rd_length() {
        let record = ResourceRecord::new(
            "example.com",
            RecordType::A,
            RecordClass::IN,
            300,
            RData::A(Ipv4Addr::new(93, 184, 216, 34)),
        );
        assert_eq!(record.rd_length(), 4);
        assert_eq!(record.ttl(), 300);
    }

    #[test]
    fn test_set_rdata_rederives_length() {
        let mut record = ResourceRecord::new(
            "example.com",
            RecordType::TXT,
            RecordClass::IN,
            60,
            RData::TXT("hi".to_string()),
        );
        assert_eq!(record.rd_length(), 3);
        record.set_rdata(RData::TXT("hello".to_string()));
        assert_eq!(record.rd_length(), 6);
    }

    #[test]
    fn test_record_without_rdata_displays_length() {
        let record = ResourceRecord::from_wire(
            "example.com".to_string(),
            RecordType::Unknown(99),
            RecordClass::IN,
            60,
            4,
            None,
        );
        let display = record.to_string();
        assert!(display.contains("TYPE99"));
        assert!(display.contains("4 rdata bytes"));
    }
}
