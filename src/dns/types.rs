//! DNS protocol type definitions
//!
//! This module defines the core DNS types including:
//! - Record types (A, NS, CNAME, etc.)
//! - Record classes (IN, CH, etc.)
//! - Operation codes
//! - Response codes

use std::fmt;

/// DNS record type
///
/// Covers the RFC 1035 §3.2.2 types plus the OPT pseudo-record (RFC 6891).
/// Any other type code is carried as `Unknown` so decoding can continue
/// past records this crate has no codec for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RecordType {
    /// IPv4 host address record
    A = 1,
    /// Authoritative name server record
    NS = 2,
    /// Mail destination (obsolete, use MX)
    MD = 3,
    /// Mail forwarder (obsolete, use MX)
    MF = 4,
    /// Canonical name record
    CNAME = 5,
    /// Start of authority record
    SOA = 6,
    /// Mailbox domain name (experimental)
    MB = 7,
    /// Mail group member (experimental)
    MG = 8,
    /// Mail rename domain name (experimental)
    MR = 9,
    /// Null record (experimental)
    NULL = 10,
    /// Well known service description
    WKS = 11,
    /// Pointer record
    PTR = 12,
    /// Host information
    HINFO = 13,
    /// Mailbox or mail list information
    MINFO = 14,
    /// Mail exchange record
    MX = 15,
    /// Text record
    TXT = 16,
    /// OPT pseudo-record for EDNS(0) (RFC 6891)
    OPT = 41,
    /// Unknown or unsupported record type
    Unknown(u16),
}

impl RecordType {
    /// Create a RecordType from a u16 value
    ///
    /// # Example
    ///
    /// ```
    /// use lazyquery::dns::RecordType;
    ///
    /// assert_eq!(RecordType::from_u16(1), RecordType::A);
    /// assert_eq!(RecordType::from_u16(99), RecordType::Unknown(99));
    /// ```
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::NS,
            3 => RecordType::MD,
            4 => RecordType::MF,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            7 => RecordType::MB,
            8 => RecordType::MG,
            9 => RecordType::MR,
            10 => RecordType::NULL,
            11 => RecordType::WKS,
            12 => RecordType::PTR,
            13 => RecordType::HINFO,
            14 => RecordType::MINFO,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            41 => RecordType::OPT,
            _ => RecordType::Unknown(value),
        }
    }

    /// Convert RecordType to its u16 value
    pub fn to_u16(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::MD => 3,
            RecordType::MF => 4,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MB => 7,
            RecordType::MG => 8,
            RecordType::MR => 9,
            RecordType::NULL => 10,
            RecordType::WKS => 11,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MINFO => 14,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::OPT => 41,
            RecordType::Unknown(v) => v,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::NS => write!(f, "NS"),
            RecordType::MD => write!(f, "MD"),
            RecordType::MF => write!(f, "MF"),
            RecordType::CNAME => write!(f, "CNAME"),
            RecordType::SOA => write!(f, "SOA"),
            RecordType::MB => write!(f, "MB"),
            RecordType::MG => write!(f, "MG"),
            RecordType::MR => write!(f, "MR"),
            RecordType::NULL => write!(f, "NULL"),
            RecordType::WKS => write!(f, "WKS"),
            RecordType::PTR => write!(f, "PTR"),
            RecordType::HINFO => write!(f, "HINFO"),
            RecordType::MINFO => write!(f, "MINFO"),
            RecordType::MX => write!(f, "MX"),
            RecordType::TXT => write!(f, "TXT"),
            RecordType::OPT => write!(f, "OPT"),
            RecordType::Unknown(v) => write!(f, "TYPE{}", v),
        }
    }
}

/// DNS record class
///
/// Represents the class of DNS record (usually IN for Internet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RecordClass {
    /// Internet class
    IN = 1,
    /// CSNET class (obsolete)
    CS = 2,
    /// Chaos class
    CH = 3,
    /// Hesiod class
    HS = 4,
    /// Any class (question sections only)
    ANY = 255,
    /// Unknown or unsupported class
    Unknown(u16),
}

impl RecordClass {
    /// Create a RecordClass from a u16 value
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordClass::IN,
            2 => RecordClass::CS,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            255 => RecordClass::ANY,
            _ => RecordClass::Unknown(value),
        }
    }

    /// Convert RecordClass to its u16 value
    pub fn to_u16(self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::ANY => 255,
            RecordClass::Unknown(v) => v,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::IN => write!(f, "IN"),
            RecordClass::CS => write!(f, "CS"),
            RecordClass::CH => write!(f, "CH"),
            RecordClass::HS => write!(f, "HS"),
            RecordClass::ANY => write!(f, "ANY"),
            RecordClass::Unknown(v) => write!(f, "CLASS{}", v),
        }
    }
}

/// DNS operation code (4 header bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Standard query
    Query = 0,
    /// Inverse query
    IQuery = 1,
    /// Server status request
    Status = 2,
    /// Reserved or unassigned opcode
    Unknown(u8),
}

impl OpCode {
    /// Create an OpCode from a u8 value
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => OpCode::Query,
            1 => OpCode::IQuery,
            2 => OpCode::Status,
            _ => OpCode::Unknown(value),
        }
    }

    /// Convert OpCode to its u8 value
    pub fn to_u8(self) -> u8 {
        match self {
            OpCode::Query => 0,
            OpCode::IQuery => 1,
            OpCode::Status => 2,
            OpCode::Unknown(v) => v,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::Query => write!(f, "QUERY"),
            OpCode::IQuery => write!(f, "IQUERY"),
            OpCode::Status => write!(f, "STATUS"),
            OpCode::Unknown(v) => write!(f, "OPCODE{}", v),
        }
    }
}

/// DNS response code (4 header bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResponseCode {
    /// No error condition
    NoError = 0,
    /// Format error, the server could not interpret the query
    FormErr = 1,
    /// Server failure
    ServFail = 2,
    /// Name error, the domain does not exist (authoritative servers only)
    NXDomain = 3,
    /// Operation not implemented
    NotImp = 4,
    /// Refused by server policy
    Refused = 5,
    /// Reserved or unassigned response code
    Unknown(u8),
}

impl ResponseCode {
    /// Create a ResponseCode from a u8 value
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            _ => ResponseCode::Unknown(value),
        }
    }

    /// Convert ResponseCode to its u8 value
    pub fn to_u8(self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(v) => v,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::NoError => write!(f, "NOERROR"),
            ResponseCode::FormErr => write!(f, "FORMERR"),
            ResponseCode::ServFail => write!(f, "SERVFAIL"),
            ResponseCode::NXDomain => write!(f, "NXDOMAIN"),
            ResponseCode::NotImp => write!(f, "NOTIMP"),
            ResponseCode::Refused => write!(f, "REFUSED"),
            ResponseCode::Unknown(v) => write!(f, "RCODE{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_conversions() {
        for value in [1u16, 2, 5, 6, 15, 16, 41] {
            assert_eq!(RecordType::from_u16(value).to_u16(), value);
        }
        assert_eq!(RecordType::from_u16(99), RecordType::Unknown(99));
        assert_eq!(RecordType::Unknown(99).to_u16(), 99);
    }

    #[test]
    fn test_record_class_conversions() {
        assert_eq!(RecordClass::from_u16(1), RecordClass::IN);
        assert_eq!(RecordClass::from_u16(255), RecordClass::ANY);
        assert_eq!(RecordClass::from_u16(7).to_u16(), 7);
    }

    #[test]
    fn test_opcode_conversions() {
        assert_eq!(OpCode::from_u8(0), OpCode::Query);
        assert_eq!(OpCode::from_u8(2), OpCode::Status);
        assert_eq!(OpCode::from_u8(9).to_u8(), 9);
    }

    #[test]
    fn test_response_code_display() {
        assert_eq!(ResponseCode::NoError.to_string(), "NOERROR");
        assert_eq!(ResponseCode::NXDomain.to_string(), "NXDOMAIN");
        assert_eq!(ResponseCode::Unknown(11).to_string(), "RCODE11");
    }

    #[test]
    fn test_unknown_type_display() {
        assert_eq!(RecordType::Unknown(99).to_string(), "TYPE99");
        assert_eq!(RecordType::MX.to_string(), "MX");
    }
}
