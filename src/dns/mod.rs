//! DNS protocol implementation module
//!
//! This module provides the wire-level DNS protocol support (RFC 1035):
//! - A bit-addressable buffer primitive used by every codec
//! - Domain-name encoding with compression-pointer decoding
//! - DNS message parsing and serialization
//! - Rdata codecs for the common record types (A, NS, CNAME, SOA, MX, TXT)
//!
//! # Example
//!
//! ```rust
//! use lazyquery::dns::{Message, Question, RecordClass, RecordType};
//!
//! // Create a DNS query message
//! let mut message = Message::new();
//! message.add_question(Question::new(
//!     "example.com",
//!     RecordType::A,
//!     RecordClass::IN,
//! ));
//! let wire = lazyquery::dns::serialize_message(&message).unwrap();
//! ```

pub mod bitbuf;
pub mod message;
pub mod name;
pub mod question;
pub mod rdata;
pub mod record;
pub mod types;
pub mod wire;

// Re-export commonly used types
pub use bitbuf::BitBuffer;
pub use message::Message;
pub use question::Question;
pub use rdata::{EdnsOption, RData};
pub use record::ResourceRecord;
pub use types::{OpCode, RecordClass, RecordType, ResponseCode};
pub use wire::{parse_message, serialize_message};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_reexports() {
        let _msg = Message::new();
        let _question = Question::new("example.com", RecordType::A, RecordClass::IN);
        let _opcode = OpCode::Query;
        let _rcode = ResponseCode::NoError;
    }

    #[test]
    fn test_record_types_accessible() {
        assert_eq!(RecordType::A.to_u16(), 1);
        assert_eq!(RecordType::TXT.to_u16(), 16);
        assert_eq!(RecordType::OPT.to_u16(), 41);
    }

    #[test]
    fn test_message_serialization() {
        let message = Message::new();
        let serialized = serialize_message(&message);
        assert!(serialized.is_ok());

        let wire_data = serialized.unwrap();
        let parsed = parse_message(&wire_data);
        assert!(parsed.is_ok());
    }
}
