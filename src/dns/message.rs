//! DNS message implementation
//!
//! This module implements the DNS message structure as defined in RFC 1035.
//! A DNS message consists of a header and four sections: question, answer,
//! authority, and additional. The header's four section counts are not
//! stored here: they are derived from the section lengths at encode time
//! and are never independent truth.

use super::question::Question;
use super::record::ResourceRecord;
use super::types::{OpCode, ResponseCode};
use std::fmt;

/// DNS message
///
/// Represents a complete DNS message including header and all sections.
/// This structure can represent both DNS queries and responses.
///
/// # Example
///
/// ```
/// use lazyquery::dns::{Message, Question, RecordType, RecordClass};
///
/// let mut message = Message::new();
/// message.add_question(Question::new(
///     "example.com",
///     RecordType::A,
///     RecordClass::IN,
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    // Header fields
    /// Message ID
    id: u16,
    /// Query/Response flag (false = query, true = response)
    qr: bool,
    /// Operation code
    opcode: OpCode,
    /// Authoritative answer flag
    aa: bool,
    /// Truncation flag
    tc: bool,
    /// Recursion desired flag
    rd: bool,
    /// Recursion available flag
    ra: bool,
    /// Response code
    rcode: ResponseCode,

    // Message sections
    /// Question section
    questions: Vec<Question>,
    /// Answer section
    answers: Vec<ResourceRecord>,
    /// Authority section
    authorities: Vec<ResourceRecord>,
    /// Additional section
    additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Create a new DNS message with default values
    ///
    /// The message is initialized as a standard query with id 0 and all
    /// flags clear, matching what [`crate::DnsClient`] sends.
    pub fn new() -> Self {
        Self {
            id: 0,
            qr: false,
            opcode: OpCode::Query,
            aa: false,
            tc: false,
            rd: false,
            ra: false,
            rcode: ResponseCode::NoError,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    /// Get the message ID
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Set the message ID
    pub fn set_id(&mut self, id: u16) {
        self.id = id;
    }

    /// Check if this is a query (false) or response (true)
    pub fn is_response(&self) -> bool {
        self.qr
    }

    /// Set whether this is a response
    pub fn set_response(&mut self, is_response: bool) {
        self.qr = is_response;
    }

    /// Get the operation code
    pub fn opcode(&self) -> OpCode {
        self.opcode
    }

    /// Set the operation code
    pub fn set_opcode(&mut self, opcode: OpCode) {
        self.opcode = opcode;
    }

    /// Check if the authoritative answer flag is set
    pub fn is_authoritative(&self) -> bool {
        self.aa
    }

    /// Set the authoritative answer flag
    pub fn set_authoritative(&mut self, aa: bool) {
        self.aa = aa;
    }

    /// Check if the truncation flag is set
    pub fn is_truncated(&self) -> bool {
        self.tc
    }

    /// Set the truncation flag
    pub fn set_truncated(&mut self, tc: bool) {
        self.tc = tc;
    }

    /// Check if the recursion desired flag is set
    pub fn recursion_desired(&self) -> bool {
        self.rd
    }

    /// Set the recursion desired flag
    pub fn set_recursion_desired(&mut self, rd: bool) {
        self.rd = rd;
    }

    /// Check if the recursion available flag is set
    pub fn recursion_available(&self) -> bool {
        self.ra
    }

    /// Set the recursion available flag
    pub fn set_recursion_available(&mut self, ra: bool) {
        self.ra = ra;
    }

    /// Get the response code
    pub fn response_code(&self) -> ResponseCode {
        self.rcode
    }

    /// Set the response code
    pub fn set_response_code(&mut self, rcode: ResponseCode) {
        self.rcode = rcode;
    }

    /// Get the questions
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Add a question to the message
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Get the answers
    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    /// Add an answer to the message
    pub fn add_answer(&mut self, answer: ResourceRecord) {
        self.answers.push(answer);
    }

    /// Get the authority records
    pub fn authorities(&self) -> &[ResourceRecord] {
        &self.authorities
    }

    /// Add an authority record to the message
    pub fn add_authority(&mut self, record: ResourceRecord) {
        self.authorities.push(record);
    }

    /// Get the additional records
    pub fn additionals(&self) -> &[ResourceRecord] {
        &self.additionals
    }

    /// Add an additional record to the message
    pub fn add_additional(&mut self, record: ResourceRecord) {
        self.additionals.push(record);
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; {} id {} {} qd {} an {} ns {} ar {}",
            self.opcode,
            self.id,
            self.rcode,
            self.questions.len(),
            self.answers.len(),
            self.authorities.len(),
            self.additionals.len()
        )?;
        for question in &self.questions {
            writeln!(f, ";{}", question)?;
        }
        for record in &self.answers {
            writeln!(f, "{}", record)?;
        }
        for record in &self.authorities {
            writeln!(f, "{}", record)?;
        }
        for record in &self.additionals {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::rdata::RData;
    use crate::dns::types::{RecordClass, RecordType};
    use std::net::Ipv4Addr;

    #[test]
    fn test_message_defaults() {
        let message = Message::new();
        assert_eq!(message.id(), 0);
        assert!(!message.is_response());
        assert_eq!(message.opcode(), OpCode::Query);
        assert!(!message.recursion_desired());
        assert_eq!(message.response_code(), ResponseCode::NoError);
        assert!(message.questions().is_empty());
    }

    #[test]
    fn test_message_sections() {
        let mut message = Message::new();
        message.add_question(Question::new("example.com", RecordType::A, RecordClass::IN));
        message.add_answer(ResourceRecord::new(
            "example.com",
            RecordType::A,
            RecordClass::IN,
            300,
            RData::A(Ipv4Addr::new(192, 0, 2, 1)),
        ));

        assert_eq!(message.questions().len(), 1);
        assert_eq!(message.answers().len(), 1);
        assert!(message.authorities().is_empty());
        assert!(message.additionals().is_empty());
    }

    #[test]
    fn test_message_display() {
        let mut message = Message::new();
        message.add_question(Question::new("example.com", RecordType::A, RecordClass::IN));
        let display = message.to_string();
        assert!(display.contains("QUERY"));
        assert!(display.contains("example.com"));
    }
}
