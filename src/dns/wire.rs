//! DNS wire format parsing and serialization
//!
//! This module converts between [`Message`] and the RFC 1035 wire format:
//! the 12-byte header bitfields, the question section, and the three
//! resource-record sections, in that fixed order. All multi-byte fields are
//! big-endian.
//!
//! On encode the header's four section counts are derived from the actual
//! section lengths; caller-visible state never overrides them. On decode
//! the counts drive the section loops, and running out of buffer mid-record
//! is a fatal error — no partial message is ever returned.

use super::bitbuf::BitBuffer;
use super::message::Message;
use super::name;
use super::question::Question;
use super::rdata::RData;
use super::record::ResourceRecord;
use super::types::{OpCode, RecordClass, RecordType, ResponseCode};
use crate::error::{Error, Result};

/// Serialization buffer size; also the classic UDP payload cap
pub const MAX_MESSAGE_BYTES: usize = 512;

/// Parse a DNS message from wire format bytes
///
/// # Example
///
/// ```no_run
/// use lazyquery::dns::wire::parse_message;
///
/// let wire_data = vec![/* DNS wire format bytes */];
/// let message = parse_message(&wire_data)?;
/// # Ok::<(), lazyquery::Error>(())
/// ```
pub fn parse_message(data: &[u8]) -> Result<Message> {
    let mut reader = BitBuffer::from_bytes(data);
    read_message(&mut reader)
}

/// Serialize a DNS message to wire format bytes
///
/// # Example
///
/// ```
/// use lazyquery::dns::{Message, wire::serialize_message};
///
/// let message = Message::new();
/// let wire_data = serialize_message(&message)?;
/// # Ok::<(), lazyquery::Error>(())
/// ```
pub fn serialize_message(message: &Message) -> Result<Vec<u8>> {
    let mut writer = BitBuffer::with_capacity(MAX_MESSAGE_BYTES);
    write_message(&mut writer, message)?;
    Ok(writer.as_bytes()[..writer.offset_bytes()].to_vec())
}

/// Decode a message starting at the reader's cursor
pub(crate) fn read_message(reader: &mut BitBuffer) -> Result<Message> {
    let mut message = Message::new();

    message.set_id(reader.read_uint(16)? as u16);
    message.set_response(reader.read_uint(1)? == 1);
    message.set_opcode(OpCode::from_u8(reader.read_uint(4)? as u8));
    message.set_authoritative(reader.read_uint(1)? == 1);
    message.set_truncated(reader.read_uint(1)? == 1);
    message.set_recursion_desired(reader.read_uint(1)? == 1);
    message.set_recursion_available(reader.read_uint(1)? == 1);
    // z bits are reserved; read and discarded
    let _z = reader.read_uint(3)?;
    message.set_response_code(ResponseCode::from_u8(reader.read_uint(4)? as u8));

    let qdcount = reader.read_uint(16)?;
    let ancount = reader.read_uint(16)?;
    let nscount = reader.read_uint(16)?;
    let arcount = reader.read_uint(16)?;

    for _ in 0..qdcount {
        message.add_question(read_question(reader)?);
    }
    for _ in 0..ancount {
        message.add_answer(read_record(reader)?);
    }
    for _ in 0..nscount {
        message.add_authority(read_record(reader)?);
    }
    for _ in 0..arcount {
        message.add_additional(read_record(reader)?);
    }

    Ok(message)
}

/// Encode a message at the writer's cursor
pub(crate) fn write_message(writer: &mut BitBuffer, message: &Message) -> Result<()> {
    writer.write_uint(message.id() as u32, 16)?;
    writer.write_uint(message.is_response() as u32, 1)?;
    writer.write_uint(message.opcode().to_u8() as u32, 4)?;
    writer.write_uint(message.is_authoritative() as u32, 1)?;
    writer.write_uint(message.is_truncated() as u32, 1)?;
    writer.write_uint(message.recursion_desired() as u32, 1)?;
    writer.write_uint(message.recursion_available() as u32, 1)?;
    writer.write_uint(0, 3)?;
    writer.write_uint(message.response_code().to_u8() as u32, 4)?;

    // Section counts come from the section lengths, nowhere else
    writer.write_uint(message.questions().len() as u32, 16)?;
    writer.write_uint(message.answers().len() as u32, 16)?;
    writer.write_uint(message.authorities().len() as u32, 16)?;
    writer.write_uint(message.additionals().len() as u32, 16)?;

    for question in message.questions() {
        write_question(writer, question)?;
    }
    for record in message.answers() {
        write_record(writer, record)?;
    }
    for record in message.authorities() {
        write_record(writer, record)?;
    }
    for record in message.additionals() {
        write_record(writer, record)?;
    }

    Ok(())
}

fn read_question(reader: &mut BitBuffer) -> Result<Question> {
    let qname = name::read_name(reader)?;
    let qtype = RecordType::from_u16(reader.read_uint(16)? as u16);
    let qclass = RecordClass::from_u16(reader.read_uint(16)? as u16);
    Ok(Question::new(qname, qtype, qclass))
}

fn write_question(writer: &mut BitBuffer, question: &Question) -> Result<()> {
    name::write_name(writer, question.qname())?;
    writer.write_uint(question.qtype().to_u16() as u32, 16)?;
    writer.write_uint(question.qclass().to_u16() as u32, 16)
}

fn read_record(reader: &mut BitBuffer) -> Result<ResourceRecord> {
    let rname = name::read_name(reader)?;
    let rtype = RecordType::from_u16(reader.read_uint(16)? as u16);
    let rclass = RecordClass::from_u16(reader.read_uint(16)? as u16);
    let ttl = reader.read_uint(32)?;
    let rd_length = reader.read_uint(16)? as u16;
    let rdata = RData::read(reader, rtype, rd_length)?;
    Ok(ResourceRecord::from_wire(
        rname, rtype, rclass, ttl, rd_length, rdata,
    ))
}

fn write_record(writer: &mut BitBuffer, record: &ResourceRecord) -> Result<()> {
    name::write_name(writer, record.name())?;
    writer.write_uint(record.rtype().to_u16() as u32, 16)?;
    writer.write_uint(record.rclass().to_u16() as u32, 16)?;
    writer.write_uint(record.ttl(), 32)?;
    match record.rdata() {
        Some(rdata) => rdata.write(writer),
        // No codec means no bytes to emit; encoding cannot skip silently
        None => Err(Error::UnknownRecordType {
            rtype: record.rtype().to_u16(),
        }),
    }
}
