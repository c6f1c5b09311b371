//! Plain DNS over TCP
//!
//! RFC 1035 §4.2.2 framing: a 2-byte big-endian byte-length prefix before
//! the message, both ways. The connection carries exactly one exchange. A
//! connection that closes before a complete framed response arrived is an
//! error, never an empty answer.

use super::{with_default_port, Transport};
use crate::dns::{wire, Message};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP transport (port 53 by default)
#[derive(Debug, Clone)]
pub struct TcpTransport {
    resolver: String,
}

impl TcpTransport {
    /// Create a TCP transport for `address` (`host` or `host:port`)
    pub fn new(address: impl AsRef<str>) -> Self {
        Self {
            resolver: with_default_port(address.as_ref(), 53),
        }
    }

    /// The normalized resolver address
    pub fn resolver(&self) -> &str {
        &self.resolver
    }

    fn map_eof(&self, err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::closed_early(&self.resolver)
        } else {
            Error::Io(err)
        }
    }
}

/// Prepend the 2-byte big-endian length prefix
pub(crate) fn frame(data: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(data.len() + 2);
    framed.extend_from_slice(&(data.len() as u16).to_be_bytes());
    framed.extend_from_slice(data);
    framed
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send(&self, query: &Message) -> Result<Message> {
        let data = wire::serialize_message(query)?;

        let mut stream = TcpStream::connect(&self.resolver)
            .await
            .map_err(|e| Error::connection(&self.resolver, e.to_string()))?;
        debug!("connected to {}", self.resolver);

        stream.write_all(&frame(&data)).await?;

        let mut len_buf = [0u8; 2];
        stream
            .read_exact(&mut len_buf)
            .await
            .map_err(|e| self.map_eof(e))?;
        let len = u16::from_be_bytes(len_buf) as usize;

        let mut body = vec![0u8; len];
        stream
            .read_exact(&mut body)
            .await
            .map_err(|e| self.map_eof(e))?;
        debug!("received {} bytes from {}", len, self.resolver);

        wire::parse_message(&body)
    }
}
