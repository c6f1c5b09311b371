//! Transport framings
//!
//! Each transport performs exactly one query/response exchange per `send`
//! call: one socket (or one HTTP request) is opened, used, and discarded
//! within that call. No pooling, retries, or timeouts live here; a stalled
//! exchange awaits until the underlying transport errors or closes.
//!
//! Framing per medium:
//! - UDP: raw message bytes in a single datagram (port 53)
//! - TCP: 2-byte big-endian length prefix plus message bytes (port 53)
//! - TLS: identical prefix framing over rustls (port 853, RFC 7858)
//! - HTTPS: message bytes as a POST entity body (RFC 8484)

use crate::dns::Message;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::str::FromStr;

pub mod https;
pub mod tcp;
pub mod tls;
pub mod udp;

pub use https::HttpsTransport;
pub use tcp::TcpTransport;
pub use tls::TlsTransport;
pub use udp::UdpTransport;

/// A single-exchange DNS transport
///
/// Implementations serialize the query, frame it for their medium,
/// transmit it, and decode the unframed response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one query/response exchange
    async fn send(&self, query: &Message) -> Result<Message>;
}

/// The built-in transport selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Plain DNS over UDP
    Udp,
    /// Plain DNS over TCP
    Tcp,
    /// DNS over TLS (RFC 7858)
    Tls,
    /// DNS over HTTPS (RFC 8484)
    Https,
}

impl FromStr for TransportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "udp" => Ok(TransportKind::Udp),
            "tcp" => Ok(TransportKind::Tcp),
            "tls" | "dot" => Ok(TransportKind::Tls),
            "https" | "doh" => Ok(TransportKind::Https),
            _ => Err(Error::invalid_address(format!("unknown transport: {}", s))),
        }
    }
}

/// Build one of the built-in transports for a resolver address
///
/// UDP and TCP take `ip:port` (port 53 appended when missing), TLS takes
/// `host[:port]` (port 853 appended), HTTPS takes the full resolver URL.
pub fn build_transport(kind: TransportKind, address: &str) -> Box<dyn Transport> {
    match kind {
        TransportKind::Udp => Box::new(UdpTransport::new(address)),
        TransportKind::Tcp => Box::new(TcpTransport::new(address)),
        TransportKind::Tls => Box::new(TlsTransport::new(address)),
        TransportKind::Https => Box::new(HttpsTransport::new(address)),
    }
}

/// Append the default port when the address carries none
///
/// IPv6 literals use the bracketed `[addr]:port` form; a bare literal is
/// bracketed before the port goes on.
pub(crate) fn with_default_port(address: &str, port: u16) -> String {
    if let Some(rest) = address.strip_prefix('[') {
        if rest.contains("]:") {
            return address.to_string();
        }
        return format!("{}:{}", address, port);
    }
    match address.matches(':').count() {
        0 => format!("{}:{}", address, port),
        1 => address.to_string(),
        _ => format!("[{}]:{}", address, port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("udp".parse::<TransportKind>().unwrap(), TransportKind::Udp);
        assert_eq!("DoT".parse::<TransportKind>().unwrap(), TransportKind::Tls);
        assert_eq!(
            "doh".parse::<TransportKind>().unwrap(),
            TransportKind::Https
        );
        assert!("quic".parse::<TransportKind>().is_err());
    }

    #[test]
    fn test_default_port_append() {
        assert_eq!(with_default_port("1.1.1.1", 53), "1.1.1.1:53");
        assert_eq!(with_default_port("1.1.1.1:5353", 53), "1.1.1.1:5353");
        assert_eq!(with_default_port("dns.example", 853), "dns.example:853");
    }

    #[test]
    fn test_default_port_append_ipv6() {
        assert_eq!(with_default_port("::1", 53), "[::1]:53");
        assert_eq!(with_default_port("[::1]", 53), "[::1]:53");
        assert_eq!(with_default_port("[::1]:5353", 53), "[::1]:5353");
        assert_eq!(with_default_port("2606:4700:4700::1111", 853), "[2606:4700:4700::1111]:853");
    }
}
