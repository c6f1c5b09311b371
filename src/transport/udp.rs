//! Plain DNS over UDP
//!
//! No framing beyond the message bytes themselves: one datagram out, one
//! datagram in. The first datagram received is treated as the response;
//! neither the transaction id nor the source address is checked against
//! the request.

use super::{with_default_port, Transport};
use crate::dns::{wire, Message};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::UdpSocket;
use tracing::debug;

/// Classic DNS UDP payload cap
const MAX_DATAGRAM_BYTES: usize = 512;

/// DNS over UDP transport (port 53 by default)
#[derive(Debug, Clone)]
pub struct UdpTransport {
    resolver: String,
}

impl UdpTransport {
    /// Create a UDP transport for `address` (`ip` or `ip:port`)
    pub fn new(address: impl AsRef<str>) -> Self {
        Self {
            resolver: with_default_port(address.as_ref(), 53),
        }
    }

    /// The normalized resolver address
    pub fn resolver(&self) -> &str {
        &self.resolver
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn send(&self, query: &Message) -> Result<Message> {
        let addr = SocketAddr::from_str(&self.resolver)
            .map_err(|_| Error::invalid_address(&self.resolver))?;

        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        let data = wire::serialize_message(query)?;

        let sent = socket.send_to(&data, addr).await?;
        debug!("sent {} bytes to {}", sent, addr);

        let mut buf = vec![0u8; MAX_DATAGRAM_BYTES];
        let (len, peer) = socket.recv_from(&mut buf).await?;
        debug!("received {} bytes from {}", len, peer);

        wire::parse_message(&buf[..len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(UdpTransport::new("9.9.9.9").resolver(), "9.9.9.9:53");
        assert_eq!(UdpTransport::new("9.9.9.9:5353").resolver(), "9.9.9.9:5353");
    }

    #[tokio::test]
    async fn test_rejects_non_socket_address() {
        let transport = UdpTransport::new("not-an-ip");
        let result = transport.send(&Message::new()).await;
        assert!(matches!(result, Err(Error::InvalidAddress { .. })));
    }
}
