//! DNS over TLS (RFC 7858)
//!
//! Same 2-byte length-prefixed framing as plain TCP, under a rustls client
//! session verified against the webpki root store. The response side
//! buffers everything until the server closes the connection and only then
//! unframes the buffer, so a length prefix that understates the true size
//! is still recovered; a connection that closes before the message bytes
//! arrived surfaces as a decode failure.

use super::{tcp, with_default_port, Transport};
use crate::dns::{wire, Message};
use crate::error::{Error, Result};
use async_trait::async_trait;
use rustls::pki_types::ServerName;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tracing::debug;

/// DNS over TLS transport (port 853 by default)
#[derive(Debug, Clone)]
pub struct TlsTransport {
    /// Host used for SNI and certificate verification
    host: String,
    /// `host:port` dial address
    resolver: String,
    config: Arc<rustls::ClientConfig>,
}

/// The host part of `address`, for SNI
///
/// Handles `host`, `host:port`, `[v6]` and `[v6]:port`; a bare IPv6
/// literal is returned whole.
fn sni_host(address: &str) -> String {
    if let Some(rest) = address.strip_prefix('[') {
        if let Some(end) = rest.find(']') {
            return rest[..end].to_string();
        }
    }
    match address.matches(':').count() {
        0 | 1 => address.split(':').next().unwrap_or(address).to_string(),
        _ => address.to_string(),
    }
}

impl TlsTransport {
    /// Create a DoT transport for `address` (`host` or `host:port`),
    /// verifying the server against the webpki root store
    pub fn new(address: impl AsRef<str>) -> Self {
        let mut roots = rustls::RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let config = rustls::ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        Self::with_config(address, config)
    }

    /// Create a DoT transport with a caller-supplied rustls client config,
    /// for private roots
    pub fn with_config(address: impl AsRef<str>, config: rustls::ClientConfig) -> Self {
        let address = address.as_ref();
        Self {
            host: sni_host(address),
            resolver: with_default_port(address, 853),
            config: Arc::new(config),
        }
    }

    /// The normalized resolver address
    pub fn resolver(&self) -> &str {
        &self.resolver
    }
}

#[async_trait]
impl Transport for TlsTransport {
    async fn send(&self, query: &Message) -> Result<Message> {
        let data = wire::serialize_message(query)?;

        let connector = TlsConnector::from(self.config.clone());

        let server_name = ServerName::try_from(self.host.clone())
            .map_err(|_| Error::invalid_address(&self.host))?;

        let tcp = TcpStream::connect(&self.resolver)
            .await
            .map_err(|e| Error::connection(&self.resolver, e.to_string()))?;
        let mut stream = connector
            .connect(server_name, tcp)
            .await
            .map_err(|e| Error::connection(&self.resolver, e.to_string()))?;
        debug!("TLS session established with {}", self.resolver);

        stream.write_all(&tcp::frame(&data)).await?;

        // Connection close is end-of-response; buffer until then
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await?;
        debug!(
            "received {} bytes from {} before close",
            response.len(),
            self.resolver
        );

        if response.len() < 2 {
            return Err(Error::closed_early(&self.resolver));
        }
        wire::parse_message(&response[2..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_and_sni_host() {
        let transport = TlsTransport::new("dns.example");
        assert_eq!(transport.resolver(), "dns.example:853");
        assert_eq!(transport.host, "dns.example");

        let transport = TlsTransport::new("dns.example:8853");
        assert_eq!(transport.resolver(), "dns.example:8853");
        assert_eq!(transport.host, "dns.example");
    }

    #[test]
    fn test_ipv6_literals() {
        let transport = TlsTransport::new("[2606:4700:4700::1111]:853");
        assert_eq!(transport.resolver(), "[2606:4700:4700::1111]:853");
        assert_eq!(transport.host, "2606:4700:4700::1111");

        let transport = TlsTransport::new("::1");
        assert_eq!(transport.resolver(), "[::1]:853");
        assert_eq!(transport.host, "::1");
    }

    #[test]
    fn test_with_config_keeps_address_handling() {
        let config = rustls::ClientConfig::builder()
            .with_root_certificates(rustls::RootCertStore::empty())
            .with_no_client_auth();
        let transport = TlsTransport::with_config("dns.example", config);
        assert_eq!(transport.resolver(), "dns.example:853");
    }
}
