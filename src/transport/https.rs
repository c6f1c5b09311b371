//! DNS over HTTPS (RFC 8484)
//!
//! The serialized message travels as a binary POST entity body with
//! content type `application/dns-message`; no framing beyond the codec's
//! own bytes, the entity length delimits the message. Only 2xx responses
//! are decoded as DNS; any other status is surfaced as an error carrying
//! the raw body as diagnostic text.

use super::Transport;
use crate::dns::{wire, Message};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

/// The RFC 8484 media type
const DNS_MESSAGE_TYPE: &str = "application/dns-message";

/// DNS over HTTPS transport
#[derive(Debug, Clone)]
pub struct HttpsTransport {
    /// Full resolver URL, e.g. `https://cloudflare-dns.com/dns-query`
    url: String,
}

impl HttpsTransport {
    /// Create a DoH transport for the resolver `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The resolver URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpsTransport {
    async fn send(&self, query: &Message) -> Result<Message> {
        let data = wire::serialize_message(query)?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::connection(&self.url, e.to_string()))?;

        let response = client
            .post(&self.url)
            .header(CONTENT_TYPE, DNS_MESSAGE_TYPE)
            .header(ACCEPT, DNS_MESSAGE_TYPE)
            .body(data)
            .send()
            .await
            .map_err(|e| Error::connection(&self.url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Non-DNS payload; decode as text for diagnostics
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::connection(&self.url, e.to_string()))?;
        debug!("received {} bytes from {}", bytes.len(), self.url);

        wire::parse_message(&bytes)
    }
}
