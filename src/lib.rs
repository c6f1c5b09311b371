//! lazyquery - An async DNS client in Rust
//!
//! This crate implements a DNS stub client on top of a hand-built RFC 1035
//! wire codec. Queries are serialized to wire format, handed to one of four
//! transports, and the reply is decoded back into a [`dns::Message`].
//!
//! # Architecture
//!
//! The crate is organized into three main modules:
//!
//! - `dns`: DNS protocol implementation (bit-level buffer, domain-name codec,
//!   message parsing and serialization)
//! - `transport`: transport framings (UDP, TCP, DNS over TLS, DNS over HTTPS)
//! - `client`: the [`DnsClient`] entry point tying a query to a transport
//!
//! # Example
//!
//! ```no_run
//! use lazyquery::dns::{Question, RecordClass, RecordType};
//! use lazyquery::{DnsClient, TransportKind};
//!
//! # async fn example() -> lazyquery::Result<()> {
//! let client = DnsClient::builtin(TransportKind::Udp, "1.1.1.1");
//! let response = client
//!     .query(Question::new("example.com", RecordType::A, RecordClass::IN))
//!     .await?;
//! println!("{}", response);
//! # Ok(())
//! # }
//! ```

/// DNS protocol implementation
///
/// This module provides DNS message parsing, serialization, and core DNS types.
pub mod dns;

/// Transport framings
///
/// Includes UDP datagram, TCP stream, DNS over TLS (RFC 7858), and
/// DNS over HTTPS (RFC 8484) client transports.
pub mod transport;

/// DNS client entry point
pub mod client;

pub use client::DnsClient;
pub use transport::{Transport, TransportKind};

/// Error types and handling
///
/// Provides unified error types for the entire crate.
pub mod error {

    use thiserror::Error;

    /// Main error type for lazyquery
    #[derive(Error, Debug)]
    pub enum Error {
        // ============ Wire Codec Errors ============
        /// Malformed wire data: buffer exhausted mid-read, or a value that
        /// overflows its declared bit width
        #[error("malformed DNS wire data: {0}")]
        MalformedWire(String),

        /// A domain-name compression pointer chain revisited an offset
        #[error("domain-name compression loop at byte offset {offset}")]
        CompressionLoop {
            /// The revisited pointer target, in bytes from the message start
            offset: usize,
        },

        /// No rdata codec to emit bytes for this record type
        #[error("no rdata codec for record type {rtype}")]
        UnknownRecordType {
            /// The numeric record type
            rtype: u16,
        },

        // ============ Transport Errors ============
        /// A stream transport closed before a complete response was read
        #[error("connection to {address} closed before a complete response")]
        ClosedEarly {
            /// The resolver address
            address: String,
        },

        /// The DoH server answered with a non-2xx status
        #[error("DoH server returned status {status}: {body}")]
        HttpStatus {
            /// The HTTP status code
            status: u16,
            /// The raw response body, decoded as text for diagnostics
            body: String,
        },

        /// Network connection error
        #[error("connection error to {address}: {reason}")]
        Connection {
            /// Target address
            address: String,
            /// Failure reason
            reason: String,
        },

        /// Address parsing error
        #[error("invalid resolver address: {input}")]
        InvalidAddress {
            /// The invalid address input
            input: String,
        },

        // ============ File/IO Errors ============
        /// IO error
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    impl Error {
        /// Create a MalformedWire error
        pub fn malformed(reason: impl Into<String>) -> Self {
            Self::MalformedWire(reason.into())
        }

        /// Create a ClosedEarly error
        pub fn closed_early(address: impl Into<String>) -> Self {
            Self::ClosedEarly {
                address: address.into(),
            }
        }

        /// Create a Connection error
        pub fn connection(address: impl Into<String>, reason: impl Into<String>) -> Self {
            Self::Connection {
                address: address.into(),
                reason: reason.into(),
            }
        }

        /// Create an InvalidAddress error
        pub fn invalid_address(input: impl Into<String>) -> Self {
            Self::InvalidAddress {
                input: input.into(),
            }
        }
    }

    /// Result alias used throughout the crate
    pub type Result<T> = std::result::Result<T, Error>;
}

pub use error::{Error, Result};
