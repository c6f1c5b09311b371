//! DNS client entry point
//!
//! [`DnsClient`] owns a single transport behind the [`Transport`] trait and
//! turns caller-supplied questions into query messages. Each call is one
//! self-contained exchange; the client keeps no mutable state, so
//! concurrent calls on the same client are safe by construction.

use crate::dns::{Message, Question};
use crate::error::Result;
use crate::transport::{build_transport, Transport, TransportKind};

/// DNS stub client
///
/// # Example
///
/// ```no_run
/// use lazyquery::dns::{Question, RecordClass, RecordType};
/// use lazyquery::{DnsClient, TransportKind};
///
/// # async fn example() -> lazyquery::Result<()> {
/// let client = DnsClient::builtin(TransportKind::Tcp, "1.1.1.1");
/// let response = client
///     .query(Question::new("example.com", RecordType::MX, RecordClass::IN))
///     .await?;
/// for answer in response.answers() {
///     println!("{}", answer);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DnsClient {
    transport: Box<dyn Transport>,
}

impl std::fmt::Debug for DnsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsClient").finish_non_exhaustive()
    }
}

impl DnsClient {
    /// Create a client around a caller-supplied transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Create a client using one of the built-in transports
    ///
    /// See [`build_transport`] for the address forms each kind accepts.
    pub fn builtin(kind: TransportKind, address: &str) -> Self {
        Self {
            transport: build_transport(kind, address),
        }
    }

    /// Send a single question and await the response message
    pub async fn query(&self, question: Question) -> Result<Message> {
        self.query_multi(vec![question]).await
    }

    /// Send several questions in one message and await the response
    ///
    /// The query header is fixed: id 0, standard query, all flags clear.
    /// Section counts are derived from the section lengths at encode time.
    pub async fn query_multi(&self, questions: Vec<Question>) -> Result<Message> {
        let mut query = Message::new();
        for question in questions {
            query.add_question(question);
        }
        self.transport.send(&query).await
    }
}
