//! lazyquery - command-line DNS lookups
//!
//! A thin dig-like front end over the library: builds one question, sends
//! it over the selected transport, and prints the decoded response.

use clap::Parser;
use lazyquery::dns::{Question, RecordClass, RecordType};
use lazyquery::transport::TransportKind;
use lazyquery::DnsClient;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// lazyquery command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Domain name to query
    name: String,

    /// Record type (A, NS, CNAME, SOA, MX, TXT)
    #[arg(short = 't', long, default_value = "A")]
    rtype: String,

    /// Transport (udp, tcp, tls, https)
    #[arg(short = 'x', long, default_value = "udp")]
    transport: String,

    /// Resolver: ip[:port] for udp/tcp, host[:port] for tls, URL for https
    #[arg(short, long, default_value = "1.1.1.1")]
    server: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn parse_rtype(value: &str) -> anyhow::Result<RecordType> {
    let rtype = match value.to_ascii_uppercase().as_str() {
        "A" => RecordType::A,
        "NS" => RecordType::NS,
        "CNAME" => RecordType::CNAME,
        "SOA" => RecordType::SOA,
        "MX" => RecordType::MX,
        "TXT" => RecordType::TXT,
        other => anyhow::bail!("unsupported record type: {}", other),
    };
    Ok(rtype)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // rustls v0.23 needs a process-level CryptoProvider for the TLS and
    // HTTPS transports
    let _ = rustls::crypto::ring::default_provider().install_default();

    let kind: TransportKind = args.transport.parse()?;
    let rtype = parse_rtype(&args.rtype)?;
    debug!("querying {} ({}) via {:?}", args.name, rtype, kind);

    let client = DnsClient::builtin(kind, &args.server);
    let response = client
        .query(Question::new(args.name, rtype, RecordClass::IN))
        .await?;

    print!("{}", response);
    Ok(())
}
