use clap::Parser;
use pinpoint_dns_domain::CliOverrides;
use std::net::Ipv4Addr;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

/// Recent entries printed when the server stops.
const SHUTDOWN_SUMMARY_LIMIT: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "pinpoint-dns")]
#[command(version)]
#[command(about = "Pinpoint DNS - authoritative responder that answers every A query with one address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// IPv4 address returned for every A question
    #[arg(short = 'a', long, value_name = "IPV4")]
    answer_address: Option<Ipv4Addr>,

    /// TTL in seconds placed on every answer
    #[arg(long, value_name = "SECONDS")]
    ttl: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.dns_port,
            bind_address: self.bind.clone(),
            answer_address: self.answer_address,
            answer_ttl: self.ttl,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!("Starting Pinpoint DNS v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config);
    let listen_addr = config.server.listen_addr();

    let served = server::start_dns_server(&listen_addr, services.dispatcher.clone()).await;
    if let Err(e) = &served {
        error!(error = %e, "DNS server error");
    }

    let summary = services.shutdown(SHUTDOWN_SUMMARY_LIMIT).await?;
    info!(logged = summary.total, "Server shutdown complete");
    for entry in &summary.entries {
        info!(
            peer = %entry.peer,
            domain = %entry.domain,
            record_type = %entry.record_type,
            at = %entry.timestamp,
            "Recent query"
        );
    }

    served
}
