use pinpoint_dns_infrastructure::dns::{DnsDispatcher, UdpEndpoint};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Binds the UDP endpoint and serves until Ctrl-C or a receive error.
pub async fn start_dns_server(
    bind_addr: &str,
    dispatcher: Arc<DnsDispatcher>,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let endpoint = Arc::new(UdpEndpoint::bind(socket_addr)?);

    info!(bind_address = %endpoint.local_addr()?, "DNS server listening on UDP");

    dispatcher
        .run_with_shutdown(endpoint, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await?;

    Ok(())
}
