pub mod udp;

use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;

pub use udp::UdpEndpoint;

/// A bound, connectionless endpoint. `send_to` may be called from many tasks
/// while the receive loop is parked in `recv_from`.
#[async_trait]
pub trait DatagramEndpoint: Send + Sync {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;

    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize>;
}
