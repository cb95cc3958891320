use super::Message;
use std::net::SocketAddr;

/// A decoded query together with the address it came from.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub peer: SocketAddr,
    pub query: Message,
}

impl DnsRequest {
    pub fn new(peer: SocketAddr, query: Message) -> Self {
        Self { peer, query }
    }
}
