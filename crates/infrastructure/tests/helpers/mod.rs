#![allow(dead_code, unused_imports)]

mod mock_endpoint;
mod packets;

pub use mock_endpoint::MockEndpoint;
pub use packets::{build_query, build_query_with_labels, parse_response, ParsedRecord, ParsedResponse};

use pinpoint_dns_application::use_cases::HandleDnsQueryUseCase;
use pinpoint_dns_domain::config::AdditionalRdata;
use pinpoint_dns_infrastructure::dns::{
    DnsDispatcher, FixedAddressResolver, QueryEventEmitter, QueryEventLogger,
};
use pinpoint_dns_infrastructure::repositories::InMemoryQueryLogRepository;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const ANSWER_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 0, 2, 53);
pub const ANSWER_TTL: u32 = 31337;

pub struct TestServer {
    pub dispatcher: Arc<DnsDispatcher>,
    pub repository: Arc<InMemoryQueryLogRepository>,
    pub logger: JoinHandle<u64>,
}

/// Dispatcher wired the way the binary wires it, with an in-memory log.
pub fn build_server() -> TestServer {
    let repository = Arc::new(InMemoryQueryLogRepository::new(10_000));
    let (emitter, rx) = QueryEventEmitter::new();
    let logger = QueryEventLogger::new(repository.clone()).start(rx);

    let use_case = Arc::new(HandleDnsQueryUseCase::new(
        Arc::new(FixedAddressResolver::new(ANSWER_ADDRESS, ANSWER_TTL)),
        Arc::new(emitter),
    ));

    TestServer {
        dispatcher: Arc::new(DnsDispatcher::new(use_case, AdditionalRdata::Emit)),
        repository,
        logger,
    }
}
