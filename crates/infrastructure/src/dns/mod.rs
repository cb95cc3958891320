pub mod events;
pub mod query_logger;
pub mod resolver;
pub mod server;
pub mod transport;
pub mod wire;

pub use events::{QueryEventEmitter, ServerMetrics};
pub use query_logger::QueryEventLogger;
pub use resolver::FixedAddressResolver;
pub use server::DnsDispatcher;
pub use transport::{DatagramEndpoint, UdpEndpoint};
