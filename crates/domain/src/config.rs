pub mod dns;
pub mod errors;
pub mod logging;
pub mod query_log;
pub mod root;
pub mod server;

pub use dns::{AdditionalRdata, DnsConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query_log::QueryLogConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
