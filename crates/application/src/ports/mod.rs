mod query_log_repository;
mod query_log_sink;
mod record_resolver;

pub use query_log_repository::QueryLogRepository;
pub use query_log_sink::QueryLogSink;
pub use record_resolver::RecordResolver;

// Re-export for convenience
pub use pinpoint_dns_domain::{Question, Resolution};
