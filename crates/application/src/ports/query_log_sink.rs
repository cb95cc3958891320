use async_trait::async_trait;
use pinpoint_dns_domain::{DomainError, QueryLog};

/// Write side of the query log, shared by every in-flight request.
#[async_trait]
pub trait QueryLogSink: Send + Sync {
    async fn log_query(&self, entry: QueryLog) -> Result<(), DomainError>;
}
